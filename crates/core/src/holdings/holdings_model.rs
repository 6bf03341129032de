//! Domain models for portfolio holdings.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single tracked fund position.
///
/// `invested_amount` and `units` are independent fields; neither is ever
/// derived from the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Unique identifier, assigned by the backing store.
    pub id: String,
    /// AMFI scheme code, or a free-text name for untracked funds.
    pub fund_id: String,
    /// Cumulative amount invested in this position.
    pub invested_amount: Decimal,
    /// Number of fund units held. May be fractional (observed up to 4 decimal places).
    pub units: Decimal,
    pub purchase_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub fund_id: String,
    pub invested_amount: Decimal,
    pub units: Decimal,
    pub purchase_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Full-replace update for an existing holding. Timestamps are store-managed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingUpdate {
    pub fund_id: String,
    pub invested_amount: Decimal,
    pub units: Decimal,
    pub purchase_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
