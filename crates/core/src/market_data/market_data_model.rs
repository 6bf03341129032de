//! Domain models for fund market data.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest market data for a single fund, as supplied by a provider.
///
/// Both fields may legitimately be unknown: a fund can be tracked before its
/// NAV history or classification is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundMarketData {
    /// Current market price per unit.
    pub nav: Option<Decimal>,
    /// Classification label (scheme category or sector).
    pub category: Option<String>,
}

/// One entry of the fund universe (AMFI scheme list with latest NAV).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundProfile {
    pub scheme_code: String,
    pub scheme_name: String,
    pub category: Option<String>,
    pub nav: Option<Decimal>,
    pub nav_date: Option<NaiveDate>,
}

impl FundProfile {
    /// Projects the catalog entry onto the market data shape consumed by
    /// portfolio aggregation.
    pub fn market_data(&self) -> FundMarketData {
        FundMarketData {
            nav: self.nav,
            category: self.category.clone(),
        }
    }
}
