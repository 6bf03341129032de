//! Models for portfolio aggregation output.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::UNCATEGORIZED_LABEL;

/// One labeled slice of a breakdown, ready for chart consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    pub label: String,
    /// Current value in this slice.
    pub value: Decimal,
    /// Share of total portfolio value (0-100). Zero when the portfolio has
    /// no current value.
    pub percentage: Decimal,
}

/// Portfolio-level metrics and breakdowns, recomputed in full from the
/// current holdings and market data. Carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Sum of invested amounts over all holdings.
    pub total_invested: Decimal,
    /// Sum of current values over all holdings. Holdings with unknown NAV
    /// contribute zero here while still counting toward `total_invested`.
    pub total_value: Decimal,
    pub overall_gain_loss: Decimal,
    /// Overall gain/loss relative to invested amount (0-100 scale). Zero
    /// when nothing is invested.
    pub gain_loss_percentage: Decimal,
    /// One entry per holding, in holding order. Two holdings of the same
    /// fund produce two entries.
    pub fund_allocation: Vec<AllocationEntry>,
    /// Summed current value per category, in first-seen order.
    pub category_distribution: Vec<AllocationEntry>,
}

impl PortfolioSummary {
    /// The all-zero summary returned for an empty portfolio.
    pub fn empty() -> Self {
        Self {
            total_invested: Decimal::ZERO,
            total_value: Decimal::ZERO,
            overall_gain_loss: Decimal::ZERO,
            gain_loss_percentage: Decimal::ZERO,
            fund_allocation: Vec::new(),
            category_distribution: Vec::new(),
        }
    }
}

/// Valuation view of a single holding for list display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub holding_id: String,
    pub fund_id: String,
    pub invested_amount: Decimal,
    pub units: Decimal,
    /// NAV used for valuation, if known.
    pub nav: Option<Decimal>,
    /// Category with the fallback label already applied.
    pub category: String,
    /// `units * nav`, or zero when the NAV is unknown.
    pub current_value: Decimal,
    pub gain_loss: Decimal,
    /// Gain/loss relative to this holding's invested amount (0-100 scale).
    /// Zero when nothing is invested.
    pub gain_loss_percentage: Decimal,
    /// Share of total portfolio current value (0-1 scale).
    pub weight: Decimal,
}

/// Options controlling aggregation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationOptions {
    /// Label holdings are grouped under when their category is unknown.
    pub uncategorized_label: String,
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            uncategorized_label: UNCATEGORIZED_LABEL.to_string(),
        }
    }
}
