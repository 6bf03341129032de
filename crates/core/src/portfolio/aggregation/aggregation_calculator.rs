//! Pure portfolio aggregation.
//!
//! Both entry points are deterministic, side-effect free, and total over
//! their input domain: empty holdings, funds missing from the market data
//! lookup, unknown NAVs or categories, and zero-unit holdings are all
//! defined cases, never errors. Summation follows holding order.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{DECIMAL_PRECISION, DISPLAY_DECIMAL_PRECISION};
use crate::holdings::Holding;
use crate::market_data::FundMarketData;

use super::{AggregationOptions, AllocationEntry, HoldingValuation, PortfolioSummary};

/// Current value of one holding: `units * nav` when the NAV is known, zero
/// otherwise. `units` is never used as a divisor.
fn current_value(holding: &Holding, data: Option<&FundMarketData>) -> Decimal {
    match data.and_then(|d| d.nav) {
        Some(nav) => holding.units * nav,
        None => Decimal::ZERO,
    }
}

fn percentage_of(value: Decimal, total: Decimal) -> Decimal {
    if total > Decimal::ZERO {
        (value / total * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    }
}

/// Aggregates holdings into portfolio-level metrics and chart-ready
/// breakdowns.
///
/// Holdings whose `fund_id` is absent from `market_data` are treated as
/// having unknown NAV and unknown category: they contribute zero to
/// `total_value`, their invested amount still counts toward
/// `total_invested`, and they are grouped under the configured fallback
/// label.
pub fn aggregate(
    holdings: &[Holding],
    market_data: &HashMap<String, FundMarketData>,
    options: &AggregationOptions,
) -> PortfolioSummary {
    let mut total_invested = Decimal::ZERO;
    let mut total_value = Decimal::ZERO;
    let mut fund_allocation: Vec<AllocationEntry> = Vec::with_capacity(holdings.len());
    let mut category_distribution: Vec<AllocationEntry> = Vec::new();
    let mut category_index: HashMap<String, usize> = HashMap::new();

    for holding in holdings {
        let data = market_data.get(&holding.fund_id);
        let value = current_value(holding, data);

        total_value += value;
        total_invested += holding.invested_amount;

        // Allocation entries are per holding, not per fund
        fund_allocation.push(AllocationEntry {
            label: holding.fund_id.clone(),
            value,
            percentage: Decimal::ZERO,
        });

        let category = data
            .and_then(|d| d.category.as_deref())
            .unwrap_or(&options.uncategorized_label);
        match category_index.get(category) {
            Some(&index) => category_distribution[index].value += value,
            None => {
                category_index.insert(category.to_string(), category_distribution.len());
                category_distribution.push(AllocationEntry {
                    label: category.to_string(),
                    value,
                    percentage: Decimal::ZERO,
                });
            }
        }
    }

    let overall_gain_loss = total_value - total_invested;
    let gain_loss_percentage = if total_invested > Decimal::ZERO {
        overall_gain_loss / total_invested * dec!(100)
    } else {
        Decimal::ZERO
    };

    for entry in fund_allocation
        .iter_mut()
        .chain(category_distribution.iter_mut())
    {
        entry.percentage = percentage_of(entry.value, total_value);
    }

    PortfolioSummary {
        total_invested,
        total_value,
        overall_gain_loss,
        gain_loss_percentage,
        fund_allocation,
        category_distribution,
    }
}

/// Values each holding individually, in holding order, with the same lookup
/// and fallback rules as [`aggregate`].
pub fn value_holdings(
    holdings: &[Holding],
    market_data: &HashMap<String, FundMarketData>,
    options: &AggregationOptions,
) -> Vec<HoldingValuation> {
    let total_value: Decimal = holdings
        .iter()
        .map(|h| current_value(h, market_data.get(&h.fund_id)))
        .sum();

    holdings
        .iter()
        .map(|holding| {
            let data = market_data.get(&holding.fund_id);
            let value = current_value(holding, data);
            let gain_loss = value - holding.invested_amount;
            let gain_loss_percentage = if holding.invested_amount > Decimal::ZERO {
                gain_loss / holding.invested_amount * dec!(100)
            } else {
                Decimal::ZERO
            };
            let weight = if total_value > Decimal::ZERO {
                (value / total_value).round_dp(DECIMAL_PRECISION)
            } else {
                Decimal::ZERO
            };

            HoldingValuation {
                holding_id: holding.id.clone(),
                fund_id: holding.fund_id.clone(),
                invested_amount: holding.invested_amount,
                units: holding.units,
                nav: data.and_then(|d| d.nav),
                category: data
                    .and_then(|d| d.category.clone())
                    .unwrap_or_else(|| options.uncategorized_label.clone()),
                current_value: value,
                gain_loss,
                gain_loss_percentage,
                weight,
            }
        })
        .collect()
}
