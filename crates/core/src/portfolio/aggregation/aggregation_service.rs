//! Service computing portfolio metrics from the holdings and market data
//! seams.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;
use crate::holdings::{Holding, HoldingsServiceTrait};
use crate::market_data::{FundMarketData, MarketDataServiceTrait};

use super::{aggregate, value_holdings, AggregationOptions, HoldingValuation, PortfolioSummary};

/// Trait for the aggregation service.
#[async_trait]
pub trait AggregationServiceTrait: Send + Sync {
    /// Computes the full portfolio summary from current holdings and market
    /// data.
    async fn get_portfolio_summary(&self) -> Result<PortfolioSummary>;

    /// Computes per-holding valuation views from current holdings and
    /// market data.
    async fn get_holding_valuations(&self) -> Result<Vec<HoldingValuation>>;
}

/// Pairs one holdings snapshot with one market data snapshot per call and
/// hands both to the pure calculator.
pub struct AggregationService {
    holdings_service: Arc<dyn HoldingsServiceTrait>,
    market_data_service: Arc<dyn MarketDataServiceTrait>,
    options: AggregationOptions,
}

impl AggregationService {
    pub fn new(
        holdings_service: Arc<dyn HoldingsServiceTrait>,
        market_data_service: Arc<dyn MarketDataServiceTrait>,
    ) -> Self {
        Self::with_options(
            holdings_service,
            market_data_service,
            AggregationOptions::default(),
        )
    }

    pub fn with_options(
        holdings_service: Arc<dyn HoldingsServiceTrait>,
        market_data_service: Arc<dyn MarketDataServiceTrait>,
        options: AggregationOptions,
    ) -> Self {
        Self {
            holdings_service,
            market_data_service,
            options,
        }
    }

    async fn snapshot(&self) -> Result<(Vec<Holding>, HashMap<String, FundMarketData>)> {
        let holdings = self.holdings_service.list_holdings().await?;
        if holdings.is_empty() {
            return Ok((holdings, HashMap::new()));
        }

        let fund_ids: Vec<String> = holdings
            .iter()
            .map(|h| h.fund_id.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let market_data = self.market_data_service.get_fund_details(&fund_ids).await?;
        Ok((holdings, market_data))
    }
}

#[async_trait]
impl AggregationServiceTrait for AggregationService {
    async fn get_portfolio_summary(&self) -> Result<PortfolioSummary> {
        let (holdings, market_data) = self.snapshot().await?;
        debug!("Aggregating {} holdings", holdings.len());
        Ok(aggregate(&holdings, &market_data, &self.options))
    }

    async fn get_holding_valuations(&self) -> Result<Vec<HoldingValuation>> {
        let (holdings, market_data) = self.snapshot().await?;
        Ok(value_holdings(&holdings, &market_data, &self.options))
    }
}
