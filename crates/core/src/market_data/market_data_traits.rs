//! Traits for market data providers and service.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::Result;

use super::{FundMarketData, FundProfile};

/// Provider trait for fund market data lookups.
///
/// Providers may be partially populated: fund ids without catalog data are
/// simply absent from the returned map, which downstream aggregation treats
/// as unknown NAV and unknown category.
#[async_trait]
pub trait MarketDataProviderTrait: Send + Sync {
    async fn get_fund_details(
        &self,
        fund_ids: &[String],
    ) -> Result<HashMap<String, FundMarketData>>;

    async fn get_fund_profile(&self, scheme_code: &str) -> Result<Option<FundProfile>>;

    async fn search_funds(&self, query: &str) -> Result<Vec<FundProfile>>;
}

/// Service trait for market data business logic.
#[async_trait]
pub trait MarketDataServiceTrait: Send + Sync {
    /// Latest market data for the given fund ids. Ids without data are
    /// absent from the map.
    async fn get_fund_details(
        &self,
        fund_ids: &[String],
    ) -> Result<HashMap<String, FundMarketData>>;

    async fn get_fund_profile(&self, scheme_code: &str) -> Result<Option<FundProfile>>;

    /// Case-insensitive search over scheme codes and names.
    async fn search_funds(&self, query: &str) -> Result<Vec<FundProfile>>;
}
