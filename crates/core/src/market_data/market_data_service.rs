//! Service for fund market data lookups.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;

use super::{FundMarketData, FundProfile, MarketDataProviderTrait, MarketDataServiceTrait};

pub struct MarketDataService {
    provider: Arc<dyn MarketDataProviderTrait>,
}

impl MarketDataService {
    pub fn new(provider: Arc<dyn MarketDataProviderTrait>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl MarketDataServiceTrait for MarketDataService {
    async fn get_fund_details(
        &self,
        fund_ids: &[String],
    ) -> Result<HashMap<String, FundMarketData>> {
        if fund_ids.is_empty() {
            return Ok(HashMap::new());
        }
        debug!("Fetching fund details for {} funds", fund_ids.len());
        self.provider.get_fund_details(fund_ids).await
    }

    async fn get_fund_profile(&self, scheme_code: &str) -> Result<Option<FundProfile>> {
        self.provider.get_fund_profile(scheme_code).await
    }

    async fn search_funds(&self, query: &str) -> Result<Vec<FundProfile>> {
        debug!("Searching fund catalog for '{}'", query);
        self.provider.search_funds(query).await
    }
}
