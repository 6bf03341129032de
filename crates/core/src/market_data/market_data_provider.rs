//! In-memory market data provider backed by a fund catalog.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::Result;

use super::{FundMarketData, FundProfile, MarketDataProviderTrait};

/// Provider serving a fund catalog held in process memory.
///
/// The catalog is keyed by scheme code; insertion order is retained so
/// search results are stable. Intended for seeded catalogs (an AMFI scheme
/// list snapshot) and for tests.
#[derive(Default)]
pub struct InMemoryMarketDataProvider {
    catalog: RwLock<Vec<FundProfile>>,
}

impl InMemoryMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: Vec<FundProfile>) -> Self {
        Self {
            catalog: RwLock::new(profiles),
        }
    }

    /// Builds a provider from a JSON catalog snapshot.
    pub fn from_catalog_json(json: &str) -> Result<Self> {
        let profiles: Vec<FundProfile> = serde_json::from_str(json)?;
        Ok(Self::with_profiles(profiles))
    }

    /// Inserts the profile, replacing any existing entry with the same
    /// scheme code.
    pub async fn upsert_profile(&self, profile: FundProfile) {
        let mut catalog = self.catalog.write().await;
        match catalog
            .iter_mut()
            .find(|p| p.scheme_code == profile.scheme_code)
        {
            Some(existing) => *existing = profile,
            None => catalog.push(profile),
        }
    }
}

#[async_trait]
impl MarketDataProviderTrait for InMemoryMarketDataProvider {
    async fn get_fund_details(
        &self,
        fund_ids: &[String],
    ) -> Result<HashMap<String, FundMarketData>> {
        let catalog = self.catalog.read().await;
        let mut details = HashMap::new();
        for profile in catalog.iter() {
            if fund_ids.contains(&profile.scheme_code) {
                details.insert(profile.scheme_code.clone(), profile.market_data());
            }
        }
        Ok(details)
    }

    async fn get_fund_profile(&self, scheme_code: &str) -> Result<Option<FundProfile>> {
        Ok(self
            .catalog
            .read()
            .await
            .iter()
            .find(|p| p.scheme_code == scheme_code)
            .cloned())
    }

    async fn search_funds(&self, query: &str) -> Result<Vec<FundProfile>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .catalog
            .read()
            .await
            .iter()
            .filter(|p| {
                p.scheme_name.to_lowercase().contains(&needle)
                    || p.scheme_code.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }
}
