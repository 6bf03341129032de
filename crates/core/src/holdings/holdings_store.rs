//! In-memory holdings repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::{Error, Result};

use super::{Holding, HoldingUpdate, HoldingsRepositoryTrait, NewHolding};

/// Holdings repository backed by process memory.
///
/// Insertion order is preserved so that aggregation output is stable across
/// reads. Intended for callers that keep the portfolio in local state rather
/// than a remote store, and for tests.
#[derive(Default)]
pub struct InMemoryHoldingsRepository {
    holdings: RwLock<Vec<Holding>>,
}

impl InMemoryHoldingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository with existing holdings, keeping their ids.
    pub fn with_holdings(holdings: Vec<Holding>) -> Self {
        Self {
            holdings: RwLock::new(holdings),
        }
    }
}

#[async_trait]
impl HoldingsRepositoryTrait for InMemoryHoldingsRepository {
    async fn list_holdings(&self) -> Result<Vec<Holding>> {
        Ok(self.holdings.read().await.clone())
    }

    async fn get_holding(&self, id: &str) -> Result<Option<Holding>> {
        Ok(self
            .holdings
            .read()
            .await
            .iter()
            .find(|h| h.id == id)
            .cloned())
    }

    async fn create_holding(&self, new_holding: NewHolding) -> Result<Holding> {
        let now = Utc::now();
        let holding = Holding {
            id: Uuid::new_v4().to_string(),
            fund_id: new_holding.fund_id,
            invested_amount: new_holding.invested_amount,
            units: new_holding.units,
            purchase_date: new_holding.purchase_date,
            notes: new_holding.notes,
            created_at: now,
            updated_at: now,
        };
        self.holdings.write().await.push(holding.clone());
        Ok(holding)
    }

    async fn update_holding(&self, id: &str, update: HoldingUpdate) -> Result<Holding> {
        let mut holdings = self.holdings.write().await;
        let holding = holdings
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| Error::NotFound(format!("Holding {}", id)))?;

        holding.fund_id = update.fund_id;
        holding.invested_amount = update.invested_amount;
        holding.units = update.units;
        holding.purchase_date = update.purchase_date;
        holding.notes = update.notes;
        holding.updated_at = Utc::now();

        Ok(holding.clone())
    }

    async fn delete_holding(&self, id: &str) -> Result<usize> {
        let mut holdings = self.holdings.write().await;
        let before = holdings.len();
        holdings.retain(|h| h.id != id);
        if holdings.len() == before {
            return Err(Error::NotFound(format!("Holding {}", id)));
        }
        Ok(before - holdings.len())
    }
}
