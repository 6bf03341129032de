//! Service for holdings CRUD with entry-layer validation.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};

use super::{Holding, HoldingUpdate, HoldingsRepositoryTrait, HoldingsServiceTrait, NewHolding};

pub struct HoldingsService {
    repository: Arc<dyn HoldingsRepositoryTrait>,
}

impl HoldingsService {
    pub fn new(repository: Arc<dyn HoldingsRepositoryTrait>) -> Self {
        Self { repository }
    }
}

/// Entry-layer validation. The aggregation calculator is total over stored
/// data; non-positive amounts are rejected here, at the boundary where
/// holdings are captured.
fn validate_holding_input(
    fund_id: &str,
    invested_amount: Decimal,
    units: Decimal,
) -> std::result::Result<(), ValidationError> {
    if fund_id.trim().is_empty() {
        return Err(ValidationError::MissingField("fund_id".to_string()));
    }
    if invested_amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidInput(
            "invested_amount must be a positive number".to_string(),
        ));
    }
    if units <= Decimal::ZERO {
        return Err(ValidationError::InvalidInput(
            "units must be a positive number".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl HoldingsServiceTrait for HoldingsService {
    async fn list_holdings(&self) -> Result<Vec<Holding>> {
        self.repository.list_holdings().await
    }

    async fn get_holding(&self, id: &str) -> Result<Option<Holding>> {
        self.repository.get_holding(id).await
    }

    async fn create_holding(&self, new_holding: NewHolding) -> Result<Holding> {
        validate_holding_input(
            &new_holding.fund_id,
            new_holding.invested_amount,
            new_holding.units,
        )?;
        debug!("Creating holding for fund {}", new_holding.fund_id);
        self.repository.create_holding(new_holding).await
    }

    async fn update_holding(&self, id: &str, update: HoldingUpdate) -> Result<Holding> {
        validate_holding_input(&update.fund_id, update.invested_amount, update.units)?;
        debug!("Updating holding {}", id);
        self.repository.update_holding(id, update).await
    }

    async fn delete_holding(&self, id: &str) -> Result<usize> {
        debug!("Deleting holding {}", id);
        self.repository.delete_holding(id).await
    }
}
