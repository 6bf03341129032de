//! Traits for holdings repository and service.

use async_trait::async_trait;

use crate::Result;

use super::{Holding, HoldingUpdate, NewHolding};

/// Repository trait for holdings storage operations.
///
/// Implementations must preserve insertion order: downstream aggregation
/// output is ordered by holding.
#[async_trait]
pub trait HoldingsRepositoryTrait: Send + Sync {
    async fn list_holdings(&self) -> Result<Vec<Holding>>;
    async fn get_holding(&self, id: &str) -> Result<Option<Holding>>;
    async fn create_holding(&self, new_holding: NewHolding) -> Result<Holding>;
    async fn update_holding(&self, id: &str, update: HoldingUpdate) -> Result<Holding>;
    async fn delete_holding(&self, id: &str) -> Result<usize>;
}

/// Service trait for holdings business logic.
#[async_trait]
pub trait HoldingsServiceTrait: Send + Sync {
    async fn list_holdings(&self) -> Result<Vec<Holding>>;
    async fn get_holding(&self, id: &str) -> Result<Option<Holding>>;

    /// Validates and creates a new holding.
    async fn create_holding(&self, new_holding: NewHolding) -> Result<Holding>;

    /// Validates and applies a full-replace update to an existing holding.
    async fn update_holding(&self, id: &str, update: HoldingUpdate) -> Result<Holding>;

    async fn delete_holding(&self, id: &str) -> Result<usize>;
}
