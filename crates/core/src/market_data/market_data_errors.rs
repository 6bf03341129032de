//! Error types for market data operations.

use thiserror::Error;

/// Errors raised by market data providers and services.
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Fund not found: {0}")]
    NotFound(String),

    #[error("Invalid market data: {0}")]
    InvalidData(String),

    #[error("Provider error: {0}")]
    Provider(String),
}
