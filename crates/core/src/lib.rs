//! MF Advisor Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for tracking a mutual fund
//! portfolio. It is storage-agnostic: holdings and fund market data arrive
//! through repository and provider traits, and every presentation surface
//! consumes the same aggregation output.

pub mod constants;
pub mod errors;
pub mod holdings;
pub mod market_data;
pub mod portfolio;

// Re-export common types from holdings and portfolio modules
pub use holdings::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
