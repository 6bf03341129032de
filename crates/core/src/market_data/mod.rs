//! Market data module - fund catalog models, services, and traits.

mod market_data_errors;
mod market_data_model;
mod market_data_provider;
mod market_data_service;
mod market_data_traits;

pub use market_data_errors::MarketDataError;
pub use market_data_model::*;
pub use market_data_provider::*;
pub use market_data_service::*;
pub use market_data_traits::*;

#[cfg(test)]
mod market_data_service_tests;
