//! Portfolio aggregation module - the single source of truth for portfolio
//! metrics and chart-ready breakdowns.

mod aggregation_calculator;
mod aggregation_model;
mod aggregation_service;

pub use aggregation_calculator::*;
pub use aggregation_model::*;
pub use aggregation_service::*;
