//! Holdings module - portfolio positions and their storage seam.

mod holdings_model;
mod holdings_service;
mod holdings_store;
mod holdings_traits;

pub use holdings_model::*;
pub use holdings_service::*;
pub use holdings_store::*;
pub use holdings_traits::*;

#[cfg(test)]
mod holdings_service_tests;
