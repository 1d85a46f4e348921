//! Client dashboard data and calculations.
//!
//! This module provides:
//! - Financial summary with profit margin
//! - Cash-flow chart series with net and cumulative figures
//! - General ledger rows with running balances

pub mod service;
pub mod types;

pub use service::DashboardService;
pub use types::*;
