//! Shared errors, session, and configuration for Ledgerdesk.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error taxonomy for backend responses
//! - The explicit, injectable user session
//! - Configuration management

pub mod config;
pub mod error;
pub mod session;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use session::{Session, TokenStore};
