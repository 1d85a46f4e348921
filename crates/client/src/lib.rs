//! HTTP client for the Ledgerdesk accounting backend.
//!
//! Every call goes through [`PortalClient`], which is built from
//! [`ledgerdesk_shared::config::ApiConfig`] and an injected
//! [`ledgerdesk_shared::Session`]. Form logic lives in `ledgerdesk-core`;
//! this crate only moves it over the wire.

pub mod accounting;
pub mod auth;
pub mod client;
pub mod content;
pub mod dashboard;
pub mod error;
pub mod journal;
pub mod leads;
pub mod uploads;

pub use accounting::CreatedJournalEntry;
pub use auth::{LoggedInUser, Login};
pub use client::PortalClient;
pub use dashboard::Dashboard;
pub use error::{ClientError, ClientResult};
pub use journal::{JournalEntryController, JournalGateway};
pub use uploads::read_document;
