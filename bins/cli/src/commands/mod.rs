//! Command handlers.

use std::path::Path;

use anyhow::{Context as _, Result};
use ledgerdesk_client::PortalClient;
use ledgerdesk_core::journal::UploadPolicy;
use ledgerdesk_shared::{AppConfig, TokenStore};
use serde::de::DeserializeOwned;

mod content;
mod dashboard;
mod journal;
mod leads;
mod session;

pub use content::{blog, publish};
pub use dashboard::{accounts, summary};
pub use journal::{journal_check, journal_submit};
pub use leads::{checklist, consultation};
pub use session::{login, logout};

/// Configuration and session storage shared by every command.
pub struct Context {
    config: AppConfig,
    store: TokenStore,
}

impl Context {
    pub fn new(config: AppConfig) -> Self {
        let store = TokenStore::new(config.session.token_file.clone());
        Self { config, store }
    }

    /// A client carrying the saved session, if any.
    pub fn client(&self) -> Result<PortalClient> {
        let session = self
            .store
            .load()
            .with_context(|| format!("failed to read {}", self.store.path().display()))?;
        Ok(PortalClient::new(&self.config.api, session)?)
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy {
            max_file_size: self.config.uploads.max_file_size,
            allowed_extensions: self
                .config
                .uploads
                .allowed_extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("invalid JSON in {}", path.display()))
}
