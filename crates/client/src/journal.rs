//! Journal entry submission over the network.
//!
//! [`JournalEntryController`] drives a [`JournalEntryEditor`] through its
//! submit cycle against a [`JournalGateway`]. An invalid form never reaches
//! the gateway.

use std::path::Path;

use async_trait::async_trait;
use ledgerdesk_core::journal::{JournalEntryEditor, JournalEntryRequest, UploadPolicy};
use tracing::warn;

use crate::client::PortalClient;
use crate::error::{ClientError, ClientResult};
use crate::uploads::read_document;

/// Backend operations the journal form needs.
#[async_trait]
pub trait JournalGateway: Send + Sync {
    /// Creates the journal entry.
    async fn post_entry(&self, request: &JournalEntryRequest) -> ClientResult<()>;

    /// Uploads one supporting document.
    async fn post_document(&self, filename: &str, bytes: Vec<u8>) -> ClientResult<()>;
}

#[async_trait]
impl JournalGateway for PortalClient {
    async fn post_entry(&self, request: &JournalEntryRequest) -> ClientResult<()> {
        self.create_journal_entry(request).await.map(|_| ())
    }

    async fn post_document(&self, filename: &str, bytes: Vec<u8>) -> ClientResult<()> {
        self.upload_document(filename, bytes).await
    }
}

/// Journal entry form wired to a backend.
///
/// [`Self::submit`] and [`Self::attach`] both borrow the controller mutably,
/// so an upload cannot run while a submit is in flight. Each call finishes
/// before the next starts. Neither one depends on the other's outcome.
pub struct JournalEntryController<G> {
    gateway: G,
    editor: JournalEntryEditor,
    policy: UploadPolicy,
}

impl<G: JournalGateway> JournalEntryController<G> {
    /// Creates a controller around a fresh form.
    pub fn new(gateway: G, policy: UploadPolicy) -> Self {
        Self::with_editor(gateway, policy, JournalEntryEditor::new())
    }

    /// Creates a controller around an existing editor.
    pub fn with_editor(gateway: G, policy: UploadPolicy, editor: JournalEntryEditor) -> Self {
        Self {
            gateway,
            editor,
            policy,
        }
    }

    /// The editor state.
    pub fn editor(&self) -> &JournalEntryEditor {
        &self.editor
    }

    /// Mutable access to the editor, for form edits.
    pub fn editor_mut(&mut self) -> &mut JournalEntryEditor {
        &mut self.editor
    }

    /// The gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Validates and submits the entry.
    ///
    /// An invalid form returns `Journal(Invalid(..))` without a request.
    /// On success the form is reset and documents cleared. On a backend
    /// failure the form is kept and the error banner shows the server
    /// message, or the generic fallback when there is none.
    pub async fn submit(&mut self) -> ClientResult<()> {
        let request = self.editor.begin_submit()?;
        match self.gateway.post_entry(&request).await {
            Ok(()) => {
                self.editor.complete_submit(Ok(()))?;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "journal entry submit failed");
                let message = match &err {
                    ClientError::Api(api) => api.message().to_string(),
                    _ => String::new(),
                };
                self.editor.complete_submit(Err(message))?;
                Err(err)
            }
        }
    }

    /// Uploads a local file as a supporting document.
    ///
    /// Success adds the file name to the entry's documents. Any failure,
    /// local or remote, shows an error banner and leaves the form alone.
    pub async fn attach(&mut self, path: &Path) -> ClientResult<String> {
        match self.upload(path).await {
            Ok(filename) => {
                self.editor.record_upload(filename.clone());
                Ok(filename)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "supporting document upload failed");
                self.editor.record_upload_failure(err.user_message());
                Err(err)
            }
        }
    }

    async fn upload(&self, path: &Path) -> ClientResult<String> {
        let (filename, bytes) = read_document(path, &self.policy).await?;
        self.gateway.post_document(&filename, bytes).await?;
        Ok(filename)
    }
}
