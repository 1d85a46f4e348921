//! Error types for ledgerdesk-client.

use ledgerdesk_core::content::ContentError;
use ledgerdesk_core::journal::{DocumentError, JournalError};
use ledgerdesk_core::leads::LeadFormError;
use ledgerdesk_shared::AppError;
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Transport failure or undecodable response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error(transparent)]
    Api(#[from] AppError),

    /// Reading a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured base URL cannot be used.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// Journal form rejected the operation.
    #[error(transparent)]
    Journal(#[from] JournalError),

    /// Upload rejected before sending.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Lead form is incomplete.
    #[error(transparent)]
    LeadForm(#[from] LeadFormError),

    /// Content draft rejected before publishing.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// The call needs a logged-in session.
    #[error("Not logged in")]
    NotAuthenticated,
}

impl ClientError {
    /// Message suitable for a status banner.
    ///
    /// Backend errors show the server's own message; everything else shows
    /// the error's display text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => err.message().to_string(),
            other => other.to_string(),
        }
    }

    /// Returns the error code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Http(_) => "HTTP_ERROR",
            Self::Api(err) => err.error_code(),
            Self::Io(_) => "IO_ERROR",
            Self::InvalidUrl(_) => "INVALID_URL",
            Self::Journal(err) => err.error_code(),
            Self::Document(_) => "DOCUMENT_REJECTED",
            Self::LeadForm(err) => err.error_code(),
            Self::Content(_) => "CONTENT_INVALID",
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ClientError::from(AppError::from_status(422, "Period is closed"));
        assert_eq!(err.user_message(), "Period is closed");
        assert_eq!(err.error_code(), "BUSINESS_RULE_VIOLATION");
    }

    #[test]
    fn test_user_message_for_local_errors() {
        let err = ClientError::from(DocumentError::EmptyName);
        assert_eq!(err.user_message(), "file name is empty");
        assert_eq!(ClientError::NotAuthenticated.error_code(), "NOT_AUTHENTICATED");
    }
}
