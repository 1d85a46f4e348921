//! Journal entry error types.

use thiserror::Error;

use super::line::LineId;
use super::validation::ValidationReport;

/// Errors raised by the journal entry form and its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    /// No line with this id exists in the form.
    #[error("Line {0} does not exist")]
    UnknownLine(LineId),

    /// The form failed validation; nothing was sent.
    #[error("Journal entry is invalid: {0}")]
    Invalid(ValidationReport),

    /// A submit is already waiting for the backend.
    #[error("A journal entry submission is already in progress")]
    SubmitInProgress,

    /// A submit outcome arrived while no submit was pending.
    #[error("No journal entry submission is in progress")]
    NotSubmitting,
}

impl JournalError {
    /// Returns the error code for display and logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownLine(_) => "UNKNOWN_LINE",
            Self::Invalid(_) => "INVALID_JOURNAL_ENTRY",
            Self::SubmitInProgress => "SUBMIT_IN_PROGRESS",
            Self::NotSubmitting => "NOT_SUBMITTING",
        }
    }

    /// Returns the validation report, if this is a validation failure.
    #[must_use]
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Invalid(report) => Some(report),
            _ => None,
        }
    }
}
