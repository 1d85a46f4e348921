//! Manual double-entry journal entries.
//!
//! This module implements the journal entry form:
//! - Ledger lines with debit/credit exclusivity
//! - Running totals and the balance rule
//! - Field-level and form-level validation
//! - The create-request wire format
//! - Supporting document bookkeeping
//! - The submit cycle and its status banner

pub mod amount;
pub mod documents;
pub mod draft;
pub mod error;
pub mod form;
pub mod line;
pub mod payload;
pub mod submission;
pub mod totals;
pub mod validation;

#[cfg(test)]
mod form_props;

pub use amount::{format_amount, parse_amount};
pub use documents::{DocumentError, SupportingDocuments, UploadPolicy};
pub use draft::{DraftLine, JournalDraft};
pub use error::JournalError;
pub use form::JournalEntryForm;
pub use line::{LedgerEntryLine, LineField, LineId};
pub use payload::{JournalEntryRequest, JournalLineRequest};
pub use submission::{BannerKind, JournalEntryEditor, StatusBanner, SubmitPhase};
pub use totals::EntryTotals;
pub use validation::{ErrorField, FieldError, ValidationReport};
