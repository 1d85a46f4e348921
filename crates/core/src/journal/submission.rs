//! Submit cycle of the journal entry form.
//!
//! ```text
//! Editing --begin_submit--> Submitting --complete_submit(Ok)--> Editing (form reset)
//!                                      --complete_submit(Err)-> Editing (error banner, form kept)
//! ```
//!
//! The editor never talks to the network. The caller takes the request
//! returned by [`JournalEntryEditor::begin_submit`], sends it, and reports the
//! outcome back through [`JournalEntryEditor::complete_submit`].

use serde::Serialize;

use super::documents::SupportingDocuments;
use super::error::JournalError;
use super::form::JournalEntryForm;
use super::payload::JournalEntryRequest;

/// Fallback shown when the backend gives no usable error message.
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Failed to create journal entry";

/// Phase of the submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitPhase {
    /// The form is editable and may be submitted.
    #[default]
    Editing,
    /// A create request is in flight.
    Submitting,
}

/// Kind of status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
}

/// Dismissible status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBanner {
    /// Success or error.
    pub kind: BannerKind,
    /// Message shown to the user.
    pub message: String,
}

impl StatusBanner {
    /// Creates a success banner.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    /// Creates an error banner.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
        }
    }

    /// Returns true for error banners.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}

/// The journal entry form together with its documents, phase, and banner.
#[derive(Debug, Clone, Default)]
pub struct JournalEntryEditor {
    form: JournalEntryForm,
    documents: SupportingDocuments,
    phase: SubmitPhase,
    banner: Option<StatusBanner>,
}

impl JournalEntryEditor {
    /// Creates an editor around a fresh two-line form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor around an existing form.
    #[must_use]
    pub fn with_form(form: JournalEntryForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// The form being edited.
    #[must_use]
    pub fn form(&self) -> &JournalEntryForm {
        &self.form
    }

    /// Mutable access to the form.
    pub fn form_mut(&mut self) -> &mut JournalEntryForm {
        &mut self.form
    }

    /// Uploaded supporting documents.
    #[must_use]
    pub fn documents(&self) -> &SupportingDocuments {
        &self.documents
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Returns true while a create request is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Current status banner.
    #[must_use]
    pub fn banner(&self) -> Option<&StatusBanner> {
        self.banner.as_ref()
    }

    /// Hides the status banner.
    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Records a successful supporting-document upload.
    pub fn record_upload(&mut self, filename: impl Into<String>) {
        let filename = filename.into();
        self.banner = Some(StatusBanner::success(format!("Uploaded {filename}")));
        self.documents.add(filename);
    }

    /// Records a failed upload. The submit phase is left alone.
    pub fn record_upload_failure(&mut self, message: impl Into<String>) {
        self.banner = Some(StatusBanner::error(message));
    }

    /// Validates and, when valid, enters `Submitting` and returns the request.
    ///
    /// An invalid form stays in `Editing` and nothing should be sent.
    pub fn begin_submit(&mut self) -> Result<JournalEntryRequest, JournalError> {
        if self.is_submitting() {
            return Err(JournalError::SubmitInProgress);
        }
        let report = self.form.validate();
        if !report.is_valid() {
            return Err(JournalError::Invalid(report));
        }
        self.phase = SubmitPhase::Submitting;
        self.banner = None;
        Ok(self.form.to_request(&self.documents))
    }

    /// Applies the backend outcome of the pending submit.
    ///
    /// Success resets the form and clears documents. Failure keeps both and
    /// shows the message, or a generic one if the message is blank.
    pub fn complete_submit(&mut self, outcome: Result<(), String>) -> Result<(), JournalError> {
        if !self.is_submitting() {
            return Err(JournalError::NotSubmitting);
        }
        self.phase = SubmitPhase::Editing;
        match outcome {
            Ok(()) => {
                self.form.reset();
                self.documents.clear();
                self.banner = Some(StatusBanner::success("Journal entry created successfully"));
            }
            Err(message) => {
                let message = if message.trim().is_empty() {
                    SUBMIT_FALLBACK_MESSAGE.to_string()
                } else {
                    message
                };
                self.banner = Some(StatusBanner::error(message));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::line::{LineField, LineId};

    fn ready_editor() -> JournalEntryEditor {
        let mut editor = JournalEntryEditor::new();
        let form = editor.form_mut();
        form.set_date("2024-03-01");
        form.set_description("Cash sale");
        for (id, no, title, side) in [
            (1, "1000", "Cash", LineField::Debit),
            (2, "4000", "Revenue", LineField::Credit),
        ] {
            form.set_field(LineId(id), LineField::AccountNo, no).unwrap();
            form.set_field(LineId(id), LineField::AccountTitle, title).unwrap();
            form.set_field(LineId(id), side, "100").unwrap();
        }
        editor
    }

    #[test]
    fn test_invalid_form_does_not_enter_submitting() {
        let mut editor = JournalEntryEditor::new();
        let err = editor.begin_submit().unwrap_err();
        assert!(err.report().is_some());
        assert_eq!(editor.phase(), SubmitPhase::Editing);
    }

    #[test]
    fn test_second_submit_is_refused() {
        let mut editor = ready_editor();
        editor.begin_submit().unwrap();
        assert!(editor.is_submitting());
        assert_eq!(editor.begin_submit(), Err(JournalError::SubmitInProgress));
    }

    #[test]
    fn test_success_resets_form_and_documents() {
        let mut editor = ready_editor();
        editor.record_upload("receipt.pdf");

        let request = editor.begin_submit().unwrap();
        assert_eq!(request.supporting_docs, ["receipt.pdf"]);

        editor.complete_submit(Ok(())).unwrap();
        assert_eq!(editor.phase(), SubmitPhase::Editing);
        assert_eq!(editor.form(), &JournalEntryForm::new());
        assert!(editor.documents().is_empty());
        assert_eq!(editor.banner().map(|b| b.kind), Some(BannerKind::Success));
    }

    #[test]
    fn test_failure_keeps_form() {
        let mut editor = ready_editor();
        editor.record_upload("receipt.pdf");
        let before = editor.form().clone();

        editor.begin_submit().unwrap();
        editor.complete_submit(Err("Period is closed".to_string())).unwrap();

        assert_eq!(editor.form(), &before);
        assert_eq!(editor.documents().len(), 1);
        let banner = editor.banner().unwrap();
        assert!(banner.is_error());
        assert_eq!(banner.message, "Period is closed");

        editor.dismiss_banner();
        assert!(editor.banner().is_none());
    }

    #[test]
    fn test_blank_failure_message_uses_fallback() {
        let mut editor = ready_editor();
        editor.begin_submit().unwrap();
        editor.complete_submit(Err(String::new())).unwrap();
        assert_eq!(editor.banner().unwrap().message, SUBMIT_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_complete_without_begin() {
        let mut editor = ready_editor();
        assert_eq!(editor.complete_submit(Ok(())), Err(JournalError::NotSubmitting));
    }

    #[test]
    fn test_upload_failure_leaves_phase() {
        let mut editor = ready_editor();
        editor.begin_submit().unwrap();
        editor.record_upload_failure("Upload failed");
        assert!(editor.is_submitting());
        assert!(editor.banner().unwrap().is_error());
    }
}
