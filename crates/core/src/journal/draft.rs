//! Journal entries prepared outside the form, e.g. in a JSON file.
//!
//! A draft is replayed through the same operations a user would perform,
//! so it ends up with the same ids, line numbers, debit/credit exclusivity,
//! and account auto-fill as a hand-edited form.

use serde::Deserialize;

use super::error::JournalError;
use super::form::JournalEntryForm;
use super::line::{LineField, LineId};
use crate::accounts::AccountDirectory;

/// One line of a draft.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftLine {
    /// Account number.
    pub account_no: String,
    /// Account title; filled from the directory when blank.
    pub account_title: String,
    /// Debit amount.
    pub debit: String,
    /// Credit amount.
    pub credit: String,
    /// Vendor or payee.
    pub vendor: String,
    /// Source document number.
    pub document_no: String,
    /// Department.
    pub department: String,
    /// Project.
    pub project: String,
    /// Line memo.
    pub description: String,
}

/// A journal entry described as data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JournalDraft {
    /// Entry date.
    pub date: String,
    /// Optional transaction number.
    pub transaction_no: String,
    /// Entry description.
    pub description: String,
    /// Lines in display order.
    pub lines: Vec<DraftLine>,
}

impl JournalDraft {
    /// Builds a form from the draft.
    ///
    /// A draft without lines yields the usual two blank lines. If a line
    /// carries both a debit and a credit, the credit wins, exactly as if it
    /// had been typed last.
    pub fn into_form(self, directory: &AccountDirectory) -> Result<JournalEntryForm, JournalError> {
        let mut form = JournalEntryForm::new();
        form.set_date(self.date);
        form.set_transaction_no(self.transaction_no);
        form.set_description(self.description);

        if self.lines.is_empty() {
            return Ok(form);
        }

        while form.lines().len() < self.lines.len() {
            form.add_line();
        }
        while form.lines().len() > self.lines.len() {
            let last = form.lines()[form.lines().len() - 1].id;
            form.remove_line(last);
        }

        let ids: Vec<LineId> = form.lines().iter().map(|l| l.id).collect();
        for (id, line) in ids.into_iter().zip(self.lines) {
            form.set_account_no(id, line.account_no, directory)?;
            if !line.account_title.is_empty() {
                form.set_field(id, LineField::AccountTitle, line.account_title)?;
            }
            form.set_field(id, LineField::Debit, line.debit)?;
            form.set_field(id, LineField::Credit, line.credit)?;
            form.set_field(id, LineField::Vendor, line.vendor)?;
            form.set_field(id, LineField::DocumentNo, line.document_no)?;
            form.set_field(id, LineField::Department, line.department)?;
            form.set_field(id, LineField::Project, line.project)?;
            form.set_field(id, LineField::Description, line.description)?;
        }

        Ok(form)
    }
}
