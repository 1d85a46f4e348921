//! The journal entry form controller.
//!
//! Holds the ordered ledger lines, keeps totals current after every
//! mutation, and turns a valid form into a create request.

use super::documents::SupportingDocuments;
use super::error::JournalError;
use super::line::{LedgerEntryLine, LineField, LineId};
use super::payload::{JournalEntryRequest, JournalLineRequest};
use super::totals::EntryTotals;
use super::validation::{ValidationReport, validate_form};
use crate::accounts::AccountDirectory;

/// Number of blank lines a fresh form starts with.
pub const INITIAL_LINE_COUNT: u32 = 2;

/// A manual double-entry journal entry being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntryForm {
    date: String,
    transaction_no: String,
    description: String,
    entries: Vec<LedgerEntryLine>,
    totals: EntryTotals,
}

impl Default for JournalEntryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl JournalEntryForm {
    /// Creates a form with two blank lines.
    #[must_use]
    pub fn new() -> Self {
        let entries = (1..=INITIAL_LINE_COUNT)
            .map(|n| LedgerEntryLine::empty(LineId(n), n))
            .collect();
        Self {
            date: String::new(),
            transaction_no: String::new(),
            description: String::new(),
            entries,
            totals: EntryTotals::default(),
        }
    }

    /// Entry date as entered.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Sets the entry date.
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    /// Transaction number, if one was entered.
    #[must_use]
    pub fn transaction_no(&self) -> Option<&str> {
        let no = self.transaction_no.trim();
        (!no.is_empty()).then_some(no)
    }

    /// Sets the transaction number.
    pub fn set_transaction_no(&mut self, transaction_no: impl Into<String>) {
        self.transaction_no = transaction_no.into();
    }

    /// Entry description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Sets the entry description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Lines in display order.
    #[must_use]
    pub fn lines(&self) -> &[LedgerEntryLine] {
        &self.entries
    }

    /// Looks up a line by id.
    #[must_use]
    pub fn line(&self, id: LineId) -> Option<&LedgerEntryLine> {
        self.entries.iter().find(|l| l.id == id)
    }

    /// Current debit/credit totals.
    #[must_use]
    pub fn totals(&self) -> EntryTotals {
        self.totals
    }

    /// Appends a blank line and returns its id.
    ///
    /// The id is one past the largest id in use; the line number follows the
    /// last line's number.
    pub fn add_line(&mut self) -> LineId {
        let id = LineId(self.entries.iter().map(|l| l.id.0).max().map_or(1, |max| max + 1));
        let line_no = self.entries.last().map_or(1, |l| l.line_no + 1);
        self.entries.push(LedgerEntryLine::empty(id, line_no));
        self.recompute_totals();
        id
    }

    /// Removes a line and renumbers the rest from 1.
    ///
    /// The last remaining line is never removed. Returns true if a line was
    /// removed.
    pub fn remove_line(&mut self, id: LineId) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|l| l.id != id);
        if self.entries.len() == before {
            return false;
        }
        for (line_no, line) in (1..).zip(self.entries.iter_mut()) {
            line.line_no = line_no;
        }
        self.recompute_totals();
        true
    }

    /// Assigns a field on a line.
    ///
    /// Setting a non-empty debit clears the line's credit and vice versa.
    pub fn set_field(
        &mut self,
        id: LineId,
        field: LineField,
        value: impl Into<String>,
    ) -> Result<(), JournalError> {
        self.line_mut(id)?.set_field(field, value);
        self.recompute_totals();
        Ok(())
    }

    /// Assigns an account number, filling in the title when the number is known.
    pub fn set_account_no(
        &mut self,
        id: LineId,
        account_no: impl Into<String>,
        directory: &AccountDirectory,
    ) -> Result<(), JournalError> {
        let line = self.line_mut(id)?;
        line.set_field(LineField::AccountNo, account_no);
        if let Some(title) = directory.title_for(&line.account_no) {
            line.account_title = title.to_string();
        }
        Ok(())
    }

    /// Validates header fields, every line, and the balance.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        validate_form(&self.date, &self.description, &self.entries, &self.totals)
    }

    /// Builds the create request for this form.
    ///
    /// Does not validate; callers go through [`Self::validate`] first.
    #[must_use]
    pub fn to_request(&self, documents: &SupportingDocuments) -> JournalEntryRequest {
        JournalEntryRequest {
            date: self.date.clone(),
            transaction_no: self.transaction_no().map(ToString::to_string),
            description: self.description.clone(),
            entries: self.entries.iter().map(JournalLineRequest::from).collect(),
            supporting_docs: documents.names().to_vec(),
        }
    }

    /// Returns the form to its initial two-blank-line state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn line_mut(&mut self, id: LineId) -> Result<&mut LedgerEntryLine, JournalError> {
        self.entries
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(JournalError::UnknownLine(id))
    }

    fn recompute_totals(&mut self) {
        self.totals = EntryTotals::from_lines(&self.entries);
    }
}
