//! Journal entry form validation.
//!
//! Validation never stops at the first problem: the report carries one error
//! per violated field or line, plus a single form-level balance error, so the
//! whole form can be annotated at once.

use std::fmt;

use serde::Serialize;

use super::amount::format_amount;
use super::line::{LedgerEntryLine, LineId};
use super::totals::EntryTotals;

/// Where a validation error belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorField {
    /// Entry date.
    Date,
    /// Entry description.
    Description,
    /// Account number of a line.
    AccountNo(LineId),
    /// Account title of a line.
    AccountTitle(LineId),
    /// Debit/credit amount of a line.
    Amount(LineId),
    /// Whole-form debit/credit balance.
    Balance,
}

impl ErrorField {
    /// Stable key used to attach the error to an input.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Date => "date".to_string(),
            Self::Description => "description".to_string(),
            Self::AccountNo(id) => format!("accountNo_{id}"),
            Self::AccountTitle(id) => format!("accountTitle_{id}"),
            Self::Amount(id) => format!("amount_{id}"),
            Self::Balance => "balance".to_string(),
        }
    }
}

impl Serialize for ErrorField {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field the error is attached to.
    pub field: ErrorField,
    /// Human-readable message.
    pub message: String,
}

/// Outcome of validating a journal entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    fn push(&mut self, field: ErrorField, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Returns true if no rule was violated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All errors, in form order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message attached to `field`, if any.
    #[must_use]
    pub fn message_for(&self, field: ErrorField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Returns true if `field` has an error.
    #[must_use]
    pub fn has(&self, field: ErrorField) -> bool {
        self.message_for(field).is_some()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Checks the header fields, every line, and the overall balance.
#[must_use]
pub fn validate_form(
    date: &str,
    description: &str,
    lines: &[LedgerEntryLine],
    totals: &EntryTotals,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if date.trim().is_empty() {
        report.push(ErrorField::Date, "Date is required");
    }
    if description.trim().is_empty() {
        report.push(ErrorField::Description, "Description is required");
    }

    for line in lines {
        if line.account_no.trim().is_empty() {
            report.push(
                ErrorField::AccountNo(line.id),
                format!("Account number is required on line {}", line.line_no),
            );
        }
        if line.account_title.trim().is_empty() {
            report.push(
                ErrorField::AccountTitle(line.id),
                format!("Account title is required on line {}", line.line_no),
            );
        }
        if !line.has_amount() {
            report.push(
                ErrorField::Amount(line.id),
                format!("Line {} needs a debit or credit amount", line.line_no),
            );
        }
    }

    if totals.overflowed {
        report.push(ErrorField::Balance, "Amounts are too large to total");
    } else if !totals.amounts_match() {
        report.push(
            ErrorField::Balance,
            format!(
                "Debits ({}) must equal credits ({})",
                format_amount(totals.debit),
                format_amount(totals.credit)
            ),
        );
    }

    report
}
