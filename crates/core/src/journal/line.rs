//! Ledger lines of a journal entry form.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::parse_amount;

/// Identifier of a line within one form.
///
/// Ids are never reused while the form lives; display order is carried by
/// [`LedgerEntryLine::line_no`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u32);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editable fields of a ledger line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineField {
    /// Account number.
    AccountNo,
    /// Account title.
    AccountTitle,
    /// Debit amount.
    Debit,
    /// Credit amount.
    Credit,
    /// Vendor or payee.
    Vendor,
    /// Source document number.
    DocumentNo,
    /// Department.
    Department,
    /// Project.
    Project,
    /// Line memo.
    Description,
}

impl LineField {
    /// All fields in column order.
    pub const ALL: [Self; 9] = [
        Self::AccountNo,
        Self::AccountTitle,
        Self::Debit,
        Self::Credit,
        Self::Vendor,
        Self::DocumentNo,
        Self::Department,
        Self::Project,
        Self::Description,
    ];

    /// Wire name of the field.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccountNo => "accountNo",
            Self::AccountTitle => "accountTitle",
            Self::Debit => "debit",
            Self::Credit => "credit",
            Self::Vendor => "vendor",
            Self::DocumentNo => "documentNo",
            Self::Department => "department",
            Self::Project => "project",
            Self::Description => "description",
        }
    }

    /// Parses a wire name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == s)
    }
}

/// One debit-or-credit row within a journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntryLine {
    /// Unique id within the form.
    pub id: LineId,
    /// 1-based display position.
    pub line_no: u32,
    /// Account number.
    pub account_no: String,
    /// Account title.
    pub account_title: String,
    /// Debit amount as typed; empty when unused.
    pub debit: String,
    /// Credit amount as typed; empty when unused.
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

impl LedgerEntryLine {
    /// Creates a blank line.
    #[must_use]
    pub fn empty(id: LineId, line_no: u32) -> Self {
        Self {
            id,
            line_no,
            account_no: String::new(),
            account_title: String::new(),
            debit: String::new(),
            credit: String::new(),
            vendor: String::new(),
            document_no: String::new(),
            department: String::new(),
            project: String::new(),
            description: String::new(),
        }
    }

    /// Returns the current value of a field.
    #[must_use]
    pub fn field(&self, field: LineField) -> &str {
        match field {
            LineField::AccountNo => &self.account_no,
            LineField::AccountTitle => &self.account_title,
            LineField::Debit => &self.debit,
            LineField::Credit => &self.credit,
            LineField::Vendor => &self.vendor,
            LineField::DocumentNo => &self.document_no,
            LineField::Department => &self.department,
            LineField::Project => &self.project,
            LineField::Description => &self.description,
        }
    }

    /// Assigns a field.
    ///
    /// A non-empty debit clears the credit and vice versa, so a line never
    /// carries both sides.
    pub fn set_field(&mut self, field: LineField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LineField::Debit => {
                if !value.is_empty() {
                    self.credit.clear();
                }
                self.debit = value;
            }
            LineField::Credit => {
                if !value.is_empty() {
                    self.debit.clear();
                }
                self.credit = value;
            }
            LineField::AccountNo => self.account_no = value,
            LineField::AccountTitle => self.account_title = value,
            LineField::Vendor => self.vendor = value,
            LineField::DocumentNo => self.document_no = value,
            LineField::Department => self.department = value,
            LineField::Project => self.project = value,
            LineField::Description => self.description = value,
        }
    }

    /// Parsed debit amount.
    #[must_use]
    pub fn debit_amount(&self) -> Decimal {
        parse_amount(&self.debit)
    }

    /// Parsed credit amount.
    #[must_use]
    pub fn credit_amount(&self) -> Decimal {
        parse_amount(&self.credit)
    }

    /// Returns true if the debit cell is filled in.
    #[must_use]
    pub fn is_debit(&self) -> bool {
        !self.debit.is_empty()
    }

    /// Returns true if either side carries a non-zero amount.
    #[must_use]
    pub fn has_amount(&self) -> bool {
        !self.debit_amount().is_zero() || !self.credit_amount().is_zero()
    }

    /// Amount of whichever side is filled in, debit first.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        if self.is_debit() {
            self.debit_amount()
        } else {
            self.credit_amount()
        }
    }
}
