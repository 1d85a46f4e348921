//! Running debit/credit totals.

use rust_decimal::Decimal;
use serde::Serialize;

use super::amount::cents_equal;
use super::line::LedgerEntryLine;

/// Debit and credit sums across all lines of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryTotals {
    /// Sum of parsed debit cells.
    pub debit: Decimal,
    /// Sum of parsed credit cells.
    pub credit: Decimal,
    /// Whether debits equal credits to the cent and debits are positive.
    pub is_balanced: bool,
    /// A sum exceeded the `Decimal` range and was clamped.
    pub overflowed: bool,
}

impl EntryTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub fn new(debit: Decimal, credit: Decimal) -> Self {
        Self {
            debit,
            credit,
            is_balanced: cents_equal(debit, credit) && debit > Decimal::ZERO,
            overflowed: false,
        }
    }

    /// Sums every line; blank or non-numeric cells count as zero.
    ///
    /// A sum past the `Decimal` range is clamped and flagged as overflowed,
    /// which never counts as balanced.
    #[must_use]
    pub fn from_lines(lines: &[LedgerEntryLine]) -> Self {
        let (debit, debit_overflow) = checked_sum(lines.iter().map(LedgerEntryLine::debit_amount));
        let (credit, credit_overflow) =
            checked_sum(lines.iter().map(LedgerEntryLine::credit_amount));
        let mut totals = Self::new(debit, credit);
        if debit_overflow || credit_overflow {
            totals.overflowed = true;
            totals.is_balanced = false;
        }
        totals
    }

    /// Returns true if debits equal credits to the cent, including when both are zero.
    #[must_use]
    pub fn amounts_match(&self) -> bool {
        cents_equal(self.debit, self.credit)
    }

    /// Returns the difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.debit.saturating_sub(self.credit)
    }
}

fn checked_sum(amounts: impl Iterator<Item = Decimal>) -> (Decimal, bool) {
    let mut overflowed = false;
    let total = amounts.fold(Decimal::ZERO, |total, amount| {
        total.checked_add(amount).unwrap_or_else(|| {
            overflowed = true;
            total.saturating_add(amount)
        })
    });
    (total, overflowed)
}
