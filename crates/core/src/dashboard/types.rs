//! Dashboard data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline figures for the current period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    /// Total revenue.
    pub revenue: Decimal,
    /// Total expenses.
    pub expenses: Decimal,
    /// Net income.
    pub net_income: Decimal,
    /// Cash on hand.
    pub cash_balance: Decimal,
}

/// One bar of the cash-flow chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowPoint {
    /// Period label, e.g. `"2024-03"`.
    pub period: String,
    /// Money in.
    pub inflow: Decimal,
    /// Money out.
    pub outflow: Decimal,
}

impl CashFlowPoint {
    /// Inflow minus outflow.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.inflow.saturating_sub(self.outflow)
    }
}

/// One posted line of the general ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralLedgerRow {
    /// Posting date.
    pub date: NaiveDate,
    /// Account number.
    pub account_no: String,
    /// Account title.
    pub account_title: String,
    /// Line description.
    #[serde(default)]
    pub description: String,
    /// Debit amount.
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount.
    #[serde(default)]
    pub credit: Decimal,
}

/// A ledger row with the balance after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRowWithBalance {
    /// The row.
    #[serde(flatten)]
    pub row: GeneralLedgerRow,
    /// Cumulative debit minus credit through this row.
    pub balance: Decimal,
}
