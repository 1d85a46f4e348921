//! Dashboard calculations.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use super::types::{CashFlowPoint, FinancialSummary, GeneralLedgerRow, LedgerRowWithBalance};

/// Dashboard calculations over data fetched from the backend.
pub struct DashboardService;

impl DashboardService {
    /// Net income as a percentage of revenue, rounded to 2 decimal places.
    ///
    /// `None` when there is no revenue or the ratio is out of `Decimal` range.
    #[must_use]
    pub fn profit_margin(summary: &FinancialSummary) -> Option<Decimal> {
        let ratio = summary.net_income.checked_div(summary.revenue)?;
        let margin = ratio.checked_mul(Decimal::ONE_HUNDRED)?;
        Some(margin.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
    }

    /// Running total of net cash flow, one value per point.
    ///
    /// Totals clamp at the `Decimal` range.
    #[must_use]
    pub fn cumulative_net(points: &[CashFlowPoint]) -> Vec<Decimal> {
        points
            .iter()
            .scan(Decimal::ZERO, |total, point| {
                *total = total.saturating_add(point.net());
                Some(*total)
            })
            .collect()
    }

    /// Attaches the cumulative debit-minus-credit balance to each row.
    ///
    /// Balances clamp at the `Decimal` range.
    #[must_use]
    pub fn running_balances(rows: &[GeneralLedgerRow]) -> Vec<LedgerRowWithBalance> {
        let mut balance = Decimal::ZERO;
        rows.iter()
            .map(|row| {
                balance = balance.saturating_add(row.debit.saturating_sub(row.credit));
                LedgerRowWithBalance {
                    row: row.clone(),
                    balance,
                }
            })
            .collect()
    }

    /// Rows posted to one account, in original order.
    #[must_use]
    pub fn filter_by_account<'a>(
        rows: &'a [GeneralLedgerRow],
        account_no: &str,
    ) -> Vec<&'a GeneralLedgerRow> {
        let account_no = account_no.trim();
        rows.iter().filter(|r| r.account_no == account_no).collect()
    }
}
