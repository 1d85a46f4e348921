//! Client dashboard loading.

use ledgerdesk_core::dashboard::{CashFlowPoint, FinancialSummary, GeneralLedgerRow};
use ledgerdesk_core::load_state::LoadState;

use crate::client::PortalClient;

/// Everything the dashboard shows, each part loaded independently.
///
/// A failed part is `Failed` with the user-facing message; the other parts
/// are unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    /// Headline figures.
    pub summary: LoadState<FinancialSummary>,
    /// Cash-flow chart series.
    pub cash_flow: LoadState<Vec<CashFlowPoint>>,
    /// General ledger rows.
    pub ledger: LoadState<Vec<GeneralLedgerRow>>,
}

impl PortalClient {
    /// Fetches summary, cash flow, and ledger concurrently.
    pub async fn load_dashboard(&self) -> Dashboard {
        let (summary, cash_flow, ledger) = tokio::join!(
            self.financial_summary(),
            self.cash_flow(),
            self.general_ledger()
        );
        Dashboard {
            summary: LoadState::from_result(summary.map_err(|e| e.user_message())),
            cash_flow: LoadState::from_result(cash_flow.map_err(|e| e.user_message())),
            ledger: LoadState::from_result(ledger.map_err(|e| e.user_message())),
        }
    }
}
