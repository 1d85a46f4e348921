//! Accounting endpoints: journal entries, chart of accounts, dashboard data.

use ledgerdesk_core::accounts::ChartAccount;
use ledgerdesk_core::dashboard::{CashFlowPoint, FinancialSummary, GeneralLedgerRow};
use ledgerdesk_core::journal::JournalEntryRequest;
use reqwest::Method;
use serde::Deserialize;
use tracing::info;

use crate::client::{PortalClient, send_json, send_optional_json};
use crate::error::ClientResult;

/// Response of a successful journal-entry create.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedJournalEntry {
    /// The stored entry, when the backend echoes it back.
    #[serde(default)]
    pub journal_entry: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct AccountsResponse {
    #[serde(default)]
    accounts: Vec<ChartAccount>,
}

#[derive(Deserialize)]
struct SummaryResponse {
    summary: FinancialSummary,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CashFlowResponse {
    #[serde(default)]
    cash_flow: Vec<CashFlowPoint>,
}

#[derive(Deserialize)]
struct GeneralLedgerResponse {
    #[serde(default)]
    entries: Vec<GeneralLedgerRow>,
}

impl PortalClient {
    /// `POST /api/accounting/journal-entry`.
    ///
    /// Any 2xx reply means the entry was created, with or without a body.
    pub async fn create_journal_entry(
        &self,
        request: &JournalEntryRequest,
    ) -> ClientResult<CreatedJournalEntry> {
        let builder = self
            .request(Method::POST, "/api/accounting/journal-entry")
            .json(request);
        let created: CreatedJournalEntry =
            send_optional_json(builder, "Failed to create journal entry").await?;
        info!(
            lines = request.entries.len(),
            documents = request.supporting_docs.len(),
            "journal entry created"
        );
        Ok(created)
    }

    /// `GET /api/accounting/accounts`.
    pub async fn list_accounts(&self) -> ClientResult<Vec<ChartAccount>> {
        let builder = self.request(Method::GET, "/api/accounting/accounts");
        let response: AccountsResponse = send_json(builder, "Failed to load accounts").await?;
        Ok(response.accounts)
    }

    /// `GET /api/accounting/summary`.
    pub async fn financial_summary(&self) -> ClientResult<FinancialSummary> {
        let builder = self.request(Method::GET, "/api/accounting/summary");
        let response: SummaryResponse =
            send_json(builder, "Failed to load financial summary").await?;
        Ok(response.summary)
    }

    /// `GET /api/accounting/cash-flow`.
    pub async fn cash_flow(&self) -> ClientResult<Vec<CashFlowPoint>> {
        let builder = self.request(Method::GET, "/api/accounting/cash-flow");
        let response: CashFlowResponse = send_json(builder, "Failed to load cash flow").await?;
        Ok(response.cash_flow)
    }

    /// `GET /api/accounting/general-ledger`.
    pub async fn general_ledger(&self) -> ClientResult<Vec<GeneralLedgerRow>> {
        let builder = self.request(Method::GET, "/api/accounting/general-ledger");
        let response: GeneralLedgerResponse =
            send_json(builder, "Failed to load general ledger").await?;
        Ok(response.entries)
    }
}
