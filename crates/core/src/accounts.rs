//! Chart of accounts as served by the backend.
//!
//! The journal form only needs the directory to auto-fill an account title
//! once a typed account number matches a known account.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A chart-of-accounts entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAccount {
    /// Account number, e.g. `"1000"`.
    pub account_number: String,
    /// Account name, e.g. `"Cash"`.
    pub account_name: String,
    /// Account type (asset, liability, ...), when provided.
    #[serde(default)]
    pub account_type: Option<String>,
    /// Financial-statement line-item category, when provided.
    #[serde(default)]
    pub fsli_category: Option<String>,
}

/// Accounts indexed by number, in backend order.
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    accounts: Vec<ChartAccount>,
    by_number: HashMap<String, usize>,
}

impl AccountDirectory {
    /// Builds a directory. Later duplicates of a number are ignored.
    #[must_use]
    pub fn new(accounts: Vec<ChartAccount>) -> Self {
        let mut by_number = HashMap::with_capacity(accounts.len());
        for (index, account) in accounts.iter().enumerate() {
            by_number
                .entry(account.account_number.trim().to_string())
                .or_insert(index);
        }
        Self {
            accounts,
            by_number,
        }
    }

    /// Looks up an account by number, ignoring surrounding whitespace.
    #[must_use]
    pub fn lookup(&self, account_number: &str) -> Option<&ChartAccount> {
        self.by_number
            .get(account_number.trim())
            .map(|&index| &self.accounts[index])
    }

    /// Name of the account with this number.
    #[must_use]
    pub fn title_for(&self, account_number: &str) -> Option<&str> {
        self.lookup(account_number).map(|a| a.account_name.as_str())
    }

    /// All accounts in backend order.
    #[must_use]
    pub fn accounts(&self) -> &[ChartAccount] {
        &self.accounts
    }

    /// Number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
