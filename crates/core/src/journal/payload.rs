//! Wire format of the journal-entry create request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line::LedgerEntryLine;

/// One normalized ledger line as sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalLineRequest {
    /// Account number.
    pub account_no: String,
    /// Account title.
    pub account_title: String,
    /// Positive amount of the populated side.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Whether the amount is a debit.
    pub is_debit: bool,
    /// 1-based display position.
    pub line_no: u32,
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

impl From<&LedgerEntryLine> for JournalLineRequest {
    fn from(line: &LedgerEntryLine) -> Self {
        Self {
            account_no: line.account_no.clone(),
            account_title: line.account_title.clone(),
            amount: line.amount(),
            is_debit: line.is_debit(),
            line_no: line.line_no,
            vendor: line.vendor.clone(),
            document_no: line.document_no.clone(),
            department: line.department.clone(),
            project: line.project.clone(),
            description: line.description.clone(),
        }
    }
}

/// Body of `POST /api/accounting/journal-entry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryRequest {
    /// Entry date as entered.
    pub date: String,
    /// Optional transaction number; `null` when blank.
    pub transaction_no: Option<String>,
    /// Entry description.
    pub description: String,
    /// Normalized lines in display order.
    pub entries: Vec<JournalLineRequest>,
    /// Filenames of previously uploaded supporting documents.
    pub supporting_docs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::line::{LineField, LineId};
    use serde_json::json;

    #[test]
    fn test_line_request_from_credit_line() {
        let mut line = LedgerEntryLine::empty(LineId(4), 2);
        line.set_field(LineField::AccountNo, "4000");
        line.set_field(LineField::AccountTitle, "Revenue");
        line.set_field(LineField::Credit, "250.75");

        let request = JournalLineRequest::from(&line);
        assert!(!request.is_debit);
        assert_eq!(request.amount, Decimal::new(25075, 2));
        assert_eq!(request.line_no, 2);
    }

    #[test]
    fn test_wire_shape() {
        let request = JournalEntryRequest {
            date: "2024-03-01".to_string(),
            transaction_no: None,
            description: "Sale".to_string(),
            entries: vec![JournalLineRequest {
                account_no: "1000".to_string(),
                account_title: "Cash".to_string(),
                amount: Decimal::new(100, 0),
                is_debit: true,
                line_no: 1,
                vendor: String::new(),
                document_no: String::new(),
                department: String::new(),
                project: String::new(),
                description: String::new(),
            }],
            supporting_docs: vec!["receipt.pdf".to_string()],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["entries"][0]["amount"], json!(100.0));
        assert_eq!(value["entries"][0]["isDebit"], json!(true));
        assert_eq!(value["entries"][0]["accountNo"], json!("1000"));
        assert_eq!(value["supportingDocs"], json!(["receipt.pdf"]));
        assert_eq!(value["transactionNo"], json!(null));

        let with_no = JournalEntryRequest {
            transaction_no: Some("TX-7".to_string()),
            ..request
        };
        assert_eq!(serde_json::to_value(&with_no).unwrap()["transactionNo"], json!("TX-7"));
    }
}
