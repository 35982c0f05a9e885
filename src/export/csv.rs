//! CSV Export functionality
//!
//! Exports ledger records to a spreadsheet-friendly CSV file.

use std::io::Write;

use serde::Serialize;

use crate::error::{ScribeError, ScribeResult};
use crate::models::Transaction;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    kind: &'static str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Currency")]
    currency: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Summary")]
    summary: &'a str,
    #[serde(rename = "Original Input")]
    original_input: &'a str,
}

/// Export all records to CSV, newest first
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> ScribeResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if transactions.is_empty() {
        // serialize() only emits headers alongside the first record
        csv_writer
            .write_record([
                "ID",
                "Date",
                "Type",
                "Amount",
                "Currency",
                "Category",
                "Summary",
                "Original Input",
            ])
            .map_err(|e| ScribeError::Export(e.to_string()))?;
    }

    for txn in transactions {
        csv_writer
            .serialize(CsvRow {
                id: txn.id.to_string(),
                date: txn.date.to_rfc3339(),
                kind: txn.kind.as_str(),
                amount: txn.amount.to_string(),
                currency: &txn.currency,
                category: &txn.category,
                summary: &txn.summary,
                original_input: &txn.original_input,
            })
            .map_err(|e| ScribeError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ScribeError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, ParsedEntry, TransactionType};

    #[test]
    fn test_export_quotes_fields() {
        let txn = Transaction::new(
            "dinner, with friends 88.5",
            ParsedEntry {
                amount: Money::from_minor(8850),
                kind: TransactionType::Expense,
                category: "餐饮".to_string(),
                summary: "聚餐".to_string(),
            },
            "CNY",
        );

        let mut buffer = Vec::new();
        export_transactions_csv(&[txn], &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();

        assert_eq!(
            lines.next().unwrap(),
            "ID,Date,Type,Amount,Currency,Category,Summary,Original Input"
        );
        let row = lines.next().unwrap();
        assert!(row.contains(",EXPENSE,88.50,CNY,餐饮,聚餐,"));
        assert!(row.ends_with("\"dinner, with friends 88.5\""));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_export_empty_has_header() {
        let mut buffer = Vec::new();
        export_transactions_csv(&[], &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "ID,Date,Type,Amount,Currency,Category,Summary,Original Input\n"
        );
    }
}
