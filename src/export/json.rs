//! JSON Export functionality
//!
//! Exports the ledger to a versioned JSON document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ScribeError, ScribeResult};
use crate::models::Transaction;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Ledger export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of records
    pub transaction_count: usize,

    /// All records, newest first
    pub transactions: Vec<Transaction>,
}

impl LedgerExport {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transaction_count: transactions.len(),
            transactions,
        }
    }
}

/// Write the records as a pretty-printed export document
pub fn export_transactions_json<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> ScribeResult<()> {
    let export = LedgerExport::new(transactions.to_vec());
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| ScribeError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ScribeError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, ParsedEntry, TransactionType};

    #[test]
    fn test_export_document() {
        let txn = Transaction::new(
            "奶茶 18",
            ParsedEntry {
                amount: Money::from_minor(1800),
                kind: TransactionType::Expense,
                category: "餐饮".to_string(),
                summary: "奶茶".to_string(),
            },
            "CNY",
        );

        let mut buffer = Vec::new();
        export_transactions_json(&[txn.clone()], &mut buffer).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.transaction_count, 1);
        assert_eq!(parsed.transactions, vec![txn]);
    }
}
