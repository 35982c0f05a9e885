//! Export module for scribe-ledger
//!
//! - CSV: spreadsheet-compatible record listing
//! - JSON: versioned machine-readable document

pub mod csv;
pub mod json;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_transactions_json, LedgerExport, EXPORT_SCHEMA_VERSION};
