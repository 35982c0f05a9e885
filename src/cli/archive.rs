//! CLI commands for the archive
//!
//! Listing, exporting and clearing stored records.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::Settings;
use crate::display::format_archive;
use crate::error::{ScribeError, ScribeResult};
use crate::export::{export_transactions_csv, export_transactions_json};
use crate::storage::Ledger;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per record
    Csv,
    /// Versioned JSON document
    Json,
}

/// Handle `scribe archive [--limit N]`
pub fn handle_archive_command(
    ledger: &Ledger,
    settings: &Settings,
    limit: Option<usize>,
) -> ScribeResult<()> {
    let transactions = match limit {
        Some(n) => ledger.recent(n),
        None => ledger.list(),
    };
    print!("{}", format_archive(&transactions, &settings.currency_symbol));
    Ok(())
}

/// Handle `scribe export --format F [-o FILE]`
///
/// Writes to stdout when no output file is given.
pub fn handle_export_command(
    ledger: &Ledger,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> ScribeResult<()> {
    let transactions = ledger.list();

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                ScribeError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&transactions, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ScribeError::Export(e.to_string()))?;
            println!(
                "Exported {} records to: {}",
                transactions.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(&transactions, format, &mut handle)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    transactions: &[crate::models::Transaction],
    format: ExportFormat,
    writer: &mut W,
) -> ScribeResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(transactions, writer),
        ExportFormat::Json => export_transactions_json(transactions, writer),
    }
}

/// Handle `scribe clear [--force]`
pub fn handle_clear_command(ledger: &Ledger, force: bool) -> ScribeResult<()> {
    let count = ledger.list().len();

    if !force {
        println!("This will permanently remove {} records.", count);
        println!("Use --force to confirm.");
        return Ok(());
    }

    ledger.clear()?;
    println!("Cleared {} records.", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, ParsedEntry, Transaction, TransactionType};
    use crate::storage::MemorySlot;

    fn seeded_ledger() -> Ledger {
        let ledger = Ledger::new(MemorySlot::new());
        ledger
            .append(Transaction::new(
                "咖啡 25",
                ParsedEntry {
                    amount: Money::from_minor(2500),
                    kind: TransactionType::Expense,
                    category: "餐饮".to_string(),
                    summary: "咖啡".to_string(),
                },
                "CNY",
            ))
            .unwrap();
        ledger
    }

    #[test]
    fn test_clear_requires_force() {
        let ledger = seeded_ledger();
        handle_clear_command(&ledger, false).unwrap();
        assert_eq!(ledger.list().len(), 1);

        handle_clear_command(&ledger, true).unwrap();
        assert!(ledger.list().is_empty());
    }

    #[test]
    fn test_write_export_formats() {
        let ledger = seeded_ledger();
        let transactions = ledger.list();

        let mut csv_out = Vec::new();
        write_export(&transactions, ExportFormat::Csv, &mut csv_out).unwrap();
        assert!(String::from_utf8(csv_out).unwrap().starts_with("ID,Date,Type"));

        let mut json_out = Vec::new();
        write_export(&transactions, ExportFormat::Json, &mut json_out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json_out).unwrap();
        assert_eq!(value["transaction_count"], 1);
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let ledger = seeded_ledger();

        handle_export_command(&ledger, ExportFormat::Csv, Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.contains("咖啡"));
    }
}
