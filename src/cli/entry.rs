//! CLI commands for capturing entries
//!
//! `add` turns free text into a stored record; `recent` shows the preview
//! list without touching the AI service.

use crate::ai::GeminiClient;
use crate::config::Settings;
use crate::display::{format_recent, format_transaction_details};
use crate::error::ScribeResult;
use crate::services::{EntryService, ENTRY_RETRY_MESSAGE};
use crate::storage::Ledger;

/// Handle `scribe add <text...>`
pub fn handle_add_command(
    ledger: &Ledger,
    settings: &Settings,
    api_key: Option<&str>,
    words: &[String],
) -> ScribeResult<()> {
    let input = words.join(" ");
    let model = GeminiClient::from_settings(settings, api_key)?;
    let service = EntryService::new(ledger, settings);

    match service.record(&model, &input) {
        Ok(txn) => {
            print!("{}", format_transaction_details(&txn, &settings.currency_symbol));
            println!();
            print!("{}", format_recent(&service.recent(), &settings.currency_symbol));
            Ok(())
        }
        Err(e) if e.is_entry_failure() => {
            eprintln!("{}", ENTRY_RETRY_MESSAGE);
            eprintln!("  Input: {}", input);
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// Handle `scribe recent [-n N]`
pub fn handle_recent_command(
    ledger: &Ledger,
    settings: &Settings,
    count: Option<usize>,
) -> ScribeResult<()> {
    let transactions = match count {
        Some(n) => ledger.recent(n),
        None => EntryService::new(ledger, settings).recent(),
    };
    print!("{}", format_recent(&transactions, &settings.currency_symbol));
    Ok(())
}
