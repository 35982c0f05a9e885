//! CLI command for the dashboard
//!
//! Prints totals and the category breakdown, then the narrative report.

use crate::ai::{GeminiClient, GenerativeModel};
use crate::config::Settings;
use crate::display::plain_report;
use crate::error::ScribeResult;
use crate::reports::LedgerSummary;
use crate::services::DashboardService;
use crate::storage::Ledger;

/// Handle `scribe dashboard`
///
/// The local summary is always printed. The credential is only needed when
/// there are records to report on; without one the summary is followed by
/// the configuration error.
pub fn handle_dashboard_command(
    ledger: &Ledger,
    settings: &Settings,
    api_key: Option<&str>,
    period: Option<String>,
    no_report: bool,
) -> ScribeResult<()> {
    let period = period.unwrap_or_else(|| settings.report_period.clone());
    let service = DashboardService::new(ledger, settings);

    if no_report || ledger.list().is_empty() {
        let dashboard = service.build(None, &period);
        print_summary(&dashboard.summary, settings);
        return Ok(());
    }

    let model = match GeminiClient::from_settings(settings, api_key) {
        Ok(model) => model,
        Err(e) => {
            let dashboard = service.build(None, &period);
            print_summary(&dashboard.summary, settings);
            return Err(e);
        }
    };

    let dashboard = service.build(Some(&model as &dyn GenerativeModel), &period);
    print_summary(&dashboard.summary, settings);

    if let Some(report) = dashboard.report {
        println!();
        println!("Report ({})", period);
        println!("{}", "=".repeat(50));
        println!("{}", plain_report(&report));
    }

    Ok(())
}

fn print_summary(summary: &LedgerSummary, settings: &Settings) {
    println!("Treasury");
    println!("{}", "=".repeat(50));
    print!("{}", summary.format_terminal(&settings.currency_symbol));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, ParsedEntry, Transaction, TransactionType};
    use crate::storage::MemorySlot;

    #[test]
    fn test_empty_ledger_needs_no_key() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();

        handle_dashboard_command(&ledger, &settings, None, None, false).unwrap();
    }

    #[test]
    fn test_report_needs_key_once_records_exist() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();
        ledger
            .append(Transaction::new(
                "地铁 4",
                ParsedEntry {
                    amount: Money::from_minor(400),
                    kind: TransactionType::Expense,
                    category: "交通".to_string(),
                    summary: "地铁".to_string(),
                },
                "CNY",
            ))
            .unwrap();

        let err = handle_dashboard_command(&ledger, &settings, None, None, false).unwrap_err();
        assert!(err.is_config());

        handle_dashboard_command(&ledger, &settings, None, None, true).unwrap();
    }
}
