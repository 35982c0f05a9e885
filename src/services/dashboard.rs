//! Dashboard service
//!
//! Combines the local summary with the AI narrative for the dashboard view.

use crate::ai::{generate_report, GenerativeModel};
use crate::config::Settings;
use crate::models::Transaction;
use crate::reports::LedgerSummary;
use crate::storage::Ledger;

/// Everything the dashboard shows
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub summary: LedgerSummary,
    /// `None` when there are no records or no model was supplied
    pub report: Option<String>,
}

/// Service that assembles the dashboard
pub struct DashboardService<'a> {
    ledger: &'a Ledger,
    settings: &'a Settings,
}

impl<'a> DashboardService<'a> {
    /// Create a new dashboard service
    pub fn new(ledger: &'a Ledger, settings: &'a Settings) -> Self {
        Self { ledger, settings }
    }

    /// Build the dashboard for the current ledger
    ///
    /// The narrative covers the most recent `report_window` records under
    /// `period`. An empty ledger never reaches the model.
    pub fn build(&self, model: Option<&dyn GenerativeModel>, period: &str) -> Dashboard {
        let transactions = self.ledger.list();
        let summary = LedgerSummary::compute(&transactions);

        let report = match model {
            Some(model) if !transactions.is_empty() => Some(generate_report(
                model,
                report_window(&transactions, self.settings.report_window),
                period,
            )),
            _ => None,
        };

        Dashboard { summary, report }
    }
}

/// The slice of records that feeds a report
pub fn report_window(transactions: &[Transaction], window: usize) -> &[Transaction] {
    &transactions[..transactions.len().min(window)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::ScriptedModel;
    use crate::ai::REPORT_FALLBACK;
    use crate::models::{Money, ParsedEntry, TransactionType};
    use crate::storage::MemorySlot;

    fn seed(ledger: &Ledger, count: usize) {
        for i in 0..count {
            ledger
                .append(Transaction::new(
                    format!("entry {}", i),
                    ParsedEntry {
                        amount: Money::from_minor(1000),
                        kind: TransactionType::Expense,
                        category: "餐饮".to_string(),
                        summary: format!("item {}", i),
                    },
                    "CNY",
                ))
                .unwrap();
        }
    }

    #[test]
    fn test_empty_ledger_skips_model() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();
        let model = ScriptedModel::replying("unused");

        let dashboard = DashboardService::new(&ledger, &settings).build(Some(&model), "本月");

        assert!(dashboard.report.is_none());
        assert_eq!(model.request_count(), 0);
        assert!(dashboard.summary.expense.is_zero());
    }

    #[test]
    fn test_report_included() {
        let ledger = Ledger::new(MemorySlot::new());
        seed(&ledger, 2);
        let settings = Settings::default();
        let model = ScriptedModel::replying("**支出 20 元**");

        let dashboard = DashboardService::new(&ledger, &settings).build(Some(&model), "本月");

        assert_eq!(dashboard.report.as_deref(), Some("**支出 20 元**"));
        assert_eq!(dashboard.summary.expense, Money::from_minor(2000));
    }

    #[test]
    fn test_report_failure_degrades() {
        let ledger = Ledger::new(MemorySlot::new());
        seed(&ledger, 1);
        let settings = Settings::default();
        let model = ScriptedModel::failing("offline");

        let dashboard = DashboardService::new(&ledger, &settings).build(Some(&model), "本月");
        assert_eq!(dashboard.report.as_deref(), Some(REPORT_FALLBACK));
    }

    #[test]
    fn test_report_uses_window() {
        let ledger = Ledger::new(MemorySlot::new());
        seed(&ledger, 5);
        let mut settings = Settings::default();
        settings.report_window = 2;
        let model = ScriptedModel::replying("ok");

        DashboardService::new(&ledger, &settings).build(Some(&model), "本周");

        let prompt = model.last_request().unwrap().prompt;
        assert!(prompt.contains("item 4"));
        assert!(prompt.contains("item 3"));
        assert!(!prompt.contains("item 2"));
        assert!(prompt.contains("本周"));
    }

    #[test]
    fn test_no_model_no_report() {
        let ledger = Ledger::new(MemorySlot::new());
        seed(&ledger, 1);
        let settings = Settings::default();

        let dashboard = DashboardService::new(&ledger, &settings).build(None, "本月");
        assert!(dashboard.report.is_none());
        assert_eq!(dashboard.summary.transaction_count, 1);
    }
}
