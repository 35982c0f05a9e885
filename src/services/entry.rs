//! Entry capture service
//!
//! Takes free text from the user, has it interpreted, stamps the result into
//! a record and prepends it to the ledger.

use crate::ai::{interpret, GenerativeModel};
use crate::config::Settings;
use crate::error::ScribeResult;
use crate::models::{ParsedEntry, Transaction};
use crate::storage::Ledger;

/// Shown whenever an entry can't be turned into a record
pub const ENTRY_RETRY_MESSAGE: &str = "似乎没能听清，请您再说一次...";

/// Service for capturing new entries
pub struct EntryService<'a> {
    ledger: &'a Ledger,
    settings: &'a Settings,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(ledger: &'a Ledger, settings: &'a Settings) -> Self {
        Self { ledger, settings }
    }

    /// Interpret `input` with `model` and store the resulting record
    ///
    /// On any failure nothing is stored and the caller still has `input`
    /// for a resubmission.
    pub fn record(&self, model: &dyn GenerativeModel, input: &str) -> ScribeResult<Transaction> {
        let parsed = interpret(model, input)?;
        self.commit(input, parsed)
    }

    /// Store an already-interpreted entry
    ///
    /// The text is kept verbatim; currency comes from settings.
    pub fn commit(&self, input: &str, parsed: ParsedEntry) -> ScribeResult<Transaction> {
        let record = Transaction::new(input, parsed, self.settings.currency.clone());
        self.ledger.append(record.clone())?;
        Ok(record)
    }

    /// Most recent records for the preview under the entry box
    pub fn recent(&self) -> Vec<Transaction> {
        self.ledger.recent(self.settings.recent_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::ScriptedModel;
    use crate::error::ScribeError;
    use crate::models::TransactionType;
    use crate::reports::LedgerSummary;
    use crate::storage::MemorySlot;

    const NOODLES: &str =
        r#"{"amount": 30, "type": "EXPENSE", "category": "餐饮", "summary": "牛肉面"}"#;

    #[test]
    fn test_record_stores_transaction() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();
        let service = EntryService::new(&ledger, &settings);
        let model = ScriptedModel::replying(NOODLES);

        let record = service.record(&model, "午饭 牛肉面 30 ").unwrap();

        assert_eq!(record.original_input, "午饭 牛肉面 30 ");
        assert_eq!(record.currency, "CNY");
        assert_eq!(record.kind, TransactionType::Expense);
        assert_eq!(ledger.list(), vec![record]);
    }

    #[test]
    fn test_failed_interpretation_stores_nothing() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();
        let service = EntryService::new(&ledger, &settings);
        let model = ScriptedModel::replying("not json at all");

        let err = service.record(&model, "午饭 30").unwrap_err();

        assert!(matches!(err, ScribeError::Interpretation(_)));
        assert!(ledger.list().is_empty());
    }

    #[test]
    fn test_oversized_amount_is_refused() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();
        let service = EntryService::new(&ledger, &settings);
        let reply = r#"{"amount": 60000000000000000, "type": "EXPENSE", "category": "餐饮", "summary": "牛肉面"}"#;

        for _ in 0..2 {
            let model = ScriptedModel::replying(reply);
            let err = service.record(&model, "牛肉面").unwrap_err();
            assert!(matches!(err, ScribeError::Interpretation(_)));
        }

        assert!(ledger.list().is_empty());
        let summary = LedgerSummary::compute(&ledger.list());
        assert!(summary.expense.is_zero());
    }

    #[test]
    fn test_currency_follows_settings() {
        let ledger = Ledger::new(MemorySlot::new());
        let mut settings = Settings::default();
        settings.currency = "EUR".to_string();
        let service = EntryService::new(&ledger, &settings);

        let record = service
            .record(&ScriptedModel::replying(NOODLES), "lunch 30")
            .unwrap();
        assert_eq!(record.currency, "EUR");
    }

    #[test]
    fn test_recent_preview() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();
        let service = EntryService::new(&ledger, &settings);

        let model = ScriptedModel::new();
        for _ in 0..5 {
            model.push(Ok(Some(NOODLES.to_string())));
        }
        let mut last = None;
        for i in 0..5 {
            last = Some(service.record(&model, &format!("entry {}", i)).unwrap());
        }

        let recent = service.recent();
        assert_eq!(recent.len(), 3);
        assert_eq!(Some(&recent[0]), last.as_ref());
        assert_eq!(recent[2].original_input, "entry 2");
    }
}
