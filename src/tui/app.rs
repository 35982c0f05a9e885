//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! AI calls run on short-lived worker threads; their results come back over
//! a channel and are applied on the UI thread by [`App::poll_worker`].

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use tracing::{debug, warn};

use crate::ai::{generate_report, interpret, GenerativeModel};
use crate::config::Settings;
use crate::error::{ScribeError, ScribeResult};
use crate::models::{ParsedEntry, Transaction};
use crate::reports::LedgerSummary;
use crate::services::{report_window, EntryService, ENTRY_RETRY_MESSAGE};
use crate::storage::Ledger;

use super::widgets::TextInput;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Scribe,
    Treasury,
    Archives,
}

impl ActiveView {
    /// Tab order
    pub const ALL: [ActiveView; 3] = [Self::Scribe, Self::Treasury, Self::Archives];

    /// Tab title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Scribe => "Scribe",
            Self::Treasury => "Treasury",
            Self::Archives => "Archives",
        }
    }

    /// Position in the tab bar
    pub fn index(&self) -> usize {
        match self {
            Self::Scribe => 0,
            Self::Treasury => 1,
            Self::Archives => 2,
        }
    }

    /// The tab after this one, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Result of a finished background call
#[derive(Debug)]
pub enum WorkerMessage {
    /// The interpreter finished with `input`
    Interpreted {
        input: String,
        result: ScribeResult<ParsedEntry>,
    },
    /// A narrative report over `record_count` records is ready
    Report { record_count: usize, text: String },
}

/// Main application state
pub struct App<'a> {
    /// The ledger
    pub ledger: &'a Ledger,

    /// Application settings
    pub settings: &'a Settings,

    /// AI service, absent when no credential is configured
    model: Option<Arc<dyn GenerativeModel>>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Entry box on the Scribe tab
    pub entry_input: TextInput,

    /// An interpretation is in flight
    pub interpreting: bool,

    /// Error shown under the entry box after a failed interpretation
    pub entry_error: Option<String>,

    /// Most recently stored record
    pub last_saved: Option<Transaction>,

    /// Cached ledger contents, newest first
    pub transactions: Vec<Transaction>,

    /// Latest narrative report
    pub report: Option<String>,

    /// A report is in flight
    pub report_pending: bool,

    /// Record count the last report request was made for
    pub last_report_count: Option<usize>,

    /// Selected row on the Archives tab
    pub archive_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    sender: mpsc::Sender<WorkerMessage>,
    receiver: mpsc::Receiver<WorkerMessage>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(
        ledger: &'a Ledger,
        settings: &'a Settings,
        model: Option<Arc<dyn GenerativeModel>>,
    ) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            ledger,
            settings,
            model,
            should_quit: false,
            active_view: ActiveView::default(),
            entry_input: TextInput::new().placeholder("午饭吃了牛肉面 30 块"),
            interpreting: false,
            entry_error: None,
            last_saved: None,
            transactions: ledger.list(),
            report: None,
            report_pending: false,
            last_report_count: None,
            archive_index: 0,
            status_message: None,
            sender,
            receiver,
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Reload the cached records from the ledger
    pub fn refresh(&mut self) {
        self.transactions = self.ledger.list();
        if self.archive_index >= self.transactions.len() {
            self.archive_index = self.transactions.len().saturating_sub(1);
        }
    }

    /// Totals and category breakdown for the cached records
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::compute(&self.transactions)
    }

    /// Preview rows under the entry box
    pub fn recent(&self) -> &[Transaction] {
        let n = self.settings.recent_count.min(self.transactions.len());
        &self.transactions[..n]
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        if view == ActiveView::Treasury {
            self.request_report();
        }
    }

    /// Switch to the next view in tab order
    pub fn next_view(&mut self) {
        self.switch_view(self.active_view.next());
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Send the entry box contents to the interpreter
    ///
    /// Ignored while another interpretation is running or the box is blank.
    pub fn submit_entry(&mut self) {
        if self.interpreting || self.entry_input.is_blank() {
            return;
        }

        let model = match &self.model {
            Some(model) => Arc::clone(model),
            None => {
                self.entry_error = Some(ScribeError::missing_api_key().to_string());
                return;
            }
        };

        let input = self.entry_input.value().to_string();
        self.interpreting = true;
        self.entry_error = None;
        self.set_status("正在记录...");
        debug!("interpreting entry on worker thread");

        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = interpret(model.as_ref(), &input);
            let _ = sender.send(WorkerMessage::Interpreted { input, result });
        });
    }

    /// Ask for a new report if the record count changed since the last one
    pub fn request_report(&mut self) {
        if self.report_pending {
            return;
        }

        let record_count = self.transactions.len();
        if self.last_report_count == Some(record_count) {
            return;
        }
        self.last_report_count = Some(record_count);

        if record_count == 0 {
            self.report = None;
            return;
        }

        let model = match &self.model {
            Some(model) => Arc::clone(model),
            None => {
                self.report = Some(ScribeError::missing_api_key().to_string());
                return;
            }
        };

        self.report_pending = true;
        let records = report_window(&self.transactions, self.settings.report_window).to_vec();
        let period = self.settings.report_period.clone();
        let sender = self.sender.clone();
        thread::spawn(move || {
            let text = generate_report(model.as_ref(), &records, &period);
            let _ = sender.send(WorkerMessage::Report { record_count, text });
        });
    }

    /// Apply every finished background result
    pub fn poll_worker(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            self.apply(message);
        }
    }

    fn apply(&mut self, message: WorkerMessage) {
        match message {
            WorkerMessage::Interpreted { input, result } => {
                self.interpreting = false;
                self.clear_status();
                let stored = result.and_then(|parsed| {
                    EntryService::new(self.ledger, self.settings).commit(&input, parsed)
                });
                match stored {
                    Ok(txn) => {
                        self.entry_input.clear();
                        self.set_status(format!("已记录：{}", txn.summary));
                        self.last_saved = Some(txn);
                        self.refresh();
                    }
                    Err(e) => {
                        warn!(error = %e, "entry was not recorded");
                        self.entry_error = Some(e.to_string());
                    }
                }
            }
            WorkerMessage::Report { record_count, text } => {
                self.report_pending = false;
                self.report = Some(text);
                // Records may have arrived while this report was running
                if record_count != self.transactions.len()
                    && self.active_view == ActiveView::Treasury
                {
                    self.request_report();
                }
            }
        }
    }

    /// Message shown under the entry box after a failure
    pub fn entry_feedback(&self) -> Option<(&'static str, &str)> {
        self.entry_error
            .as_deref()
            .map(|detail| (ENTRY_RETRY_MESSAGE, detail))
    }

    /// Move archive selection up
    pub fn move_up(&mut self) {
        if self.archive_index > 0 {
            self.archive_index -= 1;
        }
    }

    /// Move archive selection down
    pub fn move_down(&mut self) {
        if self.archive_index + 1 < self.transactions.len() {
            self.archive_index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::ScriptedModel;
    use crate::ai::REPORT_FALLBACK;
    use crate::storage::MemorySlot;
    use std::time::Duration;

    const NOODLES: &str =
        r#"{"amount": 30, "type": "EXPENSE", "category": "餐饮", "summary": "牛肉面"}"#;

    fn wait(app: &mut App) {
        let message = app
            .receiver
            .recv_timeout(Duration::from_secs(5))
            .expect("worker did not answer");
        app.apply(message);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.entry_input.insert(c);
        }
    }

    #[test]
    fn test_view_cycle() {
        assert_eq!(ActiveView::Scribe.next(), ActiveView::Treasury);
        assert_eq!(ActiveView::Treasury.next(), ActiveView::Archives);
        assert_eq!(ActiveView::Archives.next(), ActiveView::Scribe);
    }

    #[test]
    fn test_submit_entry_stores_record() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();
        let model: Arc<dyn GenerativeModel> = Arc::new(ScriptedModel::replying(NOODLES));
        let mut app = App::new(&ledger, &settings, Some(model));

        type_text(&mut app, "午饭牛肉面30");
        app.submit_entry();
        assert!(app.interpreting);

        wait(&mut app);

        assert!(!app.interpreting);
        assert!(app.entry_input.value().is_empty());
        assert_eq!(app.transactions.len(), 1);
        assert_eq!(app.recent()[0].summary, "牛肉面");
        assert_eq!(app.last_saved.as_ref().unwrap().original_input, "午饭牛肉面30");
    }

    #[test]
    fn test_failed_entry_keeps_input() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();
        let model: Arc<dyn GenerativeModel> = Arc::new(ScriptedModel::failing("offline"));
        let mut app = App::new(&ledger, &settings, Some(model));

        type_text(&mut app, "随便说点什么");
        app.submit_entry();
        wait(&mut app);

        assert_eq!(app.entry_input.value(), "随便说点什么");
        assert!(ledger.list().is_empty());
        let (message, detail) = app.entry_feedback().unwrap();
        assert_eq!(message, ENTRY_RETRY_MESSAGE);
        assert!(detail.contains("offline"));
    }

    #[test]
    fn test_submit_without_model() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();
        let mut app = App::new(&ledger, &settings, None);

        type_text(&mut app, "咖啡 25");
        app.submit_entry();

        assert!(!app.interpreting);
        assert!(app.entry_error.as_deref().unwrap().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_blank_entry_ignored() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();
        let model = Arc::new(ScriptedModel::new());
        let mut app = App::new(&ledger, &settings, Some(model.clone() as Arc<dyn GenerativeModel>));

        type_text(&mut app, "   ");
        app.submit_entry();

        assert!(!app.interpreting);
        assert_eq!(model.request_count(), 0);
    }

    #[test]
    fn test_report_requested_only_when_count_changes() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();
        let model = Arc::new(ScriptedModel::new());
        model.push(Ok(Some(NOODLES.to_string())));
        model.push(Err(ScribeError::Ai("offline".to_string())));
        let mut app = App::new(&ledger, &settings, Some(model.clone() as Arc<dyn GenerativeModel>));

        // Empty ledger never reaches the model
        app.switch_view(ActiveView::Treasury);
        assert!(!app.report_pending);
        assert!(app.report.is_none());

        app.switch_view(ActiveView::Scribe);
        type_text(&mut app, "午饭牛肉面30");
        app.submit_entry();
        wait(&mut app);

        app.switch_view(ActiveView::Treasury);
        assert!(app.report_pending);
        wait(&mut app);
        assert_eq!(app.report.as_deref(), Some(REPORT_FALLBACK));
        assert_eq!(model.request_count(), 2);

        // Same record count: no new request
        app.switch_view(ActiveView::Archives);
        app.switch_view(ActiveView::Treasury);
        assert!(!app.report_pending);
        assert_eq!(model.request_count(), 2);
    }

    #[test]
    fn test_archive_selection_bounds() {
        let ledger = Ledger::new(MemorySlot::new());
        let settings = Settings::default();
        let model = Arc::new(ScriptedModel::new());
        model.push(Ok(Some(NOODLES.to_string())));
        model.push(Ok(Some(NOODLES.to_string())));
        let mut app = App::new(&ledger, &settings, Some(model as Arc<dyn GenerativeModel>));

        for _ in 0..2 {
            type_text(&mut app, "牛肉面30");
            app.submit_entry();
            wait(&mut app);
        }

        app.move_up();
        assert_eq!(app.archive_index, 0);
        app.move_down();
        app.move_down();
        assert_eq!(app.archive_index, 1);
    }
}
