//! Service layer for scribe-ledger
//!
//! Ties the ledger, the AI boundary and the summaries together for the CLI
//! and the TUI.

pub mod dashboard;
pub mod entry;

pub use dashboard::{report_window, Dashboard, DashboardService};
pub use entry::{EntryService, ENTRY_RETRY_MESSAGE};
