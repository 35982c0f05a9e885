//! Terminal User Interface module
//!
//! Three tabs over the same ledger: Scribe for capturing entries, Treasury
//! for totals and the narrative report, Archives for the full record list.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
