//! Reports module for scribe-ledger
//!
//! Aggregates computed locally from the ledger. The AI-written narrative lives
//! in [`crate::ai::report`].

pub mod summary;

pub use summary::{CategoryTotal, LedgerSummary};
