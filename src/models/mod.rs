//! Core data models for scribe-ledger
//!
//! A ledger is a flat list of [`Transaction`] records; everything else is
//! derived from it.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::Money;
pub use transaction::{ParsedEntry, Transaction, TransactionType};
