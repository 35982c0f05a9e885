//! Storage layer for scribe-ledger
//!
//! The ledger lives in a single slot: a JSON array of records written with an
//! atomic temp-file rename. The slot is a trait so tests can swap in memory.

pub mod file_io;
pub mod ledger;
pub mod slot;

pub use ledger::Ledger;
pub use slot::{FileSlot, MemorySlot, Slot};

use crate::config::paths::ScribePaths;
use crate::error::ScribeError;

/// Open the on-disk ledger, creating its directories if needed
pub fn open_ledger(paths: &ScribePaths) -> Result<Ledger, ScribeError> {
    paths.ensure_directories()?;
    Ok(Ledger::new(FileSlot::new(paths.ledger_file())))
}
