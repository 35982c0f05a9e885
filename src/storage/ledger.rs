//! The ledger: an ordered list of transactions kept in one slot
//!
//! The slot holds a JSON array of records, newest first. Reading never fails:
//! a missing, unreadable, or malformed payload is an empty ledger. Writing is
//! read-modify-write with no locking, so two processes appending at the same
//! moment can lose one of the appends.

use tracing::{info, warn};

use crate::error::ScribeResult;
use crate::models::Transaction;

use super::slot::Slot;

/// Ordered transaction store over a [`Slot`]
pub struct Ledger {
    slot: Box<dyn Slot>,
}

impl Ledger {
    /// Create a ledger over any slot
    pub fn new(slot: impl Slot + 'static) -> Self {
        Self {
            slot: Box::new(slot),
        }
    }

    /// All records, most recent first
    ///
    /// Returns an empty list when nothing is stored or the payload can't be
    /// decoded into valid records.
    pub fn list(&self) -> Vec<Transaction> {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "ledger slot unreadable, treating as empty");
                return Vec::new();
            }
        };

        let records: Vec<Transaction> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "ledger payload is corrupt, treating as empty");
                return Vec::new();
            }
        };

        if let Some(err) = records.iter().find_map(|r| r.validate().err()) {
            warn!(error = %err, "ledger payload holds an invalid record, treating as empty");
            return Vec::new();
        }

        records
    }

    /// The `count` most recent records
    pub fn recent(&self, count: usize) -> Vec<Transaction> {
        let mut records = self.list();
        records.truncate(count);
        records
    }

    /// Put a record at the front of the ledger and persist the whole list
    ///
    /// Returns the updated list.
    pub fn append(&self, record: Transaction) -> ScribeResult<Vec<Transaction>> {
        let id = record.id.short();
        let mut updated = Vec::with_capacity(1);
        updated.push(record);
        updated.extend(self.list());

        let payload = serde_json::to_string(&updated)?;
        self.slot.write(&payload)?;

        info!(id = %id, total = updated.len(), "appended ledger record");
        Ok(updated)
    }

    /// Remove every record
    pub fn clear(&self) -> ScribeResult<()> {
        self.slot.remove()?;
        info!("cleared ledger");
        Ok(())
    }
}
