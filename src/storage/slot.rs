//! Key-value slots that hold the raw ledger payload
//!
//! A slot is one named location holding one string. The ledger neither knows
//! nor cares whether that is a file on disk or a string in memory.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{ScribeError, ScribeResult};

use super::file_io::{read_optional, remove_if_exists, write_atomic};

/// A single named storage slot
pub trait Slot: Send + Sync {
    /// Read the slot; `None` if it was never written or has been removed
    fn read(&self) -> ScribeResult<Option<String>>;

    /// Replace the slot's contents
    fn write(&self, contents: &str) -> ScribeResult<()>;

    /// Remove the slot
    fn remove(&self) -> ScribeResult<()>;
}

/// Slot backed by a JSON file on disk
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Slot for FileSlot {
    fn read(&self) -> ScribeResult<Option<String>> {
        read_optional(&self.path)
    }

    fn write(&self, contents: &str) -> ScribeResult<()> {
        write_atomic(&self.path, contents)
    }

    fn remove(&self) -> ScribeResult<()> {
        remove_if_exists(&self.path)
    }
}

/// Slot held in memory
///
/// Used by tests and anywhere a throwaway ledger is wanted. It can be seeded
/// with any raw payload, including one that isn't valid JSON.
#[derive(Default)]
pub struct MemorySlot {
    contents: RwLock<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds `raw`
    pub fn with_contents(raw: impl Into<String>) -> Self {
        Self {
            contents: RwLock::new(Some(raw.into())),
        }
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> ScribeResult<Option<String>> {
        let contents = self
            .contents
            .read()
            .map_err(|e| ScribeError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(contents.clone())
    }

    fn write(&self, raw: &str) -> ScribeResult<()> {
        let mut contents = self
            .contents
            .write()
            .map_err(|e| ScribeError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *contents = Some(raw.to_string());
        Ok(())
    }

    fn remove(&self) -> ScribeResult<()> {
        let mut contents = self
            .contents
            .write()
            .map_err(|e| ScribeError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *contents = None;
        Ok(())
    }
}
