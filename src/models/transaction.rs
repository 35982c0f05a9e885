//! Transaction model
//!
//! A ledger record created from one free-text entry. Records are immutable:
//! nothing in the crate edits one after it is built.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{ScribeError, ScribeResult};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Wire/storage name (`INCOME` / `EXPENSE`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    /// Sign shown in front of amounts
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured fields extracted from a free-text entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedEntry {
    pub amount: Money,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub summary: String,
}

/// A ledger record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The text the user typed, verbatim
    pub original_input: String,

    /// Magnitude; the direction lives in `kind`
    pub amount: Money,

    /// Currency code, fixed by settings
    pub currency: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Free-form label chosen by the model
    pub category: String,

    /// Short description
    pub summary: String,

    /// When the record was created
    pub date: DateTime<Utc>,

    /// Creation instant in epoch milliseconds
    pub timestamp: i64,
}

impl Transaction {
    /// Build a record from an interpreted entry, stamped with the current time
    pub fn new(original_input: impl Into<String>, entry: ParsedEntry, currency: impl Into<String>) -> Self {
        Self::at(original_input, entry, currency, Utc::now())
    }

    /// Build a record with an explicit creation time
    pub fn at(
        original_input: impl Into<String>,
        entry: ParsedEntry,
        currency: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            original_input: original_input.into(),
            amount: entry.amount,
            currency: currency.into(),
            kind: entry.kind,
            category: entry.category,
            summary: entry.summary,
            date: created,
            timestamp: created.timestamp_millis(),
        }
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with the direction applied (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Check the record invariants that serde can't express
    pub fn validate(&self) -> ScribeResult<()> {
        if self.amount.is_negative() {
            return Err(ScribeError::Validation(format!(
                "record {} has a negative amount",
                self.id.short()
            )));
        }
        if !self.amount.is_within_bounds() {
            return Err(ScribeError::Validation(format!(
                "record {} has an amount out of range",
                self.id.short()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.kind.sign(),
            self.amount,
            self.category,
            self.summary
        )
    }
}
