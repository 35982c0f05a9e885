//! Scribe Ledger - a conversational bookkeeping ledger for the terminal
//!
//! Entries are written in plain language ("午饭吃了牛肉面 30 块"), turned
//! into structured records by a generative model, and stored in a single
//! local JSON file. A dashboard summarizes totals by category and asks the
//! model for a short narrative report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, records)
//! - `storage`: The ledger and its persistence slot
//! - `ai`: Generative model boundary, entry interpreter and report generator
//! - `reports`: Local aggregation
//! - `services`: Entry capture and dashboard assembly
//! - `display`: Terminal formatting
//! - `export`: CSV and JSON export
//! - `cli`: Command handlers
//! - `tui`: Interactive interface
//!
//! # Example
//!
//! ```rust,ignore
//! use scribe_ledger::config::{ScribePaths, Settings};
//! use scribe_ledger::storage::open_ledger;
//!
//! let paths = ScribePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let ledger = open_ledger(&paths)?;
//! ```

pub mod ai;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ScribeError;
