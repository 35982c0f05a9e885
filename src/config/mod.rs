//! Configuration module for scribe-ledger
//!
//! This module provides configuration management including:
//! - Platform config directory resolution
//! - User settings persistence
//! - The explicit AI service configuration

pub mod paths;
pub mod settings;

pub use paths::ScribePaths;
pub use settings::{AiConfig, Settings};
