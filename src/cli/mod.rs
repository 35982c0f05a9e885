//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod archive;
pub mod dashboard;
pub mod entry;

pub use archive::{handle_archive_command, handle_clear_command, handle_export_command, ExportFormat};
pub use dashboard::handle_dashboard_command;
pub use entry::{handle_add_command, handle_recent_command};
