//! Display formatting for terminal output

pub mod transaction;

pub use transaction::{
    category_initial, format_archive, format_recent, format_transaction_details,
    format_transaction_row, plain_report, truncate,
};
