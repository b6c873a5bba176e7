//! Output rendering
//!
//! Renders the organizer's movement records as a bordered table, CSV, or
//! JSON. The scanner formats its own report lines (it streams), but shares
//! the format selector and the CSV quoting rules defined here.

mod csv;
mod json;
mod table;

use clap::ValueEnum;

// Re-export public functions
pub use csv::{csv_field, print_csv};
pub use json::print_json;
pub use table::print_table;

/// Output format selector shared by both subcommands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Bordered two-column table (scan: plain report lines)
    #[default]
    Table,
    /// Comma-separated values
    Csv,
    /// JSON
    Json,
}
