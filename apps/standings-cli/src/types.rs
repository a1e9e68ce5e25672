//! Shared types for the standings tool.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns
    Table,
    Json,
    Csv,
}
