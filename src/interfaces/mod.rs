use clap::ValueEnum;

pub mod cli;
pub mod csv;

/// Encoding used when writing checkout reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}
