use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Load rental taxation records and answer registry queries
#[derive(Parser, Debug)]
#[command(name = "rental-registry")]
#[command(about = "Load rental taxation records and answer registry queries", long_about = None)]
pub struct CliArgs {
    /// Input data file with semicolon-delimited records
    #[arg(value_name = "INPUT", help = "Path to the input data file")]
    pub input_file: PathBuf,

    /// Record set to export instead of printing the count summary
    #[arg(
        long = "export",
        value_name = "SET",
        conflicts_with = "landlord",
        help = "Export a record set: 'properties' or 'incomes'"
    )]
    pub export: Option<ExportSet>,

    /// Print a single landlord record by document id
    #[arg(
        long = "landlord",
        value_name = "ID",
        help = "Print the landlord registered under the given id"
    )]
    pub landlord: Option<String>,

    /// Output format for exports and lookups
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "records",
        help = "Output format: 'records' for record lines or 'json'"
    )]
    pub format: OutputFormat,
}

/// Record sets available for export
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportSet {
    /// All registered properties
    Properties,
    /// All declared rental incomes
    Incomes,
}

/// Output formats for exports and lookups
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Semicolon-delimited record lines, as in the input format
    Records,
    /// JSON array (or object for single lookups)
    Json,
}
