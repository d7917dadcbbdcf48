//! Rental Registry CLI
//!
//! Command-line interface for loading rental taxation records and answering
//! registry queries.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data.csv
//! cargo run -- --export properties data.csv
//! cargo run -- --export incomes --format json data.csv
//! cargo run -- --landlord 87654321K data.csv
//! ```
//!
//! The program loads the input data file into an in-memory registry and then
//! either prints the count summary (default), exports a record set, or looks
//! up a single landlord.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, malformed record, etc.)

use rental_registry::cli::{self, CliArgs, ExportSet, OutputFormat};
use rental_registry::io::write_entries;
use rental_registry::types::RegistryError;
use rental_registry::Registry;
use std::io::Write;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Load the input file and produce the requested output
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
/// * `output` - Writer receiving the summary, export or lookup result
///
/// # Returns
///
/// * `Ok(())` on success
/// * The first load or query error otherwise
fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), RegistryError> {
    let mut registry = Registry::new();
    registry.load_file(&args.input_file, true)?;

    if let Some(id) = &args.landlord {
        return print_landlord(&registry, id, args.format, output);
    }

    if let Some(set) = args.export {
        return print_export(&registry, set, args.format, output);
    }

    print_summary(&registry, output)
}

/// Print the count summary for a loaded registry
fn print_summary(registry: &Registry, output: &mut dyn Write) -> Result<(), RegistryError> {
    writeln!(output, "tenants: {}", registry.tenant_count())?;
    writeln!(output, "landlords: {}", registry.landlord_count())?;
    writeln!(output, "properties: {}", registry.property_count())?;
    writeln!(output, "rental incomes: {}", registry.rental_income_count())?;
    Ok(())
}

/// Print a single landlord in the requested format
fn print_landlord(
    registry: &Registry,
    id: &str,
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), RegistryError> {
    match format {
        OutputFormat::Records => {
            let entry = registry.landlord_entry(id)?;
            write_entries(&[entry], output)
        }
        OutputFormat::Json => {
            let landlord = registry.landlord(id)?;
            write_json(&landlord, output)
        }
    }
}

/// Print an exported record set in the requested format
fn print_export(
    registry: &Registry,
    set: ExportSet,
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), RegistryError> {
    match (set, format) {
        (ExportSet::Properties, OutputFormat::Records) => {
            write_entries(&registry.property_entries(), output)
        }
        (ExportSet::Incomes, OutputFormat::Records) => {
            write_entries(&registry.rental_income_entries(), output)
        }
        (ExportSet::Properties, OutputFormat::Json) => {
            write_json(&registry.properties(), output)
        }
        (ExportSet::Incomes, OutputFormat::Json) => {
            write_json(&registry.rental_incomes(), output)
        }
    }
}

/// Serialize a value as pretty-printed JSON followed by a newline
fn write_json<T: serde::Serialize>(
    value: &T,
    output: &mut dyn Write,
) -> Result<(), RegistryError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| RegistryError::IoError {
        message: format!("Failed to serialize JSON: {}", e),
    })?;
    writeln!(output, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn data_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn run_with_args(extra: &[&str], content: &str) -> Result<String, RegistryError> {
        let file = data_file(content);
        let path = file.path().to_str().unwrap().to_string();

        let mut argv = vec!["program"];
        argv.extend_from_slice(extra);
        argv.push(&path);
        let args = CliArgs::try_parse_from(argv).unwrap();

        let mut output = Vec::new();
        run(&args, &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    const SAMPLE: &str = "LANDLORD;John;87654321K;1200.0\n\
        PROPERTY;ABC1234;Balmes;25;87654321K\n\
        RENTAL_INCOME;2023;3500.00;87654321K\n";

    #[test]
    fn test_run_prints_summary() {
        let output = run_with_args(&[], SAMPLE).unwrap();
        assert_eq!(
            output,
            "tenants: 0\nlandlords: 1\nproperties: 1\nrental incomes: 1\n"
        );
    }

    #[test]
    fn test_run_exports_properties_as_records() {
        let output = run_with_args(&["--export", "properties"], SAMPLE).unwrap();
        assert_eq!(output, "PROPERTY;ABC1234;Balmes;25;87654321K\n");
    }

    #[test]
    fn test_run_exports_incomes_as_json() {
        let output =
            run_with_args(&["--export", "incomes", "--format", "json"], SAMPLE).unwrap();
        assert!(output.contains("\"year\": 2023"));
        assert!(output.contains("\"landlord_id\": \"87654321K\""));
    }

    #[test]
    fn test_run_prints_single_landlord() {
        let output = run_with_args(&["--landlord", "87654321K"], SAMPLE).unwrap();
        assert_eq!(output, "LANDLORD;John;87654321K;1200.0\n");
    }

    #[test]
    fn test_run_reports_unknown_landlord() {
        let error = run_with_args(&["--landlord", "00000000X"], SAMPLE).unwrap_err();
        assert_eq!(error, RegistryError::landlord_not_found("00000000X"));
    }

    #[test]
    fn test_run_propagates_load_errors() {
        let error = run_with_args(&[], "FOO;1;2\n").unwrap_err();
        assert_eq!(error, RegistryError::invalid_entry_type("FOO"));
    }
}
