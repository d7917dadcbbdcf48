//! Record format handling for registry input and output
//!
//! This module centralizes the semicolon-delimited record format concerns,
//! providing:
//! - Conversion from raw CSV records to [`DataEntry`]
//! - Parsing of a single text line
//! - Serialization of entries back to the record form
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{DataEntry, EntryType, RegistryError};
use csv::StringRecord;
use std::io::Write;

/// Field delimiter used by the record format
pub const DELIMITER: u8 = b';';

/// Convert a raw CSV record into a DataEntry
///
/// The first field is the type tag; the remaining fields are kept as raw
/// strings. Field-count validation happens later, in the add operation that
/// consumes the entry, mirroring the per-operation format checks of the
/// record contract.
///
/// # Arguments
///
/// * `record` - The raw record, tag included
///
/// # Returns
///
/// * `Ok(DataEntry)` for a recognized type tag
/// * `Err(RegistryError::InvalidEntryType)` for an unrecognized tag
/// * `Err(RegistryError::InvalidEntryFormat)` for a record with no fields
pub fn convert_record(record: &StringRecord) -> Result<DataEntry, RegistryError> {
    let mut fields = record.iter();

    let tag = fields
        .next()
        .ok_or_else(|| RegistryError::invalid_entry_format("empty record"))?;
    let entry_type = EntryType::from_tag(tag)?;

    Ok(DataEntry::new(
        entry_type,
        fields.map(|field| field.to_string()).collect(),
    ))
}

/// Parse one text line into a DataEntry
///
/// Runs the line through the CSV reader configured for the record format
/// (semicolon delimiter, no headers, trimmed fields), then converts it.
///
/// # Arguments
///
/// * `line` - One record line, without the trailing newline
///
/// # Returns
///
/// * `Ok(DataEntry)` on success
/// * `Err(RegistryError::InvalidEntryFormat)` for a blank or malformed line
/// * `Err(RegistryError::InvalidEntryType)` for an unrecognized type tag
pub fn parse_entry(line: &str) -> Result<DataEntry, RegistryError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    let record = reader
        .records()
        .next()
        .ok_or_else(|| RegistryError::invalid_entry_format("empty record"))??;

    convert_record(&record)
}

/// Write entries out in the record form
///
/// Each entry becomes one semicolon-delimited line: the type tag followed by
/// the raw fields, in input order.
///
/// # Arguments
///
/// * `entries` - Entries to write
/// * `output` - Writer receiving the record lines
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(RegistryError::IoError)` if a write error occurred
pub fn write_entries(entries: &[DataEntry], output: &mut dyn Write) -> Result<(), RegistryError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .flexible(true)
        .from_writer(output);

    for entry in entries {
        let mut record = StringRecord::new();
        record.push_field(entry.entry_type().tag());
        for field in entry.fields() {
            record.push_field(field);
        }

        writer.write_record(&record).map_err(|e| RegistryError::IoError {
            message: format!("Failed to write record: {}", e),
        })?;
    }

    writer.flush().map_err(|e| RegistryError::IoError {
        message: format!("Failed to flush output: {}", e),
    })?;

    Ok(())
}
