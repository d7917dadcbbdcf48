//! Streaming record reader with iterator interface
//!
//! Provides a streaming iterator over registry entries from a data file.
//! Delegates record format concerns to the record_format module.
//!
//! # Design
//!
//! The EntryReader uses csv::Reader configured for the semicolon-delimited
//! record format to read raw records sequentially, converting each to a
//! [`DataEntry`]. It maintains streaming behavior by processing one record at
//! a time without loading the entire file into memory, so line length is
//! bounded only by available memory, not by a fixed read buffer.
//!
//! # Iterator Interface
//!
//! EntryReader implements the Iterator trait, yielding
//! `Result<DataEntry, RegistryError>` for each record line:
//!
//! ```no_run
//! use rental_registry::io::entry_reader::EntryReader;
//! use std::path::Path;
//!
//! let reader = EntryReader::new(Path::new("data.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(entry) => println!("Read entry: {:?}", entry),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record errors are yielded as Err variants in the iterator
//! - Line numbers are attached to format errors for debugging

use crate::io::record_format::{convert_record, DELIMITER};
use crate::types::{DataEntry, RegistryError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming reader over registry record files
///
/// Yields one `DataEntry` per non-blank line. Blank lines are skipped by the
/// underlying CSV reader, so trailing newlines in data files are harmless.
#[derive(Debug)]
pub struct EntryReader {
    reader: csv::Reader<File>,
}

impl EntryReader {
    /// Create a new EntryReader from a file path
    ///
    /// Opens the data file and prepares it for streaming iteration.
    /// The CSV reader is configured to:
    /// - Split fields on `;`
    /// - Treat every line as data (no header row)
    /// - Trim whitespace from all fields
    /// - Allow per-type field counts (flexible records)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the data file
    ///
    /// # Returns
    ///
    /// * `Ok(EntryReader)` if the file opened successfully
    /// * `Err(RegistryError::FileNotFound)` if the path does not exist
    /// * `Err(RegistryError::IoError)` for any other open failure
    pub fn new(path: &Path) -> Result<Self, RegistryError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RegistryError::file_not_found(&path.display().to_string())
            } else {
                RegistryError::from(e)
            }
        })?;

        let reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self { reader })
    }
}

impl Iterator for EntryReader {
    type Item = Result<DataEntry, RegistryError>;

    /// Get the next entry from the data file
    ///
    /// This method:
    /// 1. Reads the next raw record
    /// 2. Converts it to a DataEntry via record_format::convert_record
    /// 3. Attaches the source line number to format errors
    ///
    /// # Returns
    ///
    /// * `Some(Ok(DataEntry))` - Successfully parsed entry
    /// * `Some(Err(RegistryError))` - Read or conversion error
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut records = self.reader.records();

        match records.next()? {
            Ok(record) => {
                let line = record.position().map(|pos| pos.line());

                Some(convert_record(&record).map_err(|e| match e {
                    // Format errors gain the source line for context
                    RegistryError::InvalidEntryFormat { line: None, message } => {
                        RegistryError::InvalidEntryFormat { line, message }
                    }
                    other => other,
                }))
            }
            Err(e) => Some(Err(RegistryError::from(e))),
        }
    }
}
