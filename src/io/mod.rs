//! I/O module
//!
//! Handles record parsing and output.
//!
//! # Components
//!
//! - `record_format` - Record format handling (line parsing, output serialization)
//! - `entry_reader` - Streaming record reader with iterator interface

pub mod entry_reader;
pub mod record_format;

pub use entry_reader::EntryReader;
pub use record_format::{convert_record, parse_entry, write_entries};
