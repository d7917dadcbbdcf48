//! Generic record types for the Rental Registry
//!
//! This module defines the parsed form of one input record: a recognized
//! entry type tag plus the raw field strings, with indexed typed accessors
//! used by the entity parsers.

use crate::types::error::RegistryError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Date format used by all records (`DD/MM/YYYY`)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Record types supported by the registry
///
/// Each variant corresponds to one type tag in the input data and knows
/// the field count its records must carry after the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// A tenant with a lease on one property
    Tenant,

    /// A landlord owning zero or more properties
    Landlord,

    /// A property owned by a previously registered landlord
    Property,

    /// A yearly rental income declared by a previously registered landlord
    RentalIncome,
}

impl EntryType {
    /// Parse a type tag into an EntryType
    ///
    /// The match is exact and case-sensitive, as in the input format.
    ///
    /// # Arguments
    ///
    /// * `tag` - The first field of a record
    ///
    /// # Returns
    ///
    /// * `Ok(EntryType)` for a recognized tag
    /// * `Err(RegistryError::InvalidEntryType)` otherwise
    pub fn from_tag(tag: &str) -> Result<Self, RegistryError> {
        match tag {
            "TENANT" => Ok(EntryType::Tenant),
            "LANDLORD" => Ok(EntryType::Landlord),
            "PROPERTY" => Ok(EntryType::Property),
            "RENTAL_INCOME" => Ok(EntryType::RentalIncome),
            _ => Err(RegistryError::invalid_entry_type(tag)),
        }
    }

    /// The type tag written in the input format
    pub fn tag(&self) -> &'static str {
        match self {
            EntryType::Tenant => "TENANT",
            EntryType::Landlord => "LANDLORD",
            EntryType::Property => "PROPERTY",
            EntryType::RentalIncome => "RENTAL_INCOME",
        }
    }

    /// Number of fields a record of this type carries after the tag
    pub fn expected_fields(&self) -> usize {
        match self {
            EntryType::Tenant => 7,
            EntryType::Landlord => 3,
            EntryType::Property => 4,
            EntryType::RentalIncome => 3,
        }
    }
}

/// One parsed input record
///
/// Holds the recognized entry type and the raw field strings following the
/// tag. Fields are accessed by index through the typed accessors; an
/// out-of-range index or a failed conversion is reported as
/// `InvalidEntryFormat` rather than being undefined behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEntry {
    entry_type: EntryType,
    fields: Vec<String>,
}

impl DataEntry {
    /// Create a DataEntry from an entry type and its raw fields
    ///
    /// No field-count validation happens here; each add operation validates
    /// the count it expects (see [`DataEntry::expect_format`]).
    pub fn new(entry_type: EntryType, fields: Vec<String>) -> Self {
        DataEntry { entry_type, fields }
    }

    /// The entry type this record was tagged with
    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// Number of fields following the type tag
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// Validate that this record has the expected type and field count
    ///
    /// # Arguments
    ///
    /// * `expected` - The entry type the caller is prepared to handle
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the record matches
    /// * `Err(RegistryError::InvalidEntryType)` if the tag differs
    /// * `Err(RegistryError::InvalidEntryFormat)` if the field count differs
    pub fn expect_format(&self, expected: EntryType) -> Result<(), RegistryError> {
        if self.entry_type != expected {
            return Err(RegistryError::invalid_entry_type(self.entry_type.tag()));
        }

        if self.fields.len() != expected.expected_fields() {
            return Err(RegistryError::invalid_entry_format(format!(
                "{} record expects {} fields, got {}",
                expected.tag(),
                expected.expected_fields(),
                self.fields.len()
            )));
        }

        Ok(())
    }

    /// Get a field as a string slice
    ///
    /// # Arguments
    ///
    /// * `index` - Zero-based field index (the type tag is not a field)
    ///
    /// # Returns
    ///
    /// * `Ok(&str)` for an in-range index
    /// * `Err(RegistryError::InvalidEntryFormat)` for an out-of-range index
    pub fn field_str(&self, index: usize) -> Result<&str, RegistryError> {
        self.fields.get(index).map(String::as_str).ok_or_else(|| {
            RegistryError::invalid_entry_format(format!(
                "field index {} out of range ({} fields)",
                index,
                self.fields.len()
            ))
        })
    }

    /// Get a field as an integer
    pub fn field_int(&self, index: usize) -> Result<i32, RegistryError> {
        let raw = self.field_str(index)?;
        i32::from_str(raw).map_err(|_| {
            RegistryError::invalid_entry_format(format!(
                "field {}: invalid integer '{}'",
                index, raw
            ))
        })
    }

    /// Get a field as a decimal value
    pub fn field_decimal(&self, index: usize) -> Result<Decimal, RegistryError> {
        let raw = self.field_str(index)?;
        Decimal::from_str(raw).map_err(|_| {
            RegistryError::invalid_entry_format(format!(
                "field {}: invalid decimal '{}'",
                index, raw
            ))
        })
    }

    /// Get a field as a `DD/MM/YYYY` date
    pub fn field_date(&self, index: usize) -> Result<NaiveDate, RegistryError> {
        let raw = self.field_str(index)?;
        NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
            RegistryError::invalid_entry_format(format!("field {}: invalid date '{}'", index, raw))
        })
    }

    /// The raw fields following the type tag
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}
