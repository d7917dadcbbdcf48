//! Landlord and property entities
//!
//! A landlord owns a list of properties. Properties are registered against
//! an existing landlord and are keyed by cadastral reference within that
//! landlord's list.

use crate::types::error::RegistryError;
use crate::types::record::{DataEntry, EntryType};
use rust_decimal::Decimal;
use serde::Serialize;

/// A registered landlord
///
/// Parsed from a `LANDLORD` record: `LANDLORD;name;id;rent_baseline`
///
/// The landlord id is the unique key within the landlord store. The property
/// list starts empty and grows as `PROPERTY` records referencing this
/// landlord are added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Landlord {
    /// Landlord full name
    pub name: String,

    /// Unique landlord document id
    pub id: String,

    /// Tax-reference rent baseline
    pub rent_baseline: Decimal,

    /// Properties owned by this landlord
    pub properties: Vec<Property>,
}

impl Landlord {
    /// Parse a landlord from a `LANDLORD` record
    ///
    /// # Arguments
    ///
    /// * `entry` - The parsed record to convert
    ///
    /// # Returns
    ///
    /// * `Ok(Landlord)` with an empty property list on success
    /// * `Err(RegistryError::InvalidEntryType)` for a non-`LANDLORD` record
    /// * `Err(RegistryError::InvalidEntryFormat)` for a wrong field count
    ///   or a field that fails conversion
    pub fn parse(entry: &DataEntry) -> Result<Self, RegistryError> {
        entry.expect_format(EntryType::Landlord)?;

        Ok(Landlord {
            name: entry.field_str(0)?.to_string(),
            id: entry.field_str(1)?.to_string(),
            rent_baseline: entry.field_decimal(2)?,
            properties: Vec::new(),
        })
    }

    /// Serialize back into the generic record form
    ///
    /// Only the landlord's own fields are emitted; properties are exported
    /// through their own `PROPERTY` records.
    pub fn to_entry(&self) -> DataEntry {
        DataEntry::new(
            EntryType::Landlord,
            vec![
                self.name.clone(),
                self.id.clone(),
                self.rent_baseline.to_string(),
            ],
        )
    }

    /// Find a property by cadastral reference within this landlord's list
    ///
    /// Linear scan, first match wins.
    ///
    /// # Returns
    ///
    /// * `Some(index)` of the property if it exists
    /// * `None` otherwise
    pub fn find_property(&self, cadastral_ref: &str) -> Option<usize> {
        self.properties
            .iter()
            .position(|property| property.cadastral_ref == cadastral_ref)
    }
}

/// A property owned by a landlord
///
/// Parsed from a `PROPERTY` record:
/// `PROPERTY;cadastral_ref;street;number;landlord_id`
///
/// The cadastral reference is unique within the owning landlord's property
/// list. The landlord id is a back-reference resolved at registration time;
/// no ownership is implied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    /// Unique cadastral reference within the landlord's list
    pub cadastral_ref: String,

    /// Street name
    pub street: String,

    /// Street number
    pub number: i32,

    /// Id of the owning landlord
    pub landlord_id: String,
}

impl Property {
    /// Parse a property from a `PROPERTY` record
    ///
    /// # Arguments
    ///
    /// * `entry` - The parsed record to convert
    ///
    /// # Returns
    ///
    /// * `Ok(Property)` on success
    /// * `Err(RegistryError::InvalidEntryType)` for a non-`PROPERTY` record
    /// * `Err(RegistryError::InvalidEntryFormat)` for a wrong field count
    ///   or a field that fails conversion
    pub fn parse(entry: &DataEntry) -> Result<Self, RegistryError> {
        entry.expect_format(EntryType::Property)?;

        Ok(Property {
            cadastral_ref: entry.field_str(0)?.to_string(),
            street: entry.field_str(1)?.to_string(),
            number: entry.field_int(2)?,
            landlord_id: entry.field_str(3)?.to_string(),
        })
    }

    /// Serialize back into the generic record form
    pub fn to_entry(&self) -> DataEntry {
        DataEntry::new(
            EntryType::Property,
            vec![
                self.cadastral_ref.clone(),
                self.street.clone(),
                self.number.to_string(),
                self.landlord_id.clone(),
            ],
        )
    }
}
