//! Rental income entity
//!
//! A yearly rental income declared by a landlord. The landlord is referenced
//! by its stable document id, resolved against the landlord store at use
//! time; the entity never holds a pointer or index into another collection.

use crate::types::error::RegistryError;
use crate::types::record::{DataEntry, EntryType};
use rust_decimal::Decimal;
use serde::Serialize;

/// A declared rental income
///
/// Parsed from a `RENTAL_INCOME` record: `RENTAL_INCOME;year;amount;landlord_id`
///
/// The `(year, landlord_id)` pair is the unique key within the income ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalIncome {
    /// Year the income was earned
    pub year: i32,

    /// Declared amount
    pub amount: Decimal,

    /// Id of the declaring landlord
    pub landlord_id: String,
}

impl RentalIncome {
    /// Parse a rental income from a `RENTAL_INCOME` record
    ///
    /// # Arguments
    ///
    /// * `entry` - The parsed record to convert
    ///
    /// # Returns
    ///
    /// * `Ok(RentalIncome)` on success
    /// * `Err(RegistryError::InvalidEntryType)` for a non-`RENTAL_INCOME` record
    /// * `Err(RegistryError::InvalidEntryFormat)` for a wrong field count
    ///   or a field that fails conversion
    pub fn parse(entry: &DataEntry) -> Result<Self, RegistryError> {
        entry.expect_format(EntryType::RentalIncome)?;

        Ok(RentalIncome {
            year: entry.field_int(0)?,
            amount: entry.field_decimal(1)?,
            landlord_id: entry.field_str(2)?.to_string(),
        })
    }

    /// Serialize back into the generic record form
    pub fn to_entry(&self) -> DataEntry {
        DataEntry::new(
            EntryType::RentalIncome,
            vec![
                self.year.to_string(),
                self.amount.to_string(),
                self.landlord_id.clone(),
            ],
        )
    }
}
