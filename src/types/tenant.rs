//! Tenant entity
//!
//! A tenant holds a lease on one property, identified by a cadastral
//! reference, for a date-bounded period.

use crate::types::error::RegistryError;
use crate::types::record::{DataEntry, EntryType, DATE_FORMAT};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// A registered tenant
///
/// Parsed from a `TENANT` record:
/// `TENANT;start_date;end_date;tenant_id;name;rent;age;cadastral_ref`
///
/// The tenant id is the unique key within the tenant store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tenant {
    /// Lease start date
    pub lease_start: NaiveDate,

    /// Lease end date
    pub lease_end: NaiveDate,

    /// Unique tenant document id
    pub tenant_id: String,

    /// Tenant full name
    pub name: String,

    /// Monthly rent
    pub rent: Decimal,

    /// Tenant age in years
    pub age: i32,

    /// Cadastral reference of the leased property
    pub cadastral_ref: String,
}

impl Tenant {
    /// Parse a tenant from a `TENANT` record
    ///
    /// Validates the type tag and field count first, then converts each
    /// field. Rents can carry fractional amounts, so the rent field is
    /// parsed as a decimal.
    ///
    /// # Arguments
    ///
    /// * `entry` - The parsed record to convert
    ///
    /// # Returns
    ///
    /// * `Ok(Tenant)` on success
    /// * `Err(RegistryError::InvalidEntryType)` for a non-`TENANT` record
    /// * `Err(RegistryError::InvalidEntryFormat)` for a wrong field count
    ///   or a field that fails conversion
    pub fn parse(entry: &DataEntry) -> Result<Self, RegistryError> {
        entry.expect_format(EntryType::Tenant)?;

        Ok(Tenant {
            lease_start: entry.field_date(0)?,
            lease_end: entry.field_date(1)?,
            tenant_id: entry.field_str(2)?.to_string(),
            name: entry.field_str(3)?.to_string(),
            rent: entry.field_decimal(4)?,
            age: entry.field_int(5)?,
            cadastral_ref: entry.field_str(6)?.to_string(),
        })
    }

    /// Serialize back into the generic record form
    ///
    /// Field order matches the input format, so a parsed tenant re-serializes
    /// to an equivalent record.
    pub fn to_entry(&self) -> DataEntry {
        DataEntry::new(
            EntryType::Tenant,
            vec![
                self.lease_start.format(DATE_FORMAT).to_string(),
                self.lease_end.format(DATE_FORMAT).to_string(),
                self.tenant_id.clone(),
                self.name.clone(),
                self.rent.to_string(),
                self.age.to_string(),
                self.cadastral_ref.clone(),
            ],
        )
    }
}
