//! Registry facade
//!
//! This module provides the Registry that orchestrates data loading by
//! coordinating the tenant store, the landlord store and the income ledger.
//!
//! The registry enforces the record contract on every add operation:
//! - Type tag and field count are validated before parsing (fail closed)
//! - Duplicate keys are rejected without mutating any collection
//! - Properties and rental incomes must resolve their landlord by id

use crate::core::income_ledger::IncomeLedger;
use crate::core::landlord_store::LandlordStore;
use crate::core::tenant_store::TenantStore;
use crate::io::EntryReader;
use crate::types::{
    DataEntry, EntryType, Landlord, Property, RegistryError, RentalIncome, Tenant,
};
use std::path::Path;

/// Registry version string reported by [`Registry::version`]
pub const VERSION: &str = concat!("rental-registry ", env!("CARGO_PKG_VERSION"));

/// Application data registry
///
/// Owns the three entity collections and exposes the load, add, count and
/// lookup operations. The registry is a plain mutable value owned by the
/// caller; all operations run to completion on the calling thread.
#[derive(Debug, Default)]
pub struct Registry {
    tenants: TenantStore,
    landlords: LandlordStore,
    incomes: IncomeLedger,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Registry {
            tenants: TenantStore::new(),
            landlords: LandlordStore::new(),
            incomes: IncomeLedger::new(),
        }
    }

    /// Registry version information
    pub fn version() -> &'static str {
        VERSION
    }

    /// Remove all loaded data, returning the registry to its initial state
    pub fn reset(&mut self) {
        self.tenants.clear();
        self.landlords.clear();
        self.incomes.clear();
    }

    /// Load records from a data file
    ///
    /// Streams the file record by record, dispatching each through
    /// [`Registry::add_entry`]. Loading is not transactional: the first
    /// malformed or conflicting record stops the load and every record added
    /// before it stays in the registry.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the semicolon-delimited data file
    /// * `reset` - When true, clear previously loaded data first
    ///
    /// # Returns
    ///
    /// * `Ok(())` if every record loaded
    /// * `Err(RegistryError::FileNotFound)` if the path does not exist
    /// * The first record or add error otherwise
    pub fn load_file(&mut self, path: &Path, reset: bool) -> Result<(), RegistryError> {
        if reset {
            self.reset();
        }

        let reader = EntryReader::new(path)?;
        for result in reader {
            let entry = result?;
            self.add_entry(&entry)?;
        }

        Ok(())
    }

    /// Add a single entry, dispatched by its type tag
    ///
    /// # Arguments
    ///
    /// * `entry` - The parsed record to add
    ///
    /// # Returns
    ///
    /// The result of the matching add operation
    pub fn add_entry(&mut self, entry: &DataEntry) -> Result<(), RegistryError> {
        match entry.entry_type() {
            EntryType::Tenant => self.add_tenant(entry),
            EntryType::Landlord => self.add_landlord(entry),
            EntryType::Property => self.add_property(entry),
            EntryType::RentalIncome => self.add_rental_income(entry),
        }
    }

    /// Add a tenant from a `TENANT` record
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the tenant was registered
    /// * `Err(RegistryError::InvalidEntryType)` / `InvalidEntryFormat` for a
    ///   record that fails validation
    /// * `Err(RegistryError::TenantDuplicated)` if the id already exists
    pub fn add_tenant(&mut self, entry: &DataEntry) -> Result<(), RegistryError> {
        let tenant = Tenant::parse(entry)?;
        self.tenants.add(tenant)
    }

    /// Add a landlord from a `LANDLORD` record
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the landlord was registered
    /// * `Err(RegistryError::InvalidEntryType)` / `InvalidEntryFormat` for a
    ///   record that fails validation
    /// * `Err(RegistryError::LandlordDuplicated)` if the id already exists
    pub fn add_landlord(&mut self, entry: &DataEntry) -> Result<(), RegistryError> {
        let landlord = Landlord::parse(entry)?;
        self.landlords.add(landlord)
    }

    /// Add a property from a `PROPERTY` record
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the property was registered under its landlord
    /// * `Err(RegistryError::InvalidEntryType)` / `InvalidEntryFormat` for a
    ///   record that fails validation
    /// * `Err(RegistryError::LandlordNotFound)` if the referenced landlord
    ///   is not registered
    /// * `Err(RegistryError::PropertyDuplicated)` if the landlord already
    ///   owns the cadastral reference
    pub fn add_property(&mut self, entry: &DataEntry) -> Result<(), RegistryError> {
        let property = Property::parse(entry)?;
        self.landlords.add_property(property)
    }

    /// Add a rental income from a `RENTAL_INCOME` record
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the income was declared
    /// * `Err(RegistryError::InvalidEntryType)` / `InvalidEntryFormat` for a
    ///   record that fails validation
    /// * `Err(RegistryError::LandlordNotFound)` if the referenced landlord
    ///   is not registered
    /// * `Err(RegistryError::RentalIncomeDuplicated)` if the `(year,
    ///   landlord)` pair is already declared
    pub fn add_rental_income(&mut self, entry: &DataEntry) -> Result<(), RegistryError> {
        let income = RentalIncome::parse(entry)?;

        if self.landlords.find(&income.landlord_id).is_none() {
            return Err(RegistryError::landlord_not_found(&income.landlord_id));
        }

        self.incomes.add(income)
    }

    /// Number of registered tenants
    pub fn tenant_count(&self) -> usize {
        self.tenants.len()
    }

    /// Number of registered landlords
    pub fn landlord_count(&self) -> usize {
        self.landlords.len()
    }

    /// Number of properties across all landlords
    pub fn property_count(&self) -> usize {
        self.landlords.property_count()
    }

    /// Number of declared rental incomes
    pub fn rental_income_count(&self) -> usize {
        self.incomes.len()
    }

    /// Get a landlord by id
    pub fn landlord(&self, id: &str) -> Result<&Landlord, RegistryError> {
        self.landlords
            .get(id)
            .ok_or_else(|| RegistryError::landlord_not_found(id))
    }

    /// Get a landlord by id, re-serialized into the generic record form
    pub fn landlord_entry(&self, id: &str) -> Result<DataEntry, RegistryError> {
        self.landlord(id).map(Landlord::to_entry)
    }

    /// Get a rental income by year and landlord id
    ///
    /// An unknown landlord reports `LandlordNotFound`; a registered landlord
    /// with no declaration for that year reports `RentalIncomeNotFound`.
    pub fn rental_income(&self, year: i32, id: &str) -> Result<&RentalIncome, RegistryError> {
        if self.landlords.find(id).is_none() {
            return Err(RegistryError::landlord_not_found(id));
        }

        self.incomes
            .get(year, id)
            .ok_or_else(|| RegistryError::rental_income_not_found(year, id))
    }

    /// Get a rental income, re-serialized into the generic record form
    pub fn rental_income_entry(&self, year: i32, id: &str) -> Result<DataEntry, RegistryError> {
        self.rental_income(year, id).map(RentalIncome::to_entry)
    }

    /// All registered properties, landlord order then insertion order
    pub fn properties(&self) -> Vec<&Property> {
        self.landlords.properties().collect()
    }

    /// All registered properties as generic records
    pub fn property_entries(&self) -> Vec<DataEntry> {
        self.landlords.properties().map(Property::to_entry).collect()
    }

    /// All declared rental incomes in ascending year order
    pub fn rental_incomes(&self) -> Vec<&RentalIncome> {
        self.incomes.iter().collect()
    }

    /// All declared rental incomes as generic records
    pub fn rental_income_entries(&self) -> Vec<DataEntry> {
        self.incomes.iter().map(RentalIncome::to_entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_entry;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn loaded(lines: &[&str]) -> Registry {
        let mut registry = Registry::new();
        for line in lines {
            registry.add_entry(&parse_entry(line).unwrap()).unwrap();
        }
        registry
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = Registry::new();
        assert_eq!(registry.tenant_count(), 0);
        assert_eq!(registry.landlord_count(), 0);
        assert_eq!(registry.property_count(), 0);
        assert_eq!(registry.rental_income_count(), 0);
    }

    #[test]
    fn test_version_reports_package_version() {
        assert!(Registry::version().starts_with("rental-registry "));
    }

    #[test]
    fn test_add_distinct_tenants_counts_each() {
        let registry = loaded(&[
            "TENANT;01/01/2023;31/12/2023;12345678A;Lucas;600.0;25;ABC1234",
            "TENANT;01/01/2024;31/12/2024;87654321B;Jason;750.0;30;ZYX1234",
            "TENANT;01/06/2024;31/08/2024;98765432J;Mary;888.25;32;QWE1234",
        ]);
        assert_eq!(registry.tenant_count(), 3);
    }

    #[test]
    fn test_duplicate_tenant_rejected_count_unchanged() {
        let mut registry = loaded(&[
            "TENANT;01/01/2023;31/12/2023;12345678A;Lucas;600.0;25;ABC1234",
        ]);

        let duplicate =
            parse_entry("TENANT;01/02/2023;28/02/2023;12345678A;Lucas;650.0;26;ZZZ9999").unwrap();
        let error = registry.add_entry(&duplicate).unwrap_err();

        assert_eq!(error, RegistryError::tenant_duplicated("12345678A"));
        assert_eq!(registry.tenant_count(), 1);
    }

    #[test]
    fn test_duplicate_landlord_rejected() {
        let mut registry = loaded(&["LANDLORD;John;87654321K;1200.0"]);

        let duplicate = parse_entry("LANDLORD;Johnny;87654321K;1500.0").unwrap();
        let error = registry.add_entry(&duplicate).unwrap_err();

        assert_eq!(error, RegistryError::landlord_duplicated("87654321K"));
        assert_eq!(registry.landlord_count(), 1);
    }

    #[test]
    fn test_property_with_unknown_landlord_rejected() {
        let mut registry = Registry::new();

        let entry = parse_entry("PROPERTY;ABC1234;Balmes;25;00000000X").unwrap();
        let error = registry.add_entry(&entry).unwrap_err();

        assert_eq!(error, RegistryError::landlord_not_found("00000000X"));
        assert_eq!(registry.property_count(), 0);
    }

    #[test]
    fn test_rental_income_with_unknown_landlord_rejected() {
        let mut registry = Registry::new();

        let entry = parse_entry("RENTAL_INCOME;2023;3500.00;00000000X").unwrap();
        let error = registry.add_entry(&entry).unwrap_err();

        assert_eq!(error, RegistryError::landlord_not_found("00000000X"));
        assert_eq!(registry.rental_income_count(), 0);
    }

    #[test]
    fn test_rental_income_round_trip() {
        let registry = loaded(&[
            "LANDLORD;John;87654321K;1200.0",
            "RENTAL_INCOME;2023;3500.00;87654321K",
        ]);

        let income = registry.rental_income(2023, "87654321K").unwrap();
        assert_eq!(income.amount, Decimal::new(350000, 2));

        let entry = registry.rental_income_entry(2023, "87654321K").unwrap();
        assert_eq!(entry.field_str(1).unwrap(), "3500.00");
    }

    #[test]
    fn test_rental_income_lookup_distinguishes_missing_cases() {
        let registry = loaded(&[
            "LANDLORD;John;87654321K;1200.0",
            "RENTAL_INCOME;2023;3500.00;87654321K",
        ]);

        // Known landlord, year not declared
        assert_eq!(
            registry.rental_income(2022, "87654321K").unwrap_err(),
            RegistryError::rental_income_not_found(2022, "87654321K")
        );

        // Unknown landlord
        assert_eq!(
            registry.rental_income(2023, "00000000X").unwrap_err(),
            RegistryError::landlord_not_found("00000000X")
        );
    }

    #[rstest]
    #[case::tenant_too_few_fields("TENANT;01/01/2023;31/12/2023;12345678A")]
    #[case::landlord_too_many_fields("LANDLORD;John;87654321K;1200.0;extra")]
    #[case::property_bad_number("PROPERTY;ABC1234;Balmes;25b;87654321K")]
    #[case::income_bad_year("RENTAL_INCOME;year;3500.00;87654321K")]
    fn test_add_entry_rejects_malformed_records(#[case] line: &str) {
        let mut registry = loaded(&["LANDLORD;John;87654321K;1200.0"]);
        let entry = parse_entry(line).unwrap();

        let error = registry.add_entry(&entry).unwrap_err();
        assert!(matches!(error, RegistryError::InvalidEntryFormat { .. }));
    }

    #[test]
    fn test_landlord_entry_reserializes_record() {
        let registry = loaded(&["LANDLORD;John;87654321K;1200.0"]);

        let entry = registry.landlord_entry("87654321K").unwrap();
        assert_eq!(entry.entry_type(), EntryType::Landlord);
        assert_eq!(entry.fields(), ["John", "87654321K", "1200.0"]);

        assert_eq!(
            registry.landlord_entry("00000000X").unwrap_err(),
            RegistryError::landlord_not_found("00000000X")
        );
    }

    #[test]
    fn test_property_entries_cover_all_landlords() {
        let registry = loaded(&[
            "LANDLORD;John;87654321K;1200.0",
            "LANDLORD;William;54927077H;1500.0",
            "PROPERTY;ABC1234;Balmes;25;87654321K",
            "PROPERTY;ZYX1234;Balmes;26;87654321K",
            "PROPERTY;QWE1234;Turing;99;54927077H",
        ]);

        let entries = registry.property_entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].field_str(0).unwrap(), "ABC1234");
        assert_eq!(entries[2].field_str(0).unwrap(), "QWE1234");
    }

    #[test]
    fn test_rental_income_entries_in_year_order() {
        let registry = loaded(&[
            "LANDLORD;John;87654321K;1200.0",
            "LANDLORD;William;54927077H;1500.0",
            "RENTAL_INCOME;2025;3500.99;54927077H",
            "RENTAL_INCOME;2023;3500.00;87654321K",
            "RENTAL_INCOME;2024;8800.55;87654321K",
        ]);

        let years: Vec<i32> = registry
            .rental_incomes()
            .iter()
            .map(|income| income.year)
            .collect();
        assert_eq!(years, [2023, 2024, 2025]);
    }

    #[test]
    fn test_reset_clears_all_collections() {
        let mut registry = loaded(&[
            "TENANT;01/01/2023;31/12/2023;12345678A;Lucas;600.0;25;ABC1234",
            "LANDLORD;John;87654321K;1200.0",
            "PROPERTY;ABC1234;Balmes;25;87654321K",
            "RENTAL_INCOME;2023;3500.00;87654321K",
        ]);

        registry.reset();

        assert_eq!(registry.tenant_count(), 0);
        assert_eq!(registry.landlord_count(), 0);
        assert_eq!(registry.property_count(), 0);
        assert_eq!(registry.rental_income_count(), 0);
    }

    #[test]
    fn test_load_file_missing_path_reports_file_not_found() {
        let mut registry = Registry::new();
        let error = registry
            .load_file(Path::new("no_such_file.csv"), true)
            .unwrap_err();
        assert!(matches!(error, RegistryError::FileNotFound { .. }));
    }
}
