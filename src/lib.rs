//! Rental Registry Library
//! # Overview
//!
//! This library provides a record registry for rental-market taxation data:
//! tenants, landlords, properties and yearly rental incomes, loaded from
//! semicolon-delimited data files.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (entries, entities, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::registry`] - Load/add/query orchestration
//!   - [`core::tenant_store`] - Tenant collection
//!   - [`core::landlord_store`] - Landlord collection and property lists
//!   - [`core::income_ledger`] - Year-ordered rental income collection
//! - [`io`] - Record format handling and streaming file reading
//!
//! # Record Types
//!
//! The registry supports four record types:
//!
//! - **TENANT**: a tenant leasing one property for a date-bounded period
//! - **LANDLORD**: a landlord with a tax-reference rent baseline
//! - **PROPERTY**: a property registered against an existing landlord
//! - **RENTAL_INCOME**: a yearly income declared by an existing landlord
//!
//! # Loading Semantics
//!
//! Records are validated and added one at a time, in file order. Duplicate
//! keys and unresolved landlord references are rejected. Loading is
//! fail-fast and not transactional: the first bad record stops the load and
//! earlier records stay in the registry.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{IncomeLedger, LandlordStore, Registry, TenantStore};
pub use io::{parse_entry, write_entries, EntryReader};
pub use types::{
    DataEntry, EntryType, Landlord, Property, RegistryError, RentalIncome, Tenant,
};
