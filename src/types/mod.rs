//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: Generic record types (entry tags, typed field access)
//! - `tenant`: Tenant entity
//! - `landlord`: Landlord and property entities
//! - `rental_income`: Rental income entity
//! - `error`: Error types for the rental registry

pub mod error;
pub mod landlord;
pub mod record;
pub mod rental_income;
pub mod tenant;

pub use error::RegistryError;
pub use landlord::{Landlord, Property};
pub use record::{DataEntry, EntryType, DATE_FORMAT};
pub use rental_income::RentalIncome;
pub use tenant::Tenant;
