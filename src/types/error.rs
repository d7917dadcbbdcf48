//! Error types for the Rental Registry
//!
//! This module defines all error types that can occur while loading and
//! querying registry data. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Record Errors**: Unrecognized type tags, wrong field counts, bad field values
//! - **Registry Errors**: Duplicate keys, unresolved landlord references, missing entries

use thiserror::Error;

/// Main error type for the rental registry
///
/// This enum represents all possible errors that can occur while parsing
/// records, loading data files, and answering queries. Each variant includes
/// relevant context to help diagnose and resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents loading from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading a data file
    ///
    /// Typically file permissions, disk failures, or a read interrupted
    /// mid-stream.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Record carries an unrecognized type tag
    ///
    /// Only `TENANT`, `LANDLORD`, `PROPERTY` and `RENTAL_INCOME` are valid
    /// tags; the match is exact and case-sensitive.
    #[error("Invalid entry type '{tag}'")]
    InvalidEntryType {
        /// The unrecognized tag string
        tag: String,
    },

    /// Record is structurally invalid for its type
    ///
    /// Wrong field count, an out-of-range field index, or a field value
    /// that failed conversion (date, integer, decimal).
    #[error("Invalid entry format{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidEntryFormat {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the format problem
        message: String,
    },

    /// A tenant with the same id is already registered
    ///
    /// Tenant ids are unique across the registry. The offending record is
    /// rejected and the registry is left unchanged.
    #[error("Tenant '{tenant_id}' is already registered")]
    TenantDuplicated {
        /// Tenant id that already exists
        tenant_id: String,
    },

    /// A landlord with the same id is already registered
    ///
    /// Landlord ids are unique across the registry. The offending record is
    /// rejected and the registry is left unchanged.
    #[error("Landlord '{id}' is already registered")]
    LandlordDuplicated {
        /// Landlord id that already exists
        id: String,
    },

    /// No landlord registered under the referenced id
    ///
    /// Properties and rental incomes must reference a landlord that was
    /// registered earlier in the data stream.
    #[error("Landlord '{id}' not found")]
    LandlordNotFound {
        /// Landlord id that could not be resolved
        id: String,
    },

    /// The landlord already owns a property with this cadastral reference
    ///
    /// Cadastral references are unique within a single landlord's property
    /// list. The offending record is rejected.
    #[error("Property '{cadastral_ref}' is already registered for its landlord")]
    PropertyDuplicated {
        /// Cadastral reference that already exists
        cadastral_ref: String,
    },

    /// A rental income for this (year, landlord) pair is already registered
    ///
    /// Each landlord declares at most one rental income per year.
    #[error("Rental income for year {year} and landlord '{landlord_id}' is already registered")]
    RentalIncomeDuplicated {
        /// Declared year
        year: i32,
        /// Landlord id
        landlord_id: String,
    },

    /// No rental income registered for this (year, landlord) pair
    #[error("No rental income for year {year} and landlord '{landlord_id}'")]
    RentalIncomeNotFound {
        /// Requested year
        year: i32,
        /// Landlord id
        landlord_id: String,
    },
}

// Conversion from io::Error to RegistryError
impl From<std::io::Error> for RegistryError {
    fn from(error: std::io::Error) -> Self {
        RegistryError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to RegistryError
impl From<csv::Error> for RegistryError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        RegistryError::InvalidEntryFormat {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl RegistryError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        RegistryError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create an InvalidEntryType error
    pub fn invalid_entry_type(tag: &str) -> Self {
        RegistryError::InvalidEntryType {
            tag: tag.to_string(),
        }
    }

    /// Create an InvalidEntryFormat error without line context
    pub fn invalid_entry_format(message: impl Into<String>) -> Self {
        RegistryError::InvalidEntryFormat {
            line: None,
            message: message.into(),
        }
    }

    /// Create a TenantDuplicated error
    pub fn tenant_duplicated(tenant_id: &str) -> Self {
        RegistryError::TenantDuplicated {
            tenant_id: tenant_id.to_string(),
        }
    }

    /// Create a LandlordDuplicated error
    pub fn landlord_duplicated(id: &str) -> Self {
        RegistryError::LandlordDuplicated { id: id.to_string() }
    }

    /// Create a LandlordNotFound error
    pub fn landlord_not_found(id: &str) -> Self {
        RegistryError::LandlordNotFound { id: id.to_string() }
    }

    /// Create a PropertyDuplicated error
    pub fn property_duplicated(cadastral_ref: &str) -> Self {
        RegistryError::PropertyDuplicated {
            cadastral_ref: cadastral_ref.to_string(),
        }
    }

    /// Create a RentalIncomeDuplicated error
    pub fn rental_income_duplicated(year: i32, landlord_id: &str) -> Self {
        RegistryError::RentalIncomeDuplicated {
            year,
            landlord_id: landlord_id.to_string(),
        }
    }

    /// Create a RentalIncomeNotFound error
    pub fn rental_income_not_found(year: i32, landlord_id: &str) -> Self {
        RegistryError::RentalIncomeNotFound {
            year,
            landlord_id: landlord_id.to_string(),
        }
    }
}
