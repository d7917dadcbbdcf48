//! Core business logic module
//!
//! This module contains the core registry components:
//! - `registry` - Load/add/query orchestration over all collections
//! - `tenant_store` - Tenant collection with duplicate rejection
//! - `landlord_store` - Landlord collection and per-landlord property lists
//! - `income_ledger` - Year-ordered rental income collection

pub mod income_ledger;
pub mod landlord_store;
pub mod registry;
pub mod tenant_store;

pub use income_ledger::IncomeLedger;
pub use landlord_store::LandlordStore;
pub use registry::Registry;
pub use tenant_store::TenantStore;
