//! Tenant storage
//!
//! This module provides the TenantStore component that maintains all
//! registered tenants. Tenants are keyed by their document id; the store
//! rejects duplicate ids and answers lookups with a linear scan.

use crate::types::{RegistryError, Tenant};

/// Store of all registered tenants
///
/// Maintains insertion order. Lookup is a linear scan on tenant id,
/// first match wins.
#[derive(Debug, Default)]
pub struct TenantStore {
    tenants: Vec<Tenant>,
}

impl TenantStore {
    /// Create a new empty tenant store
    pub fn new() -> Self {
        TenantStore {
            tenants: Vec::new(),
        }
    }

    /// Number of registered tenants
    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    /// Whether the store holds no tenants
    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    /// Find a tenant by id
    ///
    /// Linear scan for an exact id match.
    ///
    /// # Arguments
    ///
    /// * `tenant_id` - The tenant document id to look for
    ///
    /// # Returns
    ///
    /// * `Some(index)` of the first matching tenant
    /// * `None` if no tenant has that id
    pub fn find(&self, tenant_id: &str) -> Option<usize> {
        self.tenants
            .iter()
            .position(|tenant| tenant.tenant_id == tenant_id)
    }

    /// Get a tenant by id
    pub fn get(&self, tenant_id: &str) -> Option<&Tenant> {
        self.find(tenant_id).map(|index| &self.tenants[index])
    }

    /// Add a tenant if its id is not registered yet
    ///
    /// # Arguments
    ///
    /// * `tenant` - The tenant to register
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the tenant was added
    /// * `Err(RegistryError::TenantDuplicated)` if the id already exists;
    ///   the store is left unchanged and the rejected tenant is dropped
    pub fn add(&mut self, tenant: Tenant) -> Result<(), RegistryError> {
        if self.find(&tenant.tenant_id).is_some() {
            return Err(RegistryError::tenant_duplicated(&tenant.tenant_id));
        }

        self.tenants.push(tenant);
        Ok(())
    }

    /// Iterate over all tenants in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Tenant> {
        self.tenants.iter()
    }

    /// Remove all tenants
    pub fn clear(&mut self) {
        self.tenants.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_entry;

    fn tenant(id: &str) -> Tenant {
        let line = format!(
            "TENANT;01/01/2023;31/12/2023;{};Lucas;600.0;25;ABC1234",
            id
        );
        Tenant::parse(&parse_entry(&line).unwrap()).unwrap()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = TenantStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_distinct_tenants_counts_each() {
        let mut store = TenantStore::new();

        for (n, id) in ["12345678A", "87654321B", "98765432J"].iter().enumerate() {
            store.add(tenant(id)).unwrap();
            assert_eq!(store.len(), n + 1);
        }
    }

    #[test]
    fn test_add_duplicate_id_rejected_and_count_unchanged() {
        let mut store = TenantStore::new();
        store.add(tenant("12345678A")).unwrap();

        let error = store.add(tenant("12345678A")).unwrap_err();
        assert_eq!(error, RegistryError::tenant_duplicated("12345678A"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_find_returns_first_match_position() {
        let mut store = TenantStore::new();
        store.add(tenant("12345678A")).unwrap();
        store.add(tenant("87654321B")).unwrap();

        assert_eq!(store.find("12345678A"), Some(0));
        assert_eq!(store.find("87654321B"), Some(1));
        assert_eq!(store.find("00000000X"), None);
    }

    #[test]
    fn test_get_returns_tenant_data() {
        let mut store = TenantStore::new();
        store.add(tenant("12345678A")).unwrap();

        let found = store.get("12345678A").unwrap();
        assert_eq!(found.name, "Lucas");
        assert!(store.get("00000000X").is_none());
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut store = TenantStore::new();
        store.add(tenant("12345678A")).unwrap();
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.find("12345678A"), None);
    }
}
