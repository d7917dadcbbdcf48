//! Landlord storage
//!
//! This module provides the LandlordStore component that maintains all
//! registered landlords and, within each landlord, the list of owned
//! properties. Landlords are keyed by document id; properties are keyed by
//! cadastral reference within their owning landlord's list.

use crate::types::{Landlord, Property, RegistryError};

/// Store of all registered landlords and their properties
///
/// Maintains insertion order. Lookup is a linear scan on landlord id,
/// first match wins. Property registration resolves the owning landlord by
/// the stable id carried in the property record, never by position.
#[derive(Debug, Default)]
pub struct LandlordStore {
    landlords: Vec<Landlord>,
}

impl LandlordStore {
    /// Create a new empty landlord store
    pub fn new() -> Self {
        LandlordStore {
            landlords: Vec::new(),
        }
    }

    /// Number of registered landlords
    pub fn len(&self) -> usize {
        self.landlords.len()
    }

    /// Whether the store holds no landlords
    pub fn is_empty(&self) -> bool {
        self.landlords.is_empty()
    }

    /// Find a landlord by id
    ///
    /// Linear scan for an exact id match.
    ///
    /// # Arguments
    ///
    /// * `id` - The landlord document id to look for
    ///
    /// # Returns
    ///
    /// * `Some(index)` of the first matching landlord
    /// * `None` if no landlord has that id
    pub fn find(&self, id: &str) -> Option<usize> {
        self.landlords.iter().position(|landlord| landlord.id == id)
    }

    /// Get a landlord by id
    pub fn get(&self, id: &str) -> Option<&Landlord> {
        self.find(id).map(|index| &self.landlords[index])
    }

    /// Add a landlord if its id is not registered yet
    ///
    /// # Arguments
    ///
    /// * `landlord` - The landlord to register
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the landlord was added
    /// * `Err(RegistryError::LandlordDuplicated)` if the id already exists;
    ///   the store is left unchanged and the rejected landlord is dropped
    pub fn add(&mut self, landlord: Landlord) -> Result<(), RegistryError> {
        if self.find(&landlord.id).is_some() {
            return Err(RegistryError::landlord_duplicated(&landlord.id));
        }

        self.landlords.push(landlord);
        Ok(())
    }

    /// Add a property to its owning landlord's list
    ///
    /// The owner is resolved through the landlord id carried by the
    /// property record.
    ///
    /// # Arguments
    ///
    /// * `property` - The property to register
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the property was added
    /// * `Err(RegistryError::LandlordNotFound)` if no landlord has the
    ///   referenced id
    /// * `Err(RegistryError::PropertyDuplicated)` if the landlord already
    ///   owns a property with the same cadastral reference
    pub fn add_property(&mut self, property: Property) -> Result<(), RegistryError> {
        let index = self
            .find(&property.landlord_id)
            .ok_or_else(|| RegistryError::landlord_not_found(&property.landlord_id))?;

        let landlord = &mut self.landlords[index];
        if landlord.find_property(&property.cadastral_ref).is_some() {
            return Err(RegistryError::property_duplicated(&property.cadastral_ref));
        }

        landlord.properties.push(property);
        Ok(())
    }

    /// Total number of properties across all landlords
    pub fn property_count(&self) -> usize {
        self.landlords
            .iter()
            .map(|landlord| landlord.properties.len())
            .sum()
    }

    /// Iterate over all landlords in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Landlord> {
        self.landlords.iter()
    }

    /// Iterate over all properties, landlord order then insertion order
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.landlords
            .iter()
            .flat_map(|landlord| landlord.properties.iter())
    }

    /// Remove all landlords and their properties
    pub fn clear(&mut self) {
        self.landlords.clear();
    }
}
