//! Rental income ledger
//!
//! This module provides the IncomeLedger component that maintains all
//! declared rental incomes in ascending year order. Incomes are keyed by
//! the `(year, landlord id)` pair.
//!
//! Lookup and insertion are separate operations: `find` is a plain scan,
//! `add` inserts at the year-ordered position.

use crate::types::{RegistryError, RentalIncome};

/// Ledger of all declared rental incomes
///
/// The backing vector is kept sorted by year. Entries sharing a year keep
/// their insertion order, so per-landlord sequences stay stable.
#[derive(Debug, Default)]
pub struct IncomeLedger {
    incomes: Vec<RentalIncome>,
}

impl IncomeLedger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        IncomeLedger {
            incomes: Vec::new(),
        }
    }

    /// Number of declared incomes
    pub fn len(&self) -> usize {
        self.incomes.len()
    }

    /// Whether the ledger holds no incomes
    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty()
    }

    /// Find an income by year and landlord id
    ///
    /// Linear scan for an exact `(year, landlord id)` match.
    ///
    /// # Arguments
    ///
    /// * `year` - The declared year
    /// * `landlord_id` - The declaring landlord's document id
    ///
    /// # Returns
    ///
    /// * `Some(index)` of the first matching income
    /// * `None` if no income matches
    pub fn find(&self, year: i32, landlord_id: &str) -> Option<usize> {
        self.incomes
            .iter()
            .position(|income| income.year == year && income.landlord_id == landlord_id)
    }

    /// Get an income by year and landlord id
    pub fn get(&self, year: i32, landlord_id: &str) -> Option<&RentalIncome> {
        self.find(year, landlord_id).map(|index| &self.incomes[index])
    }

    /// Add an income at its year-ordered position
    ///
    /// # Arguments
    ///
    /// * `income` - The income to declare
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the income was inserted
    /// * `Err(RegistryError::RentalIncomeDuplicated)` if an income for the
    ///   same `(year, landlord id)` pair exists; the ledger is left unchanged
    pub fn add(&mut self, income: RentalIncome) -> Result<(), RegistryError> {
        if self.find(income.year, &income.landlord_id).is_some() {
            return Err(RegistryError::rental_income_duplicated(
                income.year,
                &income.landlord_id,
            ));
        }

        // Insert after any existing entries of the same year
        let position = self
            .incomes
            .partition_point(|existing| existing.year <= income.year);
        self.incomes.insert(position, income);
        Ok(())
    }

    /// Iterate over all incomes in ascending year order
    pub fn iter(&self) -> impl Iterator<Item = &RentalIncome> {
        self.incomes.iter()
    }

    /// Remove all incomes
    pub fn clear(&mut self) {
        self.incomes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn income(year: i32, amount: Decimal, landlord_id: &str) -> RentalIncome {
        RentalIncome {
            year,
            amount,
            landlord_id: landlord_id.to_string(),
        }
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = IncomeLedger::new();
        assert_eq!(ledger.len(), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_and_get_by_year_and_landlord() {
        let mut ledger = IncomeLedger::new();
        ledger
            .add(income(2023, Decimal::new(350000, 2), "87654321K"))
            .unwrap();

        let found = ledger.get(2023, "87654321K").unwrap();
        assert_eq!(found.amount, Decimal::new(350000, 2));
        assert!(ledger.get(2022, "87654321K").is_none());
        assert!(ledger.get(2023, "54927077H").is_none());
    }

    #[test]
    fn test_add_duplicate_pair_rejected_and_ledger_unchanged() {
        let mut ledger = IncomeLedger::new();
        ledger
            .add(income(2023, Decimal::new(350000, 2), "87654321K"))
            .unwrap();

        let error = ledger
            .add(income(2023, Decimal::new(990000, 2), "87654321K"))
            .unwrap_err();
        assert_eq!(
            error,
            RegistryError::rental_income_duplicated(2023, "87654321K")
        );
        assert_eq!(ledger.len(), 1);
        assert_eq!(
            ledger.get(2023, "87654321K").unwrap().amount,
            Decimal::new(350000, 2)
        );
    }

    #[test]
    fn test_same_year_different_landlords_allowed() {
        let mut ledger = IncomeLedger::new();
        ledger
            .add(income(2024, Decimal::new(880055, 2), "87654321K"))
            .unwrap();
        ledger
            .add(income(2024, Decimal::new(750010, 2), "54927077H"))
            .unwrap();

        assert_eq!(ledger.len(), 2);
    }

    #[rstest]
    #[case::already_sorted(&[2023, 2024, 2025], &[2023, 2024, 2025])]
    #[case::reverse_order(&[2025, 2024, 2023], &[2023, 2024, 2025])]
    #[case::interleaved(&[2024, 2022, 2025, 2023], &[2022, 2023, 2024, 2025])]
    fn test_add_keeps_ascending_year_order(#[case] years: &[i32], #[case] expected: &[i32]) {
        let mut ledger = IncomeLedger::new();
        for (n, year) in years.iter().enumerate() {
            // Distinct landlord per entry so no pair collides
            let id = format!("0000000{}X", n);
            ledger.add(income(*year, Decimal::ONE, &id)).unwrap();
        }

        let stored: Vec<i32> = ledger.iter().map(|income| income.year).collect();
        assert_eq!(stored, expected);
    }

    #[test]
    fn test_same_year_entries_keep_insertion_order() {
        let mut ledger = IncomeLedger::new();
        ledger
            .add(income(2024, Decimal::new(880055, 2), "87654321K"))
            .unwrap();
        ledger
            .add(income(2024, Decimal::new(750010, 2), "54927077H"))
            .unwrap();

        let ids: Vec<&str> = ledger.iter().map(|i| i.landlord_id.as_str()).collect();
        assert_eq!(ids, ["87654321K", "54927077H"]);
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut ledger = IncomeLedger::new();
        ledger
            .add(income(2023, Decimal::new(350000, 2), "87654321K"))
            .unwrap();

        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.find(2023, "87654321K"), None);
    }
}
