use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};
use crate::models::Food;

/// The catalog of known foods, unique by exact name.
///
/// Entries keep insertion order; lookups are linear scans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniqueFoodList {
    foods: Vec<Food>,
}

impl UniqueFoodList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a food, rejecting a name already in the catalog.
    pub fn add(&mut self, food: Food) -> Result<()> {
        if self.position(&food.name).is_some() {
            return Err(DietError::DuplicateFood(food.name));
        }
        self.foods.push(food);
        Ok(())
    }

    /// Remove and return the food at `index`, shifting later entries down.
    pub fn delete(&mut self, index: usize) -> Result<Food> {
        if index >= self.foods.len() {
            return Err(DietError::IndexOutOfRange {
                index,
                len: self.foods.len(),
            });
        }
        Ok(self.foods.remove(index))
    }

    /// Membership test by value equality (name and macronutrients).
    pub fn contains(&self, food: &Food) -> bool {
        self.foods.contains(food)
    }

    /// Zero-based position of the first food with exactly this name.
    ///
    /// `None` when no entry matches; the lookup is case-sensitive.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.foods.iter().position(|f| f.name == name)
    }

    /// Look up a food by exact name.
    pub fn get(&self, name: &str) -> Option<&Food> {
        self.position(name).map(|i| &self.foods[i])
    }

    pub fn entries(&self) -> &[Food] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(name: &str, macros: f64) -> Food {
        Food::new(name, macros, macros, macros).unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let list = UniqueFoodList::new();
        assert!(list.entries().is_empty());
    }

    #[test]
    fn test_position_by_name() {
        let mut list = UniqueFoodList::new();
        list.add(food("noodles", 1.0)).unwrap();
        list.add(food("chocolate", 2.0)).unwrap();

        assert_eq!(list.position("noodles"), Some(0));
        assert_eq!(list.position("chocolate"), Some(1));
        assert_eq!(list.position("strawberry"), None);
    }

    #[test]
    fn test_position_is_case_sensitive() {
        let mut list = UniqueFoodList::new();
        list.add(food("Noodles", 1.0)).unwrap();
        assert_eq!(list.position("noodles"), None);
    }

    #[test]
    fn test_contains_by_value() {
        let mut list = UniqueFoodList::new();
        let noodles = food("noodles", 1.0);
        let chocolate = food("chocolate", 2.0);

        assert!(!list.contains(&noodles));
        assert!(!list.contains(&chocolate));

        list.add(noodles.clone()).unwrap();
        list.add(chocolate.clone()).unwrap();

        assert!(list.contains(&noodles));
        assert!(list.contains(&chocolate));

        list.delete(0).unwrap();
        list.delete(0).unwrap();

        assert!(!list.contains(&noodles));
        assert!(!list.contains(&chocolate));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_rejects_duplicate_name() {
        let mut list = UniqueFoodList::new();
        list.add(food("noodles", 1.0)).unwrap();

        let err = list.add(food("noodles", 9.0)).unwrap_err();
        assert!(matches!(err, DietError::DuplicateFood(_)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut list = UniqueFoodList::new();
        assert!(matches!(
            list.delete(0),
            Err(DietError::IndexOutOfRange { index: 0, len: 0 })
        ));

        list.add(food("noodles", 1.0)).unwrap();
        assert!(matches!(
            list.delete(100),
            Err(DietError::IndexOutOfRange { index: 100, len: 1 })
        ));
    }
}
