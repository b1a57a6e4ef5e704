use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};

/// A food item with its macronutrient content per serving, in grams.
///
/// Foods are immutable values; two foods are equal when the name and all
/// three macronutrient amounts match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub name: String,
    pub carbs: f64,
    pub fats: f64,
    pub proteins: f64,
}

impl Food {
    /// Create a validated food item.
    pub fn new(name: impl Into<String>, carbs: f64, fats: f64, proteins: f64) -> Result<Self> {
        let food = Self {
            name: name.into(),
            carbs,
            fats,
            proteins,
        };
        food.validate()?;
        Ok(food)
    }

    /// Check the food invariants: non-empty name, non-negative finite macros.
    ///
    /// Also used to re-validate foods that bypassed `new` via deserialization.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DietError::InvalidInput(
                "Food name must not be empty".to_string(),
            ));
        }
        for (label, value) in [
            ("carbohydrates", self.carbs),
            ("fats", self.fats),
            ("proteins", self.proteins),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DietError::InvalidInput(format!(
                    "{} must be a non-negative number, got {}",
                    label, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let food = Food::new("noodles", 65.0, 10.0, 12.0).unwrap();
        assert_eq!(food.name, "noodles");
        assert_eq!(food.carbs, 65.0);
    }

    #[test]
    fn test_new_rejects_empty_name() {
        assert!(Food::new("", 1.0, 1.0, 1.0).is_err());
        assert!(Food::new("   ", 1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_new_rejects_negative_macros() {
        assert!(Food::new("bad", -1.0, 1.0, 1.0).is_err());
        assert!(Food::new("bad", 1.0, -0.5, 1.0).is_err());
        assert!(Food::new("bad", 1.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_equality_is_by_value() {
        let a = Food::new("noodles", 1.0, 1.0, 1.0).unwrap();
        let b = Food::new("noodles", 1.0, 1.0, 1.0).unwrap();
        let c = Food::new("noodles", 2.0, 1.0, 1.0).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
