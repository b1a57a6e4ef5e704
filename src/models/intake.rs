use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};
use crate::models::Food;

/// One consumption event: a food eaten on a calendar date.
///
/// Several intakes may share a date; the log keeps them all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodIntake {
    pub date: NaiveDate,
    pub food: Food,
}

impl FoodIntake {
    pub fn new(date: NaiveDate, food: Food) -> Self {
        Self { date, food }
    }
}

/// The per-user intake log: an insertion-ordered list of consumption events,
/// scoped to the date the log was created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodIntakeList {
    reference_date: NaiveDate,
    intakes: Vec<FoodIntake>,
}

impl FoodIntakeList {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            intakes: Vec::new(),
        }
    }

    /// The date this log was created.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Append an intake, preserving insertion order.
    pub fn add(&mut self, intake: FoodIntake) {
        self.intakes.push(intake);
    }

    /// Remove and return the intake at `index`, shifting later entries down.
    pub fn delete(&mut self, index: usize) -> Result<FoodIntake> {
        if index >= self.intakes.len() {
            return Err(DietError::IndexOutOfRange {
                index,
                len: self.intakes.len(),
            });
        }
        Ok(self.intakes.remove(index))
    }

    /// The current contents, in insertion order. Empty log yields an empty slice.
    pub fn entries(&self) -> &[FoodIntake] {
        &self.intakes
    }

    /// Intakes recorded for one specific date, in insertion order.
    pub fn on_date(&self, date: NaiveDate) -> Vec<&FoodIntake> {
        self.intakes.iter().filter(|i| i.date == date).collect()
    }

    pub fn len(&self) -> usize {
        self.intakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intakes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn intake(day: &str, name: &str) -> FoodIntake {
        FoodIntake::new(date(day), Food::new(name, 1.0, 1.0, 1.0).unwrap())
    }

    #[test]
    fn test_starts_empty() {
        let list = FoodIntakeList::new(date("2019-05-06"));
        assert!(list.entries().is_empty());
        assert_eq!(list.reference_date(), date("2019-05-06"));
    }

    #[test]
    fn test_add_then_delete_returns_to_empty() {
        let mut list = FoodIntakeList::new(date("2019-05-06"));
        list.add(intake("2019-05-06", "noodles"));
        assert_eq!(list.len(), 1);

        let removed = list.delete(0).unwrap();
        assert_eq!(removed.food.name, "noodles");
        assert!(list.is_empty());
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut list = FoodIntakeList::new(date("2019-05-06"));
        assert!(matches!(
            list.delete(0),
            Err(DietError::IndexOutOfRange { index: 0, len: 0 })
        ));
        assert!(matches!(
            list.delete(100),
            Err(DietError::IndexOutOfRange { index: 100, len: 0 })
        ));
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut list = FoodIntakeList::new(date("2019-05-06"));
        list.add(intake("2019-05-07", "noodles"));
        list.add(intake("2019-05-06", "chocolate"));
        list.add(intake("2019-05-07", "rice"));

        let names: Vec<&str> = list
            .entries()
            .iter()
            .map(|i| i.food.name.as_str())
            .collect();
        assert_eq!(names, ["noodles", "chocolate", "rice"]);
    }

    #[test]
    fn test_on_date_filters() {
        let mut list = FoodIntakeList::new(date("2019-05-06"));
        list.add(intake("2019-05-06", "noodles"));
        list.add(intake("2019-05-07", "chocolate"));
        list.add(intake("2019-05-06", "rice"));

        let day = list.on_date(date("2019-05-06"));
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].food.name, "noodles");
        assert_eq!(day[1].food.name, "rice");
    }
}
