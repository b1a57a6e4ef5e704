use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};
use crate::models::{DietPlan, FoodIntake, FoodIntakeList, UniqueFoodList, User};

/// The whole tracker state: catalog, intake log, profile and active plan.
///
/// Everything the CLI persists lives here; the progress calculator only
/// borrows the pieces it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerState {
    user: Option<User>,
    plan: Option<DietPlan>,
    foods: UniqueFoodList,
    intakes: FoodIntakeList,
}

impl TrackerState {
    /// Fresh state with an empty catalog and an intake log anchored to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            user: None,
            plan: None,
            foods: UniqueFoodList::new(),
            intakes: FoodIntakeList::new(today),
        }
    }

    pub fn user(&self) -> Result<&User> {
        self.user.as_ref().ok_or(DietError::MissingProfile)
    }

    pub fn has_user(&self) -> bool {
        self.user.is_some()
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn plan(&self) -> Result<&DietPlan> {
        self.plan.as_ref().ok_or(DietError::MissingPlan)
    }

    pub fn set_plan(&mut self, plan: DietPlan) {
        self.plan = Some(plan);
    }

    pub fn foods(&self) -> &UniqueFoodList {
        &self.foods
    }

    pub fn foods_mut(&mut self) -> &mut UniqueFoodList {
        &mut self.foods
    }

    pub fn intakes(&self) -> &FoodIntakeList {
        &self.intakes
    }

    pub fn intakes_mut(&mut self) -> &mut FoodIntakeList {
        &mut self.intakes
    }

    /// Log an intake of a cataloged food on a date.
    ///
    /// The name must match a catalog entry exactly; fuzzy resolution happens
    /// at the prompt layer before this is called.
    pub fn log_intake(&mut self, date: NaiveDate, name: &str) -> Result<()> {
        let food = self
            .foods
            .get(name)
            .cloned()
            .ok_or_else(|| DietError::FoodNotFound(name.to_string()))?;
        self.intakes.add(FoodIntake::new(date, food));
        Ok(())
    }
}
