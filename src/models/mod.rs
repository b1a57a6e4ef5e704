mod catalog;
mod food;
mod intake;
mod plan;

pub use catalog::UniqueFoodList;
pub use food::Food;
pub use intake::{FoodIntake, FoodIntakeList};
pub use plan::{ActivityLevel, DietPlan, Gender, PlanGoal, User};
