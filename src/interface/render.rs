use crate::models::{DietPlan, FoodIntake, UniqueFoodList};
use crate::progress::{format_amount, PlanInfo};

/// Print the food catalog as a numbered list.
pub fn display_food_list(foods: &UniqueFoodList) {
    if foods.is_empty() {
        println!("The food catalog is empty.");
        return;
    }

    println!();
    println!("=== Food catalog ({} items) ===", foods.len());
    println!();

    for (i, food) in foods.entries().iter().enumerate() {
        println!(
            "{:>3}. {} - C:{} g, F:{} g, P:{} g",
            i + 1,
            food.name,
            format_amount(food.carbs),
            format_amount(food.fats),
            format_amount(food.proteins)
        );
    }

    println!();
}

/// Print intake entries as a numbered list.
pub fn display_intake_list(intakes: &[&FoodIntake]) {
    if intakes.is_empty() {
        println!("No food intakes recorded.");
        return;
    }

    println!();
    println!("=== Food intakes ({} entries) ===", intakes.len());
    println!();

    for (i, intake) in intakes.iter().enumerate() {
        println!(
            "{:>3}. {}  {} - C:{} g, F:{} g, P:{} g",
            i + 1,
            intake.date.format("%Y-%m-%d"),
            intake.food.name,
            format_amount(intake.food.carbs),
            format_amount(intake.food.fats),
            format_amount(intake.food.proteins)
        );
    }

    println!();
}

/// Print the active plan with its computed daily requirements.
pub fn display_plan(plan: &DietPlan, info: &PlanInfo) {
    println!();
    println!("{}", plan.view_plan());
    println!();
    println!("{}", info.summary());
    println!();
}
