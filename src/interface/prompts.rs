use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{DietError, Result};
use crate::models::{ActivityLevel, Food, Gender, User};

/// Minimum similarity for a fuzzy food-name suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Resolve a typed food name against the catalog.
///
/// Tries an exact (case-insensitive) match first, then falls back to fuzzy
/// matching with confirmation. Returns `None` when nothing matched or the
/// user rejected every suggestion.
pub fn resolve_food<'a>(foods: &'a [Food], input: &str) -> Result<Option<&'a Food>> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(None);
    }

    if let Some(food) = foods.iter().find(|f| f.name.to_lowercase() == needle) {
        return Ok(Some(food));
    }

    // Fuzzy candidates, best first
    let mut candidates: Vec<(&Food, f64)> = foods
        .iter()
        .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(food));
    }

    let options: Vec<&Food> = candidates.iter().take(5).map(|(f, _)| *f).collect();
    let mut labels: Vec<String> = options.iter().map(|f| f.name.clone()).collect();
    labels.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options.get(selection).copied())
}

/// Interactively collect a user profile.
pub fn prompt_profile() -> Result<User> {
    let gender_labels = ["male", "female"];
    let gender_selection = Select::new()
        .with_prompt("Gender")
        .items(&gender_labels)
        .default(0)
        .interact()?;
    let gender = if gender_selection == 0 {
        Gender::Male
    } else {
        Gender::Female
    };

    let age = prompt_integer("Age (years)", "30")?;
    let weight_kg = prompt_number("Weight (kg)", "70")?;
    let height_cm = prompt_number("Height (cm)", "170")?;

    let activity_labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let activity_selection = Select::new()
        .with_prompt("Activity level")
        .items(&activity_labels)
        .default(0)
        .interact()?;
    let activity = ActivityLevel::ALL[activity_selection];

    User::new(gender, age, weight_kg, height_cm, activity)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput(format!("Invalid number: {}", input)))
}

fn prompt_integer(prompt: &str, default: &str) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput(format!("Invalid number: {}", input)))
}
