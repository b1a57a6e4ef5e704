use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::Path;

use diet_tracker_rs::cli::{Cli, Command, FoodCommand, IntakeCommand, PlanCommand};
use diet_tracker_rs::error::{DietError, Result};
use diet_tracker_rs::interface::{
    display_food_list, display_intake_list, display_plan, prompt_profile, prompt_yes_no,
    resolve_food,
};
use diet_tracker_rs::models::{DietPlan, Food, PlanGoal};
use diet_tracker_rs::progress::{calculate_progress, PlanInfo};
use diet_tracker_rs::state::{load_or_init, save_state, TrackerState};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = Path::new(&cli.file);
    let today = Local::now().date_naive();
    let mut state = load_or_init(path, today)?;

    match cli.command {
        Command::Food { action } => match action {
            FoodCommand::Add {
                name,
                carbs,
                fats,
                proteins,
            } => cmd_food_add(&mut state, path, &name, carbs, fats, proteins),
            FoodCommand::Delete { index } => cmd_food_delete(&mut state, path, index),
            FoodCommand::List => {
                display_food_list(state.foods());
                Ok(())
            }
            FoodCommand::Import { path: csv_path } => cmd_food_import(&mut state, path, &csv_path),
        },
        Command::Intake { action } => match action {
            IntakeCommand::Add { date, name } => cmd_intake_add(&mut state, path, &date, &name),
            IntakeCommand::Delete { index } => cmd_intake_delete(&mut state, path, index),
            IntakeCommand::List { on } => cmd_intake_list(&state, on.as_deref()),
        },
        Command::Plan { action } => match action {
            PlanCommand::Set {
                goal,
                name,
                description,
            } => cmd_plan_set(&mut state, path, goal, name, description),
            PlanCommand::View => cmd_plan_view(&state),
        },
        Command::Profile => cmd_profile(&mut state, path),
        Command::Report => cmd_report(&state),
    }
}

/// Add a single food to the catalog.
fn cmd_food_add(
    state: &mut TrackerState,
    path: &Path,
    name: &str,
    carbs: f64,
    fats: f64,
    proteins: f64,
) -> Result<()> {
    let food = Food::new(name, carbs, fats, proteins)?;
    state.foods_mut().add(food)?;
    save_state(path, state)?;
    println!("Added '{}' to the catalog.", name);
    Ok(())
}

/// Delete a catalog entry by index, after confirmation.
fn cmd_food_delete(state: &mut TrackerState, path: &Path, index: usize) -> Result<()> {
    let name = match state.foods().entries().get(index) {
        Some(food) => food.name.clone(),
        None => {
            return Err(DietError::IndexOutOfRange {
                index,
                len: state.foods().len(),
            });
        }
    };

    if !prompt_yes_no(&format!("Delete '{}' from the catalog?", name), true)? {
        println!("Nothing deleted.");
        return Ok(());
    }

    state.foods_mut().delete(index)?;
    save_state(path, state)?;
    println!("Deleted '{}'.", name);
    Ok(())
}

/// Bulk-import foods from a CSV file with name,carbs,fats,proteins columns.
fn cmd_food_import(state: &mut TrackerState, path: &Path, csv_path: &str) -> Result<()> {
    let mut reader = csv::Reader::from_path(csv_path)?;
    let mut imported = 0usize;
    let mut skipped = 0usize;

    for record in reader.deserialize() {
        let food: Food = record?;
        food.validate()?;
        match state.foods_mut().add(food) {
            Ok(()) => imported += 1,
            Err(DietError::DuplicateFood(name)) => {
                println!("Skipping duplicate: {}", name);
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    save_state(path, state)?;
    println!("Imported {} foods ({} duplicates skipped).", imported, skipped);
    Ok(())
}

/// Record an intake, resolving the typed name against the catalog.
fn cmd_intake_add(state: &mut TrackerState, path: &Path, date: &str, name: &str) -> Result<()> {
    let date = parse_date(date)?;

    let resolved = resolve_food(state.foods().entries(), name)?.map(|f| f.name.clone());
    let food_name = resolved.ok_or_else(|| DietError::FoodNotFound(name.to_string()))?;

    state.log_intake(date, &food_name)?;
    save_state(path, state)?;
    println!("Recorded '{}' on {}.", food_name, date.format("%Y-%m-%d"));
    Ok(())
}

/// Delete an intake entry by index.
fn cmd_intake_delete(state: &mut TrackerState, path: &Path, index: usize) -> Result<()> {
    let removed = state.intakes_mut().delete(index)?;
    save_state(path, state)?;
    println!(
        "Deleted '{}' recorded on {}.",
        removed.food.name,
        removed.date.format("%Y-%m-%d")
    );
    Ok(())
}

/// List intakes, optionally restricted to one date.
fn cmd_intake_list(state: &TrackerState, on: Option<&str>) -> Result<()> {
    match on {
        Some(date) => {
            let date = parse_date(date)?;
            display_intake_list(&state.intakes().on_date(date));
        }
        None => {
            let all: Vec<_> = state.intakes().entries().iter().collect();
            display_intake_list(&all);
        }
    }
    Ok(())
}

/// Activate a diet plan for a goal.
fn cmd_plan_set(
    state: &mut TrackerState,
    path: &Path,
    goal: PlanGoal,
    name: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let mut plan = DietPlan::standard(goal);
    if let Some(name) = name {
        plan.name = name;
    }
    if let Some(description) = description {
        plan.description = description;
    }

    state.set_plan(plan);
    save_state(path, state)?;
    println!("Plan activated.");
    cmd_plan_view(state)
}

/// Show the active plan, with requirements when a profile exists.
fn cmd_plan_view(state: &TrackerState) -> Result<()> {
    let plan = state.plan()?;
    match state.user() {
        Ok(user) => display_plan(plan, &PlanInfo::new(user, plan)),
        Err(_) => {
            println!();
            println!("{}", plan.view_plan());
            println!();
            println!("Configure a profile to see daily requirements.");
        }
    }
    Ok(())
}

/// Interactive profile setup.
fn cmd_profile(state: &mut TrackerState, path: &Path) -> Result<()> {
    let user = prompt_profile()?;
    state.set_user(user);
    save_state(path, state)?;
    println!("Profile saved.");
    Ok(())
}

/// Print the progress report.
fn cmd_report(state: &TrackerState) -> Result<()> {
    let user = state.user()?;
    let plan = state.plan()?;
    let report = calculate_progress(state.intakes(), plan, user)?;
    println!("{}", report);
    Ok(())
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")?)
}
