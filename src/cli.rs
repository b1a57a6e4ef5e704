use clap::{Parser, Subcommand};

use crate::models::PlanGoal;

/// DietTracker — log daily food intake and report adherence to a diet plan.
#[derive(Parser, Debug)]
#[command(name = "diet_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the tracker state JSON file.
    #[arg(short, long, default_value = "diet_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage the food catalog.
    Food {
        #[command(subcommand)]
        action: FoodCommand,
    },

    /// Manage the daily intake log.
    Intake {
        #[command(subcommand)]
        action: IntakeCommand,
    },

    /// Manage the active diet plan.
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Set up the user profile interactively.
    Profile,

    /// Print the progress report for the recorded intakes.
    Report,
}

#[derive(Subcommand, Debug)]
pub enum FoodCommand {
    /// Add a food with its macronutrients in grams.
    Add {
        name: String,
        carbs: f64,
        fats: f64,
        proteins: f64,
    },

    /// Delete the food at a zero-based catalog index.
    Delete { index: usize },

    /// List the food catalog.
    List,

    /// Import foods from a CSV file with name,carbs,fats,proteins columns.
    Import { path: String },
}

#[derive(Subcommand, Debug)]
pub enum IntakeCommand {
    /// Record that a cataloged food was eaten on a date (YYYY-MM-DD).
    Add { date: String, name: String },

    /// Delete the intake at a zero-based log index.
    Delete { index: usize },

    /// List recorded intakes.
    List {
        /// Only show intakes on this date (YYYY-MM-DD).
        #[arg(long)]
        on: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PlanCommand {
    /// Activate a plan for a goal.
    Set {
        #[arg(value_enum)]
        goal: PlanGoal,

        /// Override the stock plan name.
        #[arg(long)]
        name: Option<String>,

        /// Override the stock plan description.
        #[arg(long)]
        description: Option<String>,
    },

    /// Show the active plan and its daily requirements.
    View,
}
