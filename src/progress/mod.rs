pub mod calculator;
pub mod requirements;

pub use calculator::{
    adherence_line, adherence_percentage, calculate_progress, format_amount, LEEWAY,
};
pub use requirements::{basal_metabolic_rate, PlanInfo};
