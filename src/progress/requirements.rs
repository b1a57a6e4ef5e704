use crate::models::{DietPlan, Gender, User};
use crate::progress::calculator::format_amount;

/// Calories per gram of carbohydrate and protein.
const KCAL_PER_GRAM_CARB_PROTEIN: f64 = 4.0;

/// Calories per gram of fat.
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Daily calorie floor after goal adjustment.
const MIN_DAILY_CALORIES: f64 = 1200.0;

/// The daily macronutrient requirements of a user on a diet plan.
///
/// Computed once per report from the profile and the plan goal; the three
/// gram targets are strictly positive by construction.
#[derive(Debug, Clone)]
pub struct PlanInfo {
    calories: f64,
    carbohydrates: f64,
    fats: f64,
    proteins: f64,
}

impl PlanInfo {
    pub fn new(user: &User, plan: &DietPlan) -> Self {
        let tdee = basal_metabolic_rate(user) * user.activity.factor();
        let calories = (tdee + plan.goal.calorie_adjustment()).max(MIN_DAILY_CALORIES);

        let (carb_fraction, protein_fraction, fat_fraction) = plan.goal.macro_split();
        Self {
            calories,
            carbohydrates: calories * carb_fraction / KCAL_PER_GRAM_CARB_PROTEIN,
            fats: calories * fat_fraction / KCAL_PER_GRAM_FAT,
            proteins: calories * protein_fraction / KCAL_PER_GRAM_CARB_PROTEIN,
        }
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    pub fn carbohydrates(&self) -> f64 {
        self.carbohydrates
    }

    pub fn fats(&self) -> f64 {
        self.fats
    }

    pub fn proteins(&self) -> f64 {
        self.proteins
    }

    /// The requirement block shown in `plan view` and the report header.
    pub fn summary(&self) -> String {
        format!(
            "Daily requirements:\n\
             Calories: {} kcal\n\
             Carbohydrates: {} g\n\
             Fats: {} g\n\
             Proteins: {} g",
            format_amount(self.calories),
            format_amount(self.carbohydrates),
            format_amount(self.fats),
            format_amount(self.proteins),
        )
    }
}

/// Resting energy expenditure in kcal/day (Mifflin-St Jeor).
pub fn basal_metabolic_rate(user: &User) -> f64 {
    let base = 10.0 * user.weight_kg + 6.25 * user.height_cm - 5.0 * user.age as f64;
    match user.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}
