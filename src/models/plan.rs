use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};

/// Gender used for the basal metabolic rate formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Weekly activity level, mapped to a TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    /// Multiplier applied to BMR to estimate total daily energy expenditure.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary (little or no exercise)",
            ActivityLevel::LightlyActive => "lightly active (1-3 days/week)",
            ActivityLevel::ModeratelyActive => "moderately active (3-5 days/week)",
            ActivityLevel::VeryActive => "very active (6-7 days/week)",
            ActivityLevel::ExtraActive => "extra active (hard training twice a day)",
        }
    }

    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];
}

/// The dietary goal of a plan, driving calorie adjustment and macro split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PlanGoal {
    WeightLoss,
    Maintenance,
    MuscleGain,
}

impl PlanGoal {
    pub fn label(&self) -> &'static str {
        match self {
            PlanGoal::WeightLoss => "weight loss",
            PlanGoal::Maintenance => "maintenance",
            PlanGoal::MuscleGain => "muscle gain",
        }
    }

    /// Daily calorie adjustment relative to TDEE, in kcal.
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            PlanGoal::WeightLoss => -500.0,
            PlanGoal::Maintenance => 0.0,
            PlanGoal::MuscleGain => 300.0,
        }
    }

    /// Calorie fractions as (carbohydrates, proteins, fats). Sums to 1.0.
    pub fn macro_split(&self) -> (f64, f64, f64) {
        match self {
            PlanGoal::WeightLoss => (0.40, 0.30, 0.30),
            PlanGoal::Maintenance => (0.50, 0.20, 0.30),
            PlanGoal::MuscleGain => (0.45, 0.30, 0.25),
        }
    }

    fn default_description(&self) -> &'static str {
        match self {
            PlanGoal::WeightLoss => {
                "Eat at a moderate calorie deficit with protein kept high to preserve lean mass."
            }
            PlanGoal::Maintenance => {
                "Eat at your estimated energy expenditure with a balanced macronutrient split."
            }
            PlanGoal::MuscleGain => {
                "Eat at a small calorie surplus with extra protein to support muscle growth."
            }
        }
    }
}

/// The user profile consumed by the daily requirement lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub gender: Gender,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: ActivityLevel,
}

impl User {
    pub fn new(
        gender: Gender,
        age: u32,
        weight_kg: f64,
        height_cm: f64,
        activity: ActivityLevel,
    ) -> Result<Self> {
        if age == 0 || age > 130 {
            return Err(DietError::InvalidInput(format!(
                "Age must be between 1 and 130, got {}",
                age
            )));
        }
        for (label, value) in [("weight", weight_kg), ("height", height_cm)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DietError::InvalidInput(format!(
                    "{} must be a positive number, got {}",
                    label, value
                )));
            }
        }
        Ok(Self {
            gender,
            age,
            weight_kg,
            height_cm,
            activity,
        })
    }
}

/// A named diet plan. The descriptive block is rendered verbatim at the top
/// of the progress report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietPlan {
    pub name: String,
    pub description: String,
    pub goal: PlanGoal,
}

impl DietPlan {
    pub fn new(name: impl Into<String>, description: impl Into<String>, goal: PlanGoal) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            goal,
        }
    }

    /// A plan with the stock name and description for a goal.
    pub fn standard(goal: PlanGoal) -> Self {
        let name = match goal {
            PlanGoal::WeightLoss => "Standard weight loss plan",
            PlanGoal::Maintenance => "Standard maintenance plan",
            PlanGoal::MuscleGain => "Standard muscle gain plan",
        };
        Self::new(name, goal.default_description(), goal)
    }

    /// The descriptive header block shown in `plan view` and at the top of
    /// the progress report.
    pub fn view_plan(&self) -> String {
        format!(
            "=== {} ===\n{}\nGoal: {}",
            self.name,
            self.description,
            self.goal.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_validation() {
        assert!(User::new(Gender::Male, 30, 80.0, 180.0, ActivityLevel::Sedentary).is_ok());
        assert!(User::new(Gender::Male, 0, 80.0, 180.0, ActivityLevel::Sedentary).is_err());
        assert!(User::new(Gender::Male, 30, -80.0, 180.0, ActivityLevel::Sedentary).is_err());
        assert!(User::new(Gender::Male, 30, 80.0, 0.0, ActivityLevel::Sedentary).is_err());
    }

    #[test]
    fn test_macro_split_sums_to_one() {
        for goal in [
            PlanGoal::WeightLoss,
            PlanGoal::Maintenance,
            PlanGoal::MuscleGain,
        ] {
            let (c, p, f) = goal.macro_split();
            assert!((c + p + f - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_view_plan_contains_name_and_goal() {
        let plan = DietPlan::standard(PlanGoal::WeightLoss);
        let text = plan.view_plan();
        assert!(text.contains("Standard weight loss plan"));
        assert!(text.contains("Goal: weight loss"));
    }
}
