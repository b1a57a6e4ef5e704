use chrono::NaiveDate;

use crate::error::{DietError, Result};
use crate::models::{DietPlan, Food, FoodIntake, FoodIntakeList, User};
use crate::progress::requirements::PlanInfo;

/// Tolerance band around 100% adherence, in percentage points.
pub const LEEWAY: f64 = 5.00;

/// Build the progress report for a user's intake log against a diet plan.
///
/// Groups the log by day, sums each day's macronutrients and classifies the
/// totals against the plan's daily requirements. The caller's list is not
/// mutated; the report covers the span from the earliest to the latest
/// recorded date.
pub fn calculate_progress(
    intake_list: &FoodIntakeList,
    plan: &DietPlan,
    user: &User,
) -> Result<String> {
    let intakes = sorted_intakes(intake_list);
    if intakes.is_empty() {
        return Err(DietError::EmptyIntakeLog);
    }

    let info = PlanInfo::new(user, plan);

    let mut report = initialize_report(plan, &intakes, &info);
    report_daily_intake(
        &mut report,
        &intakes,
        info.carbohydrates(),
        info.fats(),
        info.proteins(),
    );

    Ok(report)
}

/// Copy of the log sorted by date ascending. The sort is stable, so intakes
/// sharing a date keep their insertion order.
fn sorted_intakes(intake_list: &FoodIntakeList) -> Vec<FoodIntake> {
    let mut intakes = intake_list.entries().to_vec();
    intakes.sort_by_key(|intake| intake.date);
    intakes
}

/// Header block: plan details, daily requirements and the covered date span.
fn initialize_report(plan: &DietPlan, intakes: &[FoodIntake], info: &PlanInfo) -> String {
    let mut report = String::new();
    report.push_str(&plan.view_plan());
    report.push('\n');
    report.push_str(&info.summary());
    report.push('\n');

    let first_day = intakes[0].date;
    let last_day = intakes[intakes.len() - 1].date;
    report.push_str("\nHere is the report for the days ");
    report.push_str(&long_date(first_day));
    report.push_str(" to ");
    report.push_str(&long_date(last_day));
    report.push_str(":\n\n");

    report
}

/// Walk the sorted intakes, emitting one block per day followed by that
/// day's adherence lines.
fn report_daily_intake(
    report: &mut String,
    intakes: &[FoodIntake],
    daily_carbs: f64,
    daily_fats: f64,
    daily_proteins: f64,
) {
    let mut previous_day: Option<NaiveDate> = None;
    let mut carbs_sum = 0.0;
    let mut fats_sum = 0.0;
    let mut proteins_sum = 0.0;

    for intake in intakes {
        let day = intake.date;

        if previous_day != Some(day) {
            // Close out the finished day before starting the next one.
            if previous_day.is_some() {
                report_adherence(
                    report,
                    adherence_percentage(carbs_sum, daily_carbs),
                    adherence_percentage(fats_sum, daily_fats),
                    adherence_percentage(proteins_sum, daily_proteins),
                );
            }

            carbs_sum = 0.0;
            fats_sum = 0.0;
            proteins_sum = 0.0;

            report_new_day(report, day);
            previous_day = Some(day);
        }

        report_food(report, &intake.food);

        carbs_sum += intake.food.carbs;
        fats_sum += intake.food.fats;
        proteins_sum += intake.food.proteins;
    }

    // The loop never emits the trailing day's adherence.
    report_adherence(
        report,
        adherence_percentage(carbs_sum, daily_carbs),
        adherence_percentage(fats_sum, daily_fats),
        adherence_percentage(proteins_sum, daily_proteins),
    );
}

fn report_new_day(report: &mut String, day: NaiveDate) {
    report.push_str("Date: ");
    report.push_str(&full_date(day));
    report.push('\n');
    report.push_str("Name\t\t\tCarbohydrates\t\tFats\t\tProtein\n");
}

fn report_food(report: &mut String, food: &Food) {
    report.push_str(&food.name);
    report.push_str("\t\t\t");
    report.push_str(&format_amount(food.carbs));
    report.push_str("\t\t");
    report.push_str(&format_amount(food.fats));
    report.push_str("\t\t");
    report.push_str(&format_amount(food.proteins));
    report.push_str("\t\n");
}

/// Percentage of the daily requirement covered by an intake sum.
///
/// Performs the raw division; a zero requirement yields a non-finite
/// percentage. Requirements built through `PlanInfo` are always positive.
pub fn adherence_percentage(intake: f64, required: f64) -> f64 {
    (intake / required) * 100.00
}

fn report_adherence(
    report: &mut String,
    carbs_adherence: f64,
    fats_adherence: f64,
    proteins_adherence: f64,
) {
    report.push_str(&adherence_line("carbohydrate", carbs_adherence));
    report.push('\n');
    report.push_str(&adherence_line("fat", fats_adherence));
    report.push('\n');
    report.push_str(&adherence_line("protein", proteins_adherence));
    report.push_str("\n\n");
}

/// Classify one day's adherence for a single nutrient.
///
/// Within `100 ± LEEWAY` percent counts as on target; outside the band the
/// line reports by how many percentage points the band was missed.
pub fn adherence_line(nutrient: &str, adherence: f64) -> String {
    if adherence > 100.0 + LEEWAY {
        let exceed = adherence - (100.00 + LEEWAY);
        format!(
            "Your daily {} consumption has exceeded by {}%",
            nutrient,
            format_amount(exceed)
        )
    } else if adherence < 100.0 - LEEWAY {
        let under = (100.00 - LEEWAY) - adherence;
        format!(
            "Your daily {} consumption is under by {}%",
            nutrient,
            format_amount(under)
        )
    } else {
        format!(
            "Your daily {} consumption is within diet requirements. Well done!",
            nutrient
        )
    }
}

/// Format a quantity to two decimals with thousands separators, e.g. `1,234.50`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return format!("{:.2}", value);
    }

    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Long date used for the report span, e.g. `6 May 2019`.
fn long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Full date used for day headers, e.g. `Monday, 6 May 2019`.
fn full_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adherence_percentage() {
        assert_eq!(adherence_percentage(105.0, 100.0), 105.0);
        assert_eq!(adherence_percentage(0.0, 100.0), 0.0);
        assert!(!adherence_percentage(10.0, 0.0).is_finite());
    }

    #[test]
    fn test_adherence_line_within_band() {
        // 105% sits exactly on the upper edge of the band.
        assert_eq!(
            adherence_line("carbohydrate", 105.0),
            "Your daily carbohydrate consumption is within diet requirements. Well done!"
        );
        assert_eq!(
            adherence_line("fat", 95.0),
            "Your daily fat consumption is within diet requirements. Well done!"
        );
    }

    #[test]
    fn test_adherence_line_exceeded() {
        assert_eq!(
            adherence_line("carbohydrate", 106.0),
            "Your daily carbohydrate consumption has exceeded by 1.00%"
        );
    }

    #[test]
    fn test_adherence_line_under() {
        assert_eq!(
            adherence_line("carbohydrate", 94.0),
            "Your daily carbohydrate consumption is under by 1.00%"
        );
        assert_eq!(
            adherence_line("protein", 0.0),
            "Your daily protein consumption is under by 95.00%"
        );
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(95.0), "95.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_long_and_full_dates() {
        let day = NaiveDate::from_ymd_opt(2019, 5, 6).unwrap();
        assert_eq!(long_date(day), "6 May 2019");
        assert_eq!(full_date(day), "Monday, 6 May 2019");
    }
}
