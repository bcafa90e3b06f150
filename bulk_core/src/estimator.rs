//! Nutrition estimation formulas.
//!
//! Maintenance intake scales linearly with body weight, macros take
//! fixed fractions of maintenance calories, and the bulking surplus
//! comes from either a flat bonus (fixed-surplus policy) or the desired
//! gain spread over the duration (goal-driven policy).

use crate::config::PlanConfig;
use crate::{BulkInputs, Error, LifestyleTargets, NutritionPlan, PlanPolicy, Result};

/// Maintenance kcal per kg of body weight
const MAINTENANCE_KCAL_PER_KG: f64 = 15.0;
/// Maintenance protein grams per kg of body weight
const PROTEIN_G_PER_KG: f64 = 2.0;
/// Fractions of maintenance calories assigned to carbs and fat
const CARB_CALORIE_FRACTION: f64 = 0.5;
const FAT_CALORIE_FRACTION: f64 = 0.25;

/// kcal per gram of each macro
const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARB: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

/// Approximate kcal behind 1 kg of body mass change
const KCAL_PER_KG_GAIN: f64 = 7700.0;

/// How surplus calories are split across macros (goal-driven policy).
/// The three fractions sum to 1.0 so the macro adjustments account for
/// the whole surplus.
const SURPLUS_PROTEIN_FRACTION: f64 = 0.3;
const SURPLUS_CARB_FRACTION: f64 = 0.5;
const SURPLUS_FAT_FRACTION: f64 = 0.2;

/// Lifestyle advisories: constants plus water scaled to body weight
const SLEEP_HOURS: u32 = 8;
const MEALS_PER_DAY: u32 = 5;
const WORKOUTS_PER_WEEK: u32 = 4;
const WATER_L_PER_KG: f64 = 0.033;

/// Compute a daily nutrition plan from validated inputs
///
/// Pure and deterministic: identical inputs and config always produce
/// an identical plan. All arithmetic is f64; final values are rounded
/// to the nearest integer (water to one decimal place).
pub fn compute_plan(inputs: &BulkInputs, config: &PlanConfig) -> Result<NutritionPlan> {
    inputs.validate()?;

    let weight = inputs.body_weight_kg;

    let base_calories = weight * MAINTENANCE_KCAL_PER_KG;
    let base_protein_g = weight * PROTEIN_G_PER_KG;
    let base_carb_g = (base_calories * CARB_CALORIE_FRACTION) / KCAL_PER_G_CARB;
    let base_fat_g = (base_calories * FAT_CALORIE_FRACTION) / KCAL_PER_G_FAT;

    let (calories, protein_g, carb_g, fat_g, daily_surplus) = match config.policy {
        PlanPolicy::FixedSurplus => (
            base_calories + config.fixed_surplus_kcal,
            base_protein_g,
            base_carb_g,
            base_fat_g,
            None,
        ),
        PlanPolicy::GoalDriven => {
            let gain = inputs.desired_gain_kg.ok_or_else(|| {
                Error::InvalidInput("desired gain is required for a goal-driven plan".into())
            })?;

            // duration_weeks >= 1 is guaranteed by validation
            let days = f64::from(inputs.duration_weeks) * 7.0;
            let surplus = gain * KCAL_PER_KG_GAIN / days;

            (
                base_calories + surplus,
                base_protein_g + (surplus * SURPLUS_PROTEIN_FRACTION) / KCAL_PER_G_PROTEIN,
                base_carb_g + (surplus * SURPLUS_CARB_FRACTION) / KCAL_PER_G_CARB,
                base_fat_g + (surplus * SURPLUS_FAT_FRACTION) / KCAL_PER_G_FAT,
                Some(surplus),
            )
        }
    };

    let lifestyle = config.lifestyle.then(|| LifestyleTargets {
        sleep_hours: SLEEP_HOURS,
        water_liters: (weight * WATER_L_PER_KG * 10.0).round() / 10.0,
        meals_per_day: MEALS_PER_DAY,
        workouts_per_week: WORKOUTS_PER_WEEK,
    });

    let plan = NutritionPlan {
        calories_per_day: round_to_u32(calories),
        protein_g_per_day: round_to_u32(protein_g),
        carb_g_per_day: round_to_u32(carb_g),
        fat_g_per_day: round_to_u32(fat_g),
        daily_calorie_surplus: daily_surplus.map(round_to_u32),
        lifestyle,
    };

    tracing::debug!(
        calories = plan.calories_per_day,
        protein = plan.protein_g_per_day,
        carbs = plan.carb_g_per_day,
        fat = plan.fat_g_per_day,
        "computed nutrition plan"
    );

    Ok(plan)
}

fn round_to_u32(value: f64) -> u32 {
    value.max(0.0).round() as u32
}
