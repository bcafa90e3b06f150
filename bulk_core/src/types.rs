//! Core domain types for the Bulking Bites calculator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Surplus policies
//! - Validated numeric inputs
//! - Computed daily plans and lifestyle advisories

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Policy for turning maintenance intake into a bulking target
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanPolicy {
    /// Flat calorie bonus on top of maintenance; macros stay at base
    FixedSurplus,
    /// Surplus derived from the desired gain spread over the duration
    #[default]
    GoalDriven,
}

/// Validated numeric inputs for one plan computation
#[derive(Clone, Debug, PartialEq)]
pub struct BulkInputs {
    pub body_weight_kg: f64,
    pub duration_weeks: u32,
    pub desired_gain_kg: Option<f64>,
}

impl BulkInputs {
    /// Build validated inputs from already-numeric values
    pub fn new(
        body_weight_kg: f64,
        duration_weeks: u32,
        desired_gain_kg: Option<f64>,
    ) -> Result<Self> {
        let inputs = Self {
            body_weight_kg,
            duration_weeks,
            desired_gain_kg,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Parse raw form-field text into validated inputs
    ///
    /// Fails with `InvalidInput` before any arithmetic when a mandatory
    /// field is not a finite number. A blank gain field means "no gain
    /// target supplied".
    pub fn parse(weight: &str, duration: &str, desired_gain: Option<&str>) -> Result<Self> {
        let body_weight_kg: f64 = weight.trim().parse().map_err(|_| {
            Error::InvalidInput(format!("current weight must be a number, got {:?}", weight))
        })?;

        let duration_weeks: u32 = duration.trim().parse().map_err(|_| {
            Error::InvalidInput(format!(
                "duration must be a whole number of weeks, got {:?}",
                duration
            ))
        })?;

        let desired_gain_kg = match desired_gain.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(raw.parse::<f64>().map_err(|_| {
                Error::InvalidInput(format!("desired gain must be a number, got {:?}", raw))
            })?),
            None => None,
        };

        Self::new(body_weight_kg, duration_weeks, desired_gain_kg)
    }

    /// Check the numeric preconditions
    ///
    /// Duration of zero is rejected here so the surplus formula can
    /// never divide by zero.
    pub fn validate(&self) -> Result<()> {
        if !self.body_weight_kg.is_finite() || self.body_weight_kg <= 0.0 {
            return Err(Error::InvalidInput(
                "current weight must be a positive number of kilograms".into(),
            ));
        }

        if self.duration_weeks == 0 {
            return Err(Error::InvalidInput(
                "duration must be at least 1 week".into(),
            ));
        }

        if let Some(gain) = self.desired_gain_kg {
            if !gain.is_finite() || gain < 0.0 {
                return Err(Error::InvalidInput(
                    "desired gain must be a non-negative number of kilograms".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Fixed lifestyle advisories attached to the richest plan variant
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LifestyleTargets {
    pub sleep_hours: u32,
    /// Daily water intake in liters, one decimal place
    pub water_liters: f64,
    pub meals_per_day: u32,
    pub workouts_per_week: u32,
}

/// Daily nutrition targets computed for one bulking plan
///
/// Built fresh on every calculation and never mutated in place.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NutritionPlan {
    pub calories_per_day: u32,
    pub protein_g_per_day: u32,
    pub carb_g_per_day: u32,
    pub fat_g_per_day: u32,

    /// Present only under the goal-driven policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_calorie_surplus: Option<u32>,

    /// Present only when lifestyle advisories are enabled in config
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifestyle: Option<LifestyleTargets>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_fields() {
        let inputs = BulkInputs::parse("70", "8", Some("4")).unwrap();
        assert_eq!(inputs.body_weight_kg, 70.0);
        assert_eq!(inputs.duration_weeks, 8);
        assert_eq!(inputs.desired_gain_kg, Some(4.0));
    }

    #[test]
    fn test_parse_blank_gain_is_none() {
        let inputs = BulkInputs::parse("70", "8", Some("  ")).unwrap();
        assert_eq!(inputs.desired_gain_kg, None);

        let inputs = BulkInputs::parse("70", "8", None).unwrap();
        assert_eq!(inputs.desired_gain_kg, None);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let inputs = BulkInputs::parse(" 72.5 ", " 12 ", Some(" 3.5 ")).unwrap();
        assert_eq!(inputs.body_weight_kg, 72.5);
        assert_eq!(inputs.duration_weeks, 12);
        assert_eq!(inputs.desired_gain_kg, Some(3.5));
    }

    #[test]
    fn test_non_numeric_weight_rejected() {
        let err = BulkInputs::parse("abc", "8", Some("4")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_fractional_duration_rejected() {
        let err = BulkInputs::parse("70", "8.5", Some("4")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = BulkInputs::parse("70", "0", Some("4")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        // "NaN" and "inf" parse as f64 but are not finite numbers
        assert!(BulkInputs::parse("NaN", "8", None).is_err());
        assert!(BulkInputs::parse("inf", "8", None).is_err());
    }

    #[test]
    fn test_negative_weight_rejected() {
        assert!(BulkInputs::new(-70.0, 8, None).is_err());
        assert!(BulkInputs::new(0.0, 8, None).is_err());
    }

    #[test]
    fn test_negative_gain_rejected() {
        let err = BulkInputs::new(70.0, 8, Some(-1.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
