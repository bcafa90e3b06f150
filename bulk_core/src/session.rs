//! Transient form state for one interactive run.
//!
//! Mirrors the calculator form: three text fields and the last
//! computed plan. Nothing here is persisted; reset returns the form to
//! its initial empty state.

use crate::config::PlanConfig;
use crate::{estimator, BulkInputs, NutritionPlan, Result};

/// Field text plus the last computed plan for one interactive session
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSession {
    pub weight: String,
    pub duration: String,
    pub desired_gain: String,
    pub plan: Option<NutritionPlan>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the current field text and compute a fresh plan
    ///
    /// On success the previous plan is replaced. On error nothing is
    /// stored and the previous plan is left as it was.
    pub fn calculate(&mut self, config: &PlanConfig) -> Result<NutritionPlan> {
        let gain = if self.desired_gain.trim().is_empty() {
            None
        } else {
            Some(self.desired_gain.as_str())
        };

        let inputs = BulkInputs::parse(&self.weight, &self.duration, gain)?;
        let plan = estimator::compute_plan(&inputs, config)?;

        self.plan = Some(plan.clone());
        Ok(plan)
    }

    /// Clear all fields and discard the current plan
    pub fn reset(&mut self) {
        self.weight.clear();
        self.duration.clear();
        self.desired_gain.clear();
        self.plan = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_session() -> FormSession {
        FormSession {
            weight: "70".into(),
            duration: "8".into(),
            desired_gain: "4".into(),
            plan: None,
        }
    }

    #[test]
    fn test_calculate_stores_plan() {
        let mut session = filled_session();
        let plan = session.calculate(&PlanConfig::default()).unwrap();

        assert_eq!(plan.calories_per_day, 1600);
        assert_eq!(session.plan.as_ref(), Some(&plan));
    }

    #[test]
    fn test_recalculate_replaces_plan() {
        let mut session = filled_session();
        session.calculate(&PlanConfig::default()).unwrap();

        session.weight = "80".into();
        let plan = session.calculate(&PlanConfig::default()).unwrap();

        assert_eq!(session.plan.as_ref(), Some(&plan));
        assert_ne!(plan.calories_per_day, 1600);
    }

    #[test]
    fn test_failed_calculate_keeps_previous_plan() {
        let mut session = filled_session();
        let first = session.calculate(&PlanConfig::default()).unwrap();

        session.weight = "not a number".into();
        assert!(session.calculate(&PlanConfig::default()).is_err());

        // No partial or garbage result; the old plan is untouched
        assert_eq!(session.plan, Some(first));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = filled_session();
        session.calculate(&PlanConfig::default()).unwrap();

        session.reset();

        assert_eq!(session, FormSession::default());
        assert!(session.plan.is_none());
    }

    #[test]
    fn test_reset_on_empty_session_is_a_noop() {
        let mut session = FormSession::new();
        session.reset();
        assert_eq!(session, FormSession::default());
    }
}
