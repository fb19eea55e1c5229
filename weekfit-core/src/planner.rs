//! Weekly planner: validates a request and runs
//! pool -> assignment -> allocation -> assembly.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::allocate::{allocate_durations, DEFAULT_MINUTES_HIGH, DEFAULT_MINUTES_LOW};
use crate::assign::{assign_days, DEFAULT_REFERENCE_MINUTES};
use crate::catalog::Catalog;
use crate::category::CategoryTag;
use crate::error::PlanError;
use crate::pool::{build_pool, UnderRepresented, DEFAULT_MIN_PER_CATEGORY};
use crate::schedule::{assemble, canonical_days, WeeklySchedule};

/// Tunable planning knobs, usually read from config
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlanSettings {
    /// Shortest session for a selected day
    pub minutes_low: u32,
    /// Longest session for a selected day
    pub minutes_high: u32,
    /// Session length used to rank activities against the per-day target
    pub reference_minutes: u32,
    /// Categories with fewer matches than this are reported
    pub min_per_category: usize,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            minutes_low: DEFAULT_MINUTES_LOW,
            minutes_high: DEFAULT_MINUTES_HIGH,
            reference_minutes: DEFAULT_REFERENCE_MINUTES,
            min_per_category: DEFAULT_MIN_PER_CATEGORY,
        }
    }
}

/// What the caller asks for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRequest {
    pub days: Vec<Weekday>,
    pub categories: Vec<CategoryTag>,
    pub weight_kg: f64,
    pub weekly_target_kcal: f64,
}

/// Planned week plus any non-fatal warnings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanOutcome {
    pub schedule: WeeklySchedule,
    pub warnings: Vec<UnderRepresented>,
}

fn validate(request: &PlanRequest, settings: &PlanSettings) -> Result<(), PlanError> {
    if !(request.weight_kg.is_finite() && request.weight_kg > 0.0) {
        return Err(PlanError::invalid_parameter(
            "weight_kg",
            format!("must be positive, got {}", request.weight_kg),
        ));
    }
    if !(request.weekly_target_kcal.is_finite() && request.weekly_target_kcal > 0.0) {
        return Err(PlanError::invalid_parameter(
            "weekly_target_kcal",
            format!("must be positive, got {}", request.weekly_target_kcal),
        ));
    }
    if settings.minutes_low > settings.minutes_high {
        return Err(PlanError::invalid_parameter(
            "minutes_low",
            format!(
                "{} exceeds minutes_high {}",
                settings.minutes_low, settings.minutes_high
            ),
        ));
    }
    if settings.reference_minutes == 0 {
        return Err(PlanError::invalid_parameter(
            "reference_minutes",
            "must be at least 1",
        ));
    }
    Ok(())
}

/// Build a weekly schedule. Deterministic for identical inputs.
pub fn plan_week(
    catalog: &Catalog,
    request: &PlanRequest,
    settings: &PlanSettings,
) -> Result<PlanOutcome, PlanError> {
    validate(request, settings)?;

    let pool = build_pool(catalog, &request.categories, settings.min_per_category)?;
    if pool.is_empty() {
        warn!(categories = ?request.categories, "no activities matched");
        return Err(PlanError::EmptyPool);
    }

    let days = canonical_days(&request.days);
    let picks = assign_days(
        &days,
        &pool,
        request.weekly_target_kcal,
        request.weight_kg,
        settings.reference_minutes,
    )?;
    let plans = allocate_durations(
        settings.minutes_low,
        settings.minutes_high,
        &picks,
        request.weight_kg,
        request.weekly_target_kcal,
    );
    let schedule = assemble(&plans, request.weekly_target_kcal);

    info!(
        total_kcal = schedule.total_kcal,
        target_kcal = schedule.target_kcal,
        deviation_kcal = schedule.deviation_kcal,
        "planned week"
    );

    Ok(PlanOutcome {
        schedule,
        warnings: pool.warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ActivityRecord;
    use crate::schedule::WEEK;
    use Weekday::*;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            ActivityRecord::new("Running", 7.0),
            ActivityRecord::new("Cycling", 5.0),
        ])
    }

    fn request(days: Vec<Weekday>, target: f64) -> PlanRequest {
        PlanRequest {
            days,
            categories: vec![CategoryTag::Outdoor],
            weight_kg: 65.0,
            weekly_target_kcal: target,
        }
    }

    #[test]
    fn test_two_day_outdoor_week() {
        let outcome = plan_week(&catalog(), &request(vec![Mon, Wed], 500.0), &PlanSettings::default()).unwrap();
        let s = &outcome.schedule;
        assert_eq!(s.entries.len(), 7);
        assert_eq!(s.entry(Mon).unwrap().activity, "Cycling");
        assert_eq!(s.entry(Wed).unwrap().activity, "Running");
        assert!(s.total_kcal >= 500.0);
        // outdoor matches only two activities, below the default minimum of 3
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn test_selected_days_within_bounds_and_rest_elsewhere() {
        let settings = PlanSettings::default();
        let outcome = plan_week(&catalog(), &request(vec![Fri, Tue, Sun], 2400.0), &settings).unwrap();
        for entry in &outcome.schedule.entries {
            if [Tue, Fri, Sun].contains(&entry.day) {
                assert!(!entry.rest);
                assert!(entry.minutes >= settings.minutes_low && entry.minutes <= settings.minutes_high);
            } else {
                assert!(entry.rest);
                assert_eq!(entry.minutes, 0);
                assert_eq!(entry.estimated_kcal, 0.0);
            }
        }
        let days: Vec<_> = outcome.schedule.entries.iter().map(|e| e.day).collect();
        assert_eq!(days, WEEK.to_vec());
    }

    #[test]
    fn test_duplicate_days_collapse() {
        let outcome = plan_week(&catalog(), &request(vec![Mon, Mon, Wed], 500.0), &PlanSettings::default()).unwrap();
        assert_eq!(outcome.schedule.active_days().count(), 2);
    }

    #[test]
    fn test_deterministic() {
        let req = request(vec![Mon, Tue, Thu, Sat], 1800.0);
        let a = plan_week(&catalog(), &req, &PlanSettings::default()).unwrap();
        let b = plan_week(&catalog(), &req, &PlanSettings::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_undershoot_reported_not_failed() {
        let outcome = plan_week(&catalog(), &request(vec![Mon], 5000.0), &PlanSettings::default()).unwrap();
        assert!(outcome.schedule.is_undershoot());
        assert_eq!(outcome.schedule.entry(Mon).unwrap().minutes, 120);
    }

    #[test]
    fn test_empty_categories_rejected() {
        let mut req = request(vec![Mon], 500.0);
        req.categories.clear();
        let err = plan_week(&catalog(), &req, &PlanSettings::default()).unwrap_err();
        assert!(matches!(err, PlanError::InvalidCategory { .. }));
    }

    #[test]
    fn test_no_matching_activities_is_empty_pool() {
        let mut req = request(vec![Mon], 500.0);
        req.categories = vec![CategoryTag::Sport];
        let err = plan_week(&catalog(), &req, &PlanSettings::default()).unwrap_err();
        assert_eq!(err, PlanError::EmptyPool);
    }

    #[test]
    fn test_invalid_parameters() {
        let settings = PlanSettings::default();
        let mut req = request(vec![Mon], 500.0);
        req.weight_kg = 0.0;
        assert!(matches!(
            plan_week(&catalog(), &req, &settings),
            Err(PlanError::InvalidParameter { parameter: "weight_kg", .. })
        ));

        let req = request(vec![Mon], f64::NAN);
        assert!(matches!(
            plan_week(&catalog(), &req, &settings),
            Err(PlanError::InvalidParameter { parameter: "weekly_target_kcal", .. })
        ));

        let inverted = PlanSettings { minutes_low: 90, minutes_high: 30, ..PlanSettings::default() };
        assert!(matches!(
            plan_week(&catalog(), &request(vec![Mon], 500.0), &inverted),
            Err(PlanError::InvalidParameter { parameter: "minutes_low", .. })
        ));
    }

    #[test]
    fn test_settings_deserialize_with_defaults() {
        let settings: PlanSettings = serde_json::from_str(r#"{"minutes_high": 150}"#).unwrap();
        assert_eq!(settings.minutes_high, 150);
        assert_eq!(settings.minutes_low, 60);
        assert_eq!(settings.min_per_category, 3);
    }
}
