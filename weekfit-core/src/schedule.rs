//! Weekly schedule assembly in canonical Monday..Sunday order.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::allocate::DayPlan;

/// Canonical weekly order
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Activity label for unselected days
pub const REST_ACTIVITY: &str = "Rest";

/// Sort days into canonical order and drop duplicates
pub fn canonical_days(days: &[Weekday]) -> Vec<Weekday> {
    WEEK.iter().copied().filter(|d| days.contains(d)).collect()
}

/// One row of the weekly schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleEntry {
    pub day: Weekday,
    pub activity: String,
    pub minutes: u32,
    pub estimated_kcal: f64,
    pub calorie_coefficient: f64,
    pub rest: bool,
}

impl ScheduleEntry {
    fn rest(day: Weekday) -> Self {
        Self {
            day,
            activity: REST_ACTIVITY.to_string(),
            minutes: 0,
            estimated_kcal: 0.0,
            calorie_coefficient: 0.0,
            rest: true,
        }
    }
}

impl From<&DayPlan> for ScheduleEntry {
    fn from(plan: &DayPlan) -> Self {
        Self {
            day: plan.day,
            activity: plan.activity_name.clone(),
            minutes: plan.minutes,
            estimated_kcal: plan.estimated_kcal,
            calorie_coefficient: plan.calorie_coefficient,
            rest: false,
        }
    }
}

/// Seven entries, one per canonical weekday
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklySchedule {
    pub entries: Vec<ScheduleEntry>,
    pub total_kcal: f64,
    pub target_kcal: f64,
    /// total - target; positive is overshoot, negative undershoot
    pub deviation_kcal: f64,
}

impl WeeklySchedule {
    pub fn active_days(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter().filter(|e| !e.rest)
    }

    pub fn entry(&self, day: Weekday) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.day == day)
    }

    pub fn total_minutes(&self) -> u32 {
        self.entries.iter().map(|e| e.minutes).sum()
    }

    /// True when the plan falls short of the target
    pub fn is_undershoot(&self) -> bool {
        self.deviation_kcal < 0.0
    }
}

/// Merge day plans with rest days in canonical order.
/// If a day appears in several plans, the first one wins.
pub fn assemble(plans: &[DayPlan], weekly_target_kcal: f64) -> WeeklySchedule {
    let entries: Vec<ScheduleEntry> = WEEK
        .iter()
        .map(|&day| {
            plans
                .iter()
                .find(|p| p.day == day)
                .map(ScheduleEntry::from)
                .unwrap_or_else(|| ScheduleEntry::rest(day))
        })
        .collect();

    let total_kcal: f64 = entries.iter().map(|e| e.estimated_kcal).sum();

    WeeklySchedule {
        entries,
        total_kcal,
        target_kcal: weekly_target_kcal,
        deviation_kcal: total_kcal - weekly_target_kcal,
    }
}
