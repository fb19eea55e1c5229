//! Duration allocation: stretch the fastest-burning days until the weekly
//! target is met or every day sits at the upper bound.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assign::DayPick;
use crate::catalog::estimate_kcal;

pub const DEFAULT_MINUTES_LOW: u32 = 60;
pub const DEFAULT_MINUTES_HIGH: u32 = 120;

/// Planned session for one selected day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    pub day: Weekday,
    pub activity_name: String,
    pub minutes: u32,
    pub estimated_kcal: f64,
    pub calorie_coefficient: f64,
}

impl DayPlan {
    fn baseline(pick: &DayPick, minutes: u32, weight_kg: f64) -> Self {
        Self {
            day: pick.day,
            activity_name: pick.activity_name.clone(),
            minutes,
            estimated_kcal: estimate_kcal(pick.calorie_coefficient, weight_kg, minutes),
            calorie_coefficient: pick.calorie_coefficient,
        }
    }

    /// kcal burned per extra minute at this weight
    pub fn rate_per_minute(&self, weight_kg: f64) -> f64 {
        self.calorie_coefficient * weight_kg / 60.0
    }
}

/// Allocate minutes to each pick. Output order matches `picks`.
///
/// Every day starts at `minutes_low`. If that already reaches the target the
/// baseline is returned as is. Otherwise days are extended in descending
/// burn-rate order, never past `minutes_high`. The result may overshoot the
/// target, and undershoots when total capacity is insufficient.
pub fn allocate_durations(
    minutes_low: u32,
    minutes_high: u32,
    picks: &[DayPick],
    weight_kg: f64,
    weekly_target_kcal: f64,
) -> Vec<DayPlan> {
    let mut plans: Vec<DayPlan> = picks
        .iter()
        .map(|p| DayPlan::baseline(p, minutes_low, weight_kg))
        .collect();

    let total: f64 = plans.iter().map(|p| p.estimated_kcal).sum();
    let mut deficit = weekly_target_kcal - total;
    if deficit <= 0.0 {
        return plans;
    }

    let rates: Vec<f64> = plans.iter().map(|p| p.rate_per_minute(weight_kg)).collect();
    let mut remaining: Vec<u32> = vec![minutes_high.saturating_sub(minutes_low); plans.len()];

    let mut order: Vec<usize> = (0..plans.len()).collect();
    order.sort_by(|&a, &b| rates[b].total_cmp(&rates[a]));

    for i in order {
        if deficit <= 0.0 {
            break;
        }
        let capacity = remaining[i];
        let rate = rates[i];
        if capacity == 0 || rate <= 0.0 {
            continue;
        }

        let needed = (deficit / rate).ceil();
        let add = if needed >= capacity as f64 {
            capacity
        } else {
            (needed as u32).max(1)
        };

        let plan = &mut plans[i];
        let before = plan.estimated_kcal;
        plan.minutes += add;
        plan.estimated_kcal = estimate_kcal(plan.calorie_coefficient, weight_kg, plan.minutes);
        deficit -= plan.estimated_kcal - before;
        remaining[i] -= add;

        debug!(
            day = %plan.day,
            activity = %plan.activity_name,
            added_minutes = add,
            minutes = plan.minutes,
            deficit,
            "extended session"
        );
    }

    plans
}
