//! Day assignment: one activity per selected day.
//!
//! Candidates are ranked by how close a reference-length session comes to the
//! per-day share of the weekly target. Each day takes the best-ranked
//! candidate not used in the previous two picks, relaxing to "differs from the
//! previous pick" and finally to the overall best when the pool is too small.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::estimate_kcal;
use crate::error::PlanError;
use crate::pool::{Candidate, CandidatePool};

/// Default reference session length used for ranking
pub const DEFAULT_REFERENCE_MINUTES: u32 = 60;

/// Number of previous picks an activity must not repeat within
pub const REPEAT_WINDOW: usize = 2;

/// The activity chosen for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPick {
    pub day: Weekday,
    pub activity_name: String,
    pub calorie_coefficient: f64,
}

struct Ranked<'a> {
    candidate: &'a Candidate,
    score: f64,
}

/// Rank the pool by distance from the per-day target. Ties keep catalog order.
fn rank<'a>(
    pool: &'a CandidatePool,
    target_per_day: f64,
    weight_kg: f64,
    reference_minutes: u32,
) -> Vec<Ranked<'a>> {
    let mut ranked: Vec<Ranked<'a>> = pool
        .candidates
        .iter()
        .map(|candidate| Ranked {
            score: (estimate_kcal(candidate.calorie_coefficient(), weight_kg, reference_minutes)
                - target_per_day)
                .abs(),
            candidate,
        })
        .collect();
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    ranked
}

/// Assign one activity to each day, in the order given.
pub fn assign_days(
    days: &[Weekday],
    pool: &CandidatePool,
    weekly_target_kcal: f64,
    weight_kg: f64,
    reference_minutes: u32,
) -> Result<Vec<DayPick>, PlanError> {
    if pool.is_empty() {
        return Err(PlanError::EmptyPool);
    }

    let target_per_day = weekly_target_kcal / days.len().max(1) as f64;
    let ranked = rank(pool, target_per_day, weight_kg, reference_minutes);

    let mut picks: Vec<DayPick> = Vec::with_capacity(days.len());
    for &day in days {
        let recent: Vec<&str> = picks
            .iter()
            .rev()
            .take(REPEAT_WINDOW)
            .map(|p| p.activity_name.as_str())
            .collect();
        let previous = recent.first().copied();

        let chosen = ranked
            .iter()
            .find(|r| !recent.contains(&r.candidate.name()))
            .or_else(|| ranked.iter().find(|r| Some(r.candidate.name()) != previous))
            .unwrap_or(&ranked[0]);

        debug!(
            day = %day,
            activity = chosen.candidate.name(),
            score = chosen.score,
            "picked activity"
        );

        picks.push(DayPick {
            day,
            activity_name: chosen.candidate.name().to_string(),
            calorie_coefficient: chosen.candidate.calorie_coefficient(),
        });
    }

    Ok(picks)
}
