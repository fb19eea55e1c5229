//! Text and JSON rendering of a planned week.

use anyhow::{Context, Result};
use chrono::Weekday;
use weekfit_core::PlanOutcome;

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One line summarizing total vs. target
pub fn summary_line(outcome: &PlanOutcome) -> String {
    let s = &outcome.schedule;
    format!(
        "Total kcal = {:.1} (target = {:.1}) | deviation = {:+.1}",
        s.total_kcal, s.target_kcal, s.deviation_kcal
    )
}

pub fn render_table(outcome: &PlanOutcome) -> String {
    let entries = &outcome.schedule.entries;
    let activity_width = entries
        .iter()
        .map(|e| e.activity.chars().count())
        .max()
        .unwrap_or(0)
        .max("Activity".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:<10}  {:<aw$}  {:>7}  {:>7}\n",
        "Day",
        "Activity",
        "Minutes",
        "kcal",
        aw = activity_width
    ));
    out.push_str(&format!("{}\n", "-".repeat(10 + 2 + activity_width + 2 + 7 + 2 + 7)));
    for e in entries {
        out.push_str(&format!(
            "{:<10}  {:<aw$}  {:>7}  {:>7.1}\n",
            day_name(e.day),
            e.activity,
            e.minutes,
            e.estimated_kcal,
            aw = activity_width
        ));
    }
    out.push('\n');
    out.push_str(&summary_line(outcome));
    out.push('\n');
    out
}

pub fn render_json(outcome: &PlanOutcome) -> Result<String> {
    serde_json::to_string_pretty(outcome).context("serialize schedule")
}
