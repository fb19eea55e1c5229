//! Activity catalog: calorie-burn coefficients keyed by activity name.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One activity with its burn coefficient (kcal per kg body weight per hour)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityRecord {
    /// Display name as it appears in the dataset
    pub name: String,
    /// Lowercased, trimmed name used for matching and deduplication
    pub key: String,
    pub calorie_coefficient: f64,
}

impl ActivityRecord {
    pub fn new(name: impl Into<String>, calorie_coefficient: f64) -> Self {
        let name = name.into().trim().to_string();
        let key = name.to_lowercase();
        Self {
            name,
            key,
            calorie_coefficient,
        }
    }

    /// Estimated kcal for `minutes` of this activity
    pub fn estimate_kcal(&self, weight_kg: f64, minutes: u32) -> f64 {
        estimate_kcal(self.calorie_coefficient, weight_kg, minutes)
    }
}

/// kcal = coefficient * weight * hours
pub fn estimate_kcal(calorie_coefficient: f64, weight_kg: f64, minutes: u32) -> f64 {
    calorie_coefficient * weight_kg * (minutes as f64 / 60.0)
}

/// Read-only, deduplicated list of activities in dataset order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ActivityRecord>,
}

impl Catalog {
    /// Build a catalog, keeping the first record for each key.
    /// Records with an empty name or a non-positive coefficient are dropped.
    pub fn from_records(records: impl IntoIterator<Item = ActivityRecord>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|r| !r.key.is_empty())
            .filter(|r| r.calorie_coefficient.is_finite() && r.calorie_coefficient > 0.0)
            .filter(|r| seen.insert(r.key.clone()))
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up an activity by name, case-insensitively
    pub fn get(&self, name: &str) -> Option<&ActivityRecord> {
        let key = name.trim().to_lowercase();
        self.records.iter().find(|r| r.key == key)
    }
}

impl FromIterator<ActivityRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = ActivityRecord>>(iter: I) -> Self {
        Catalog::from_records(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_kcal() {
        let running = ActivityRecord::new("Running", 7.0);
        assert!((running.estimate_kcal(65.0, 60) - 455.0).abs() < 1e-9);
        assert!((running.estimate_kcal(65.0, 90) - 682.5).abs() < 1e-9);
        assert_eq!(running.estimate_kcal(65.0, 0), 0.0);
    }

    #[test]
    fn test_dedup_keeps_first() {
        let catalog = Catalog::from_records(vec![
            ActivityRecord::new("Running", 7.0),
            ActivityRecord::new("  running ", 9.0),
            ActivityRecord::new("Cycling", 5.0),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("RUNNING").unwrap().calorie_coefficient, 7.0);
        assert_eq!(catalog.records()[1].name, "Cycling");
    }

    #[test]
    fn test_invalid_records_dropped() {
        let catalog: Catalog = vec![
            ActivityRecord::new("", 3.0),
            ActivityRecord::new("Sitting", 0.0),
            ActivityRecord::new("Broken", f64::NAN),
            ActivityRecord::new("Swimming", 6.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].key, "swimming");
    }
}
