//! Candidate pool: catalog entries whose tags intersect the chosen categories.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{ActivityRecord, Catalog};
use crate::category::{tag, CategoryTag};
use crate::error::PlanError;

/// Default minimum number of matches before a category is flagged
pub const DEFAULT_MIN_PER_CATEGORY: usize = 3;

/// A catalog entry annotated with its tags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub record: ActivityRecord,
    pub tags: Vec<CategoryTag>,
}

impl Candidate {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn calorie_coefficient(&self) -> f64 {
        self.record.calorie_coefficient
    }
}

/// Non-fatal warning: a chosen category has too few activities
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnderRepresented {
    pub category: CategoryTag,
    pub matched: usize,
    pub minimum: usize,
}

impl std::fmt::Display for UnderRepresented {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "category '{}' only matched {} activities (minimum {})",
            self.category, self.matched, self.minimum
        )
    }
}

/// Filtered candidates in catalog order, plus any representation warnings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidatePool {
    pub candidates: Vec<Candidate>,
    pub warnings: Vec<UnderRepresented>,
}

impl CandidatePool {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of candidates carrying `category`
    pub fn count_in(&self, category: CategoryTag) -> usize {
        self.candidates
            .iter()
            .filter(|c| c.tags.contains(&category))
            .count()
    }
}

/// Build the candidate pool for the chosen categories.
///
/// An empty selection is an error. A category with fewer than
/// `min_per_category` matches is logged and recorded in `warnings`.
pub fn build_pool(
    catalog: &Catalog,
    chosen: &[CategoryTag],
    min_per_category: usize,
) -> Result<CandidatePool, PlanError> {
    if chosen.is_empty() {
        return Err(PlanError::InvalidCategory {
            reason: "no categories selected".to_string(),
            valid: CategoryTag::valid_labels(),
        });
    }

    let candidates: Vec<Candidate> = catalog
        .records()
        .iter()
        .map(|record| Candidate {
            tags: tag(&record.key),
            record: record.clone(),
        })
        .filter(|c| c.tags.iter().any(|t| chosen.contains(t)))
        .collect();

    let mut pool = CandidatePool {
        candidates,
        warnings: Vec::new(),
    };

    let mut seen = Vec::with_capacity(chosen.len());
    for &category in chosen {
        if seen.contains(&category) {
            continue;
        }
        seen.push(category);

        let matched = pool.count_in(category);
        if matched < min_per_category {
            let warning = UnderRepresented {
                category,
                matched,
                minimum: min_per_category,
            };
            warn!(%category, matched, minimum = min_per_category, "under-represented category");
            pool.warnings.push(warning);
        }
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            ActivityRecord::new("Running, 6 mph", 9.8),
            ActivityRecord::new("Tennis, singles", 8.0),
            ActivityRecord::new("Cycling, leisure", 4.0),
            ActivityRecord::new("Ballroom dancing", 3.0),
            ActivityRecord::new("Stair treadmill", 9.0),
            ActivityRecord::new("Hiking, cross country", 6.0),
        ])
    }

    #[test]
    fn test_filters_to_chosen_categories() {
        let pool = build_pool(&catalog(), &[CategoryTag::Outdoor], 3).unwrap();
        let names: Vec<_> = pool.candidates.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Running, 6 mph",
                "Cycling, leisure",
                "Stair treadmill",
                "Hiking, cross country"
            ]
        );
        assert!(pool.warnings.is_empty());
    }

    #[test]
    fn test_multi_tag_entry_counted_once() {
        let pool = build_pool(
            &catalog(),
            &[CategoryTag::Outdoor, CategoryTag::Indoor],
            1,
        )
        .unwrap();
        let stair = pool
            .candidates
            .iter()
            .filter(|c| c.name() == "Stair treadmill")
            .count();
        assert_eq!(stair, 1);
        assert_eq!(pool.count_in(CategoryTag::Indoor), 1);
    }

    #[test]
    fn test_under_represented_is_warning_not_error() {
        let pool = build_pool(&catalog(), &[CategoryTag::Sport, CategoryTag::Artistic], 3).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(
            pool.warnings,
            vec![
                UnderRepresented { category: CategoryTag::Sport, matched: 1, minimum: 3 },
                UnderRepresented { category: CategoryTag::Artistic, matched: 1, minimum: 3 },
            ]
        );
    }

    #[test]
    fn test_zero_matches_returns_empty_pool() {
        let pool = build_pool(&catalog(), &[CategoryTag::Resistance], 3).unwrap();
        assert!(pool.is_empty());
        assert_eq!(pool.warnings[0].matched, 0);
    }

    #[test]
    fn test_empty_selection_is_invalid() {
        let err = build_pool(&catalog(), &[], 3).unwrap_err();
        assert!(matches!(err, PlanError::InvalidCategory { .. }));
    }
}
