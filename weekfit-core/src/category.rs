//! Keyword-based activity classification.
//!
//! Tagging is a flat rule table evaluated in a fixed order: every primary
//! group whose keyword occurs in the activity name contributes its tag. Names
//! that match no primary group go through a single-tag fallback chain that
//! ends in `Outdoor`, so every activity gets at least one tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlanError;

/// Activity category the caller can choose from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum CategoryTag {
    Outdoor,
    Indoor,
    Sport,
    Resistance,
    Artistic,
}

impl CategoryTag {
    /// All categories in priority order
    pub const ALL: [CategoryTag; 5] = [
        CategoryTag::Outdoor,
        CategoryTag::Indoor,
        CategoryTag::Sport,
        CategoryTag::Resistance,
        CategoryTag::Artistic,
    ];

    /// Canonical label used in config files and on the command line
    pub fn label(&self) -> &'static str {
        match self {
            CategoryTag::Outdoor => "outdoor",
            CategoryTag::Indoor => "indoor",
            CategoryTag::Sport => "sport",
            CategoryTag::Resistance => "resistance",
            CategoryTag::Artistic => "artistic",
        }
    }

    /// Primary keywords for this category
    pub fn keywords(&self) -> &'static [&'static str] {
        PRIMARY_KEYWORDS
            .iter()
            .find(|(tag, _)| tag == self)
            .map(|(_, kws)| *kws)
            .unwrap_or(&[])
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            CategoryTag::Outdoor => &["ngoài trời", "ngoai troi"],
            CategoryTag::Indoor => &["trong nhà", "trong nha"],
            CategoryTag::Sport => &["thể thao", "the thao", "sports"],
            CategoryTag::Resistance => &["kháng lực", "khang luc", "strength"],
            CategoryTag::Artistic => &["nghệ thuật", "nghe thuat", "art", "dance"],
        }
    }

    /// Comma-separated list of canonical labels, for error messages
    pub fn valid_labels() -> String {
        CategoryTag::ALL
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryTag {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        CategoryTag::ALL
            .into_iter()
            .find(|c| c.label() == needle || c.aliases().contains(&needle.as_str()))
            .ok_or_else(|| PlanError::InvalidCategory {
                reason: format!("unknown category '{}'", s.trim()),
                valid: CategoryTag::valid_labels(),
            })
    }
}

/// Primary keyword groups, scanned in order. An activity may match several.
pub const PRIMARY_KEYWORDS: &[(CategoryTag, &[&str])] = &[
    (
        CategoryTag::Outdoor,
        &[
            "run", "walk", "hike", "cycling", "bike", "row", "stair", "climb", "jump rope",
            "paddle", "canoe", "kayak", "skate", "ski", "surf", "swim", "mountain", "bmx",
            "hiking", "jog",
        ],
    ),
    (
        CategoryTag::Indoor,
        &[
            "treadmill", "elliptical", "aerobic", "yoga", "stair", "indoor", "pilates",
            "stationary", "rowing machine", "step aerobics", "spin",
        ],
    ),
    (
        CategoryTag::Sport,
        &[
            "basketball", "football", "soccer", "tennis", "badminton", "squash",
            "table tennis", "volleyball", "baseball", "handball", "racquetball", "hockey",
            "rugby", "golf",
        ],
    ),
    (
        CategoryTag::Resistance,
        &[
            "weight", "lifting", "strength", "resistance", "calisthenics", "circuit",
            "body building", "pushup", "situp", "crossfit", "kettlebell",
        ],
    ),
    (
        CategoryTag::Artistic,
        &["dance", "dancing", "ballet", "ballroom", "modern", "zumba", "aerobic dance"],
    ),
];

/// Fallback chain for names no primary group matched. First hit wins.
pub const FALLBACK_KEYWORDS: &[(CategoryTag, &[&str])] = &[
    (CategoryTag::Artistic, &["dance", "yoga", "ballet", "ballroom", "zumba"]),
    (
        CategoryTag::Resistance,
        &[
            "weight", "lift", "resist", "circuit", "kettlebell", "pushup", "situp",
            "calisthenics",
        ],
    ),
    (
        CategoryTag::Sport,
        &[
            "basket", "tennis", "soccer", "football", "badminton", "squash", "volley", "golf",
            "hockey", "rugby",
        ],
    ),
    (
        CategoryTag::Indoor,
        &["treadmill", "elliptical", "indoor", "rowing machine", "step"],
    ),
];

/// Tag used when neither the primary groups nor the fallback chain match
pub const DEFAULT_TAG: CategoryTag = CategoryTag::Outdoor;

/// Classify a lowercased activity name.
/// Returns a non-empty list of distinct tags in primary-table order.
pub fn tag(activity_lower: &str) -> Vec<CategoryTag> {
    let mut tags: Vec<CategoryTag> = PRIMARY_KEYWORDS
        .iter()
        .filter(|(_, kws)| kws.iter().any(|kw| activity_lower.contains(kw)))
        .map(|(tag, _)| *tag)
        .collect();

    if tags.is_empty() {
        let fallback = FALLBACK_KEYWORDS
            .iter()
            .find(|(_, kws)| kws.iter().any(|kw| activity_lower.contains(kw)))
            .map(|(tag, _)| *tag)
            .unwrap_or(DEFAULT_TAG);
        tags.push(fallback);
    }

    tags
}

/// Parse and validate a caller's category selection.
/// Duplicates collapse; order of first mention is kept.
pub fn parse_categories<S: AsRef<str>>(labels: &[S]) -> Result<Vec<CategoryTag>, PlanError> {
    let mut out = Vec::new();
    for label in labels {
        let tag: CategoryTag = label.as_ref().parse()?;
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    if out.is_empty() {
        return Err(PlanError::InvalidCategory {
            reason: "no categories selected".to_string(),
            valid: CategoryTag::valid_labels(),
        });
    }
    Ok(out)
}
