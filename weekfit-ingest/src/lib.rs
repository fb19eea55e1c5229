//! weekfit-ingest: exercise dataset loading and day-label normalization.

pub mod dataset;
pub mod days;

pub use dataset::{load_activity_catalog, read_activity_catalog};
pub use days::{parse_day_label, parse_day_list};
