//! weekfit-core: activity selection and duration allocation for weekly exercise plans

pub mod allocate;
pub mod assign;
pub mod catalog;
pub mod category;
pub mod error;
pub mod planner;
pub mod pool;
pub mod schedule;

pub use allocate::{allocate_durations, DayPlan};
pub use assign::{assign_days, DayPick};
pub use catalog::{estimate_kcal, ActivityRecord, Catalog};
pub use category::{parse_categories, tag, CategoryTag};
pub use error::PlanError;
pub use planner::{plan_week, PlanOutcome, PlanRequest, PlanSettings};
pub use pool::{build_pool, Candidate, CandidatePool, UnderRepresented};
pub use schedule::{assemble, canonical_days, ScheduleEntry, WeeklySchedule, REST_ACTIVITY, WEEK};
