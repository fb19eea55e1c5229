//! Error taxonomy for schedule planning.

use thiserror::Error;

/// Failures that stop planning before any schedule is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// No categories were chosen, or a label is not a known category
    #[error("invalid category selection: {reason} (valid: {valid})")]
    InvalidCategory { reason: String, valid: String },

    /// Filtering left no candidate activities for the chosen categories
    #[error("no candidate activities remain for the chosen categories")]
    EmptyPool,

    /// Weight, target, or duration bounds are out of range
    #[error("invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

impl PlanError {
    pub(crate) fn invalid_parameter(parameter: &'static str, reason: impl Into<String>) -> Self {
        PlanError::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}
