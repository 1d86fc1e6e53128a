//! Validation error types.
//!
//! Scoring and conversion are total functions; the only failures the core
//! reports are requests that are missing required input.

use thiserror::Error;

/// Errors raised when a request cannot be processed as given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// None of the teacher, parent, or student inputs were supplied.
    #[error("At least one data source is required")]
    MissingDataSource,

    /// A required field was absent or blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Several required fields were absent or blank.
    #[error("{0} are required")]
    MissingFields(&'static str),

    /// The requested conversion format is not one of the supported ones.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The questionnaire audience is not teacher, parent, or student.
    #[error("Unknown audience: {0}")]
    UnknownAudience(String),
}
