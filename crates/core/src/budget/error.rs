//! Budget analytics error types.

use thiserror::Error;

/// Errors raised by budget analytics and budget persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// Caller supplied an unusable user or period.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An upstream store could not be read.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// The store rejected a write that would break a uniqueness rule.
    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),
}

impl AnalyticsError {
    /// Creates an `InvalidArgument` error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a `DataUnavailable` error.
    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self::DataUnavailable(message.into())
    }

    /// Creates the duplicate-budget `IntegrityViolation`.
    #[must_use]
    pub fn duplicate_budget() -> Self {
        Self::IntegrityViolation(DUPLICATE_BUDGET_MESSAGE.to_string())
    }
}

/// Message returned when a budget already exists for a category and period.
pub const DUPLICATE_BUDGET_MESSAGE: &str =
    "A budget for this category already exists for the selected period";
