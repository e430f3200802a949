//! Transaction validation errors.

use thiserror::Error;

/// Reasons a transaction payload is rejected.
///
/// The display strings are shown to API clients as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// A required field is absent or blank.
    #[error("Please provide type, amount, category, and date")]
    MissingFields,

    /// Type is neither `income` nor `expense`.
    #[error("Type must be 'income' or 'expense'")]
    InvalidType,

    /// Amount is not a positive number.
    #[error("Amount must be a positive number")]
    InvalidAmount,

    /// Date is not `YYYY-MM-DD` or RFC 3339.
    #[error("Date must be a valid date")]
    InvalidDate,

    /// Category was set to an empty string.
    #[error("Category cannot be empty")]
    EmptyCategory,
}
