//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod analytics;
pub mod budget;
pub mod reminder;
pub mod transaction;
pub mod user;

pub use analytics::SeaOrmAnalyticsStore;
pub use budget::{BudgetRepoError, BudgetRepository};
pub use reminder::ReminderRepository;
pub use transaction::TransactionRepository;
pub use user::{UserError, UserRepository};

use sea_orm::{DbErr, SqlErr};

/// Whether the error is a unique-constraint violation.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
