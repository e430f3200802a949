//! Storage port read by the analytics service.

use std::future::Future;

use moneymatic_shared::types::UserId;

use super::error::AnalyticsError;
use super::period::DateRange;
use super::types::{Budget, BudgetPeriod};
use crate::transaction::Transaction;

/// Read access to a user's transactions and budgets.
///
/// Implemented by the db crate; tests use an in-memory fake. Failures are
/// reported as `AnalyticsError::DataUnavailable`.
pub trait BudgetAnalyticsStore: Send + Sync {
    /// Lists the user's transactions dated within `range`.
    fn list_transactions(
        &self,
        user_id: UserId,
        range: DateRange,
    ) -> impl Future<Output = Result<Vec<Transaction>, AnalyticsError>> + Send;

    /// Lists the user's budgets for a year, month and period kind.
    fn list_budgets(
        &self,
        user_id: UserId,
        year: i32,
        month: u32,
        period: BudgetPeriod,
    ) -> impl Future<Output = Result<Vec<Budget>, AnalyticsError>> + Send;
}
