//! `SeaORM` implementation of the budget analytics store.

use moneymatic_core::budget::{
    AnalyticsError, Budget, BudgetAnalyticsStore, BudgetPeriod, DateRange,
};
use moneymatic_core::transaction::Transaction;
use moneymatic_shared::types::UserId;
use sea_orm::DatabaseConnection;
use tracing::error;

use super::budget::BudgetRepository;
use super::transaction::TransactionRepository;

/// Reads transactions and budgets for the analytics report.
#[derive(Debug, Clone)]
pub struct SeaOrmAnalyticsStore {
    transactions: TransactionRepository,
    budgets: BudgetRepository,
}

impl SeaOrmAnalyticsStore {
    /// Creates a store over a connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            transactions: TransactionRepository::new(db.clone()),
            budgets: BudgetRepository::new(db),
        }
    }
}

impl BudgetAnalyticsStore for SeaOrmAnalyticsStore {
    async fn list_transactions(
        &self,
        user_id: UserId,
        range: DateRange,
    ) -> Result<Vec<Transaction>, AnalyticsError> {
        self.transactions
            .list_in_range(user_id.into_inner(), range)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %user_id, "Failed to read transactions for report");
                AnalyticsError::data_unavailable(e.to_string())
            })
    }

    async fn list_budgets(
        &self,
        user_id: UserId,
        year: i32,
        month: u32,
        period: BudgetPeriod,
    ) -> Result<Vec<Budget>, AnalyticsError> {
        self.budgets
            .list_for_period(user_id.into_inner(), year, month, period)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %user_id, "Failed to read budgets for report");
                AnalyticsError::data_unavailable(e.to_string())
            })
    }
}
