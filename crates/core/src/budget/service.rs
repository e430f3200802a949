//! Budget analytics: joins a month's transactions against its budgets.

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use moneymatic_shared::types::UserId;

use super::clock::{Clock, SystemClock};
use super::error::AnalyticsError;
use super::period::ReportPeriod;
use super::store::BudgetAnalyticsStore;
use super::types::{Budget, BudgetAnalysis, BudgetPeriod, BudgetReport, ReportSummary};
use crate::transaction::{Transaction, TransactionType};

/// Computes budget reports from a store and a clock.
///
/// Stateless apart from its collaborators; every call performs two reads
/// and no writes.
pub struct BudgetAnalyticsService<S, C = SystemClock> {
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> Clone for BudgetAnalyticsService<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S, C> std::fmt::Debug for BudgetAnalyticsService<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetAnalyticsService").finish_non_exhaustive()
    }
}

impl<S: BudgetAnalyticsStore, C: Clock> BudgetAnalyticsService<S, C> {
    /// Creates a service over the given store and clock.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Computes the report for a user and a raw month/year pair.
    ///
    /// Month and year default to the clock's current month when absent or
    /// not integers.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` when the user is absent or nil, or the period is
    ///   out of range.
    /// - `DataUnavailable` when either store read fails.
    pub async fn compute_budget_report(
        &self,
        user_id: Option<UserId>,
        month: Option<&str>,
        year: Option<&str>,
    ) -> Result<BudgetReport, AnalyticsError> {
        let user_id = user_id
            .filter(|id| !id.is_nil())
            .ok_or_else(|| AnalyticsError::invalid_argument("a user id is required"))?;
        let period = ReportPeriod::resolve(month, year, self.clock.today())?;

        self.report_for_period(user_id, period).await
    }

    /// Computes the report for an already resolved period.
    ///
    /// # Errors
    ///
    /// Returns `DataUnavailable` when either store read fails.
    pub async fn report_for_period(
        &self,
        user_id: UserId,
        period: ReportPeriod,
    ) -> Result<BudgetReport, AnalyticsError> {
        let range = period.date_range();

        let (budgets, transactions) = tokio::try_join!(
            self.store
                .list_budgets(user_id, period.year, period.month, BudgetPeriod::Monthly),
            self.store.list_transactions(user_id, range),
        )?;

        debug!(
            user_id = %user_id,
            month = period.month,
            year = period.year,
            budgets = budgets.len(),
            transactions = transactions.len(),
            "building budget report"
        );

        Ok(build_report(period, budgets, &transactions))
    }
}

/// Aggregates transactions and enriches budgets for a period.
///
/// Transactions are assumed to already fall inside the period.
#[must_use]
pub fn build_report(
    period: ReportPeriod,
    budgets: Vec<Budget>,
    transactions: &[Transaction],
) -> BudgetReport {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    let mut spending_by_category: BTreeMap<String, Decimal> = BTreeMap::new();

    for tx in transactions {
        match tx.transaction_type {
            TransactionType::Income => total_income += tx.amount,
            TransactionType::Expense => {
                total_expenses += tx.amount;
                *spending_by_category
                    .entry(tx.category.clone())
                    .or_insert(Decimal::ZERO) += tx.amount;
            }
        }
    }

    let budgets = budgets
        .into_iter()
        .map(|budget| {
            let actual = spending_by_category
                .get(&budget.category)
                .copied()
                .unwrap_or(Decimal::ZERO);
            analyze_budget(budget, actual)
        })
        .collect();

    BudgetReport {
        period,
        summary: ReportSummary {
            total_income,
            total_expenses,
            savings: total_income - total_expenses,
        },
        spending_by_category,
        budgets,
    }
}

/// Enriches one budget with its actual spending.
///
/// A zero limit reports 0% used and is over budget as soon as anything is
/// spent.
#[must_use]
pub fn analyze_budget(budget: Budget, actual: Decimal) -> BudgetAnalysis {
    let percentage_used = if budget.limit.is_zero() {
        Decimal::ZERO
    } else {
        (actual / budget.limit * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };

    BudgetAnalysis {
        remaining: budget.limit - actual,
        percentage_used,
        is_over_budget: actual > budget.limit,
        actual_spending: actual,
        id: budget.id,
        category: budget.category,
        limit: budget.limit,
        month: budget.month,
        year: budget.year,
        period: budget.period,
    }
}
