//! Budget repository: CRUD and period lookups.
//!
//! The `(user, category, month, year, period)` uniqueness rule lives in the
//! schema; violations come back as `BudgetRepoError::Duplicate`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use moneymatic_core::budget::{
    AnalyticsError, Budget, BudgetChanges, BudgetPeriod, NewBudget,
};
use moneymatic_shared::types::{BudgetId, UserId};

use super::is_unique_violation;
use crate::entities::{budgets, sea_orm_active_enums::BudgetPeriod as DbBudgetPeriod};

/// Error types for budget operations.
#[derive(Debug, thiserror::Error)]
pub enum BudgetRepoError {
    /// A budget already exists for the category and period.
    #[error("Budget already exists for this category and period")]
    Duplicate,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl BudgetRepoError {
    fn classify(err: DbErr) -> Self {
        if is_unique_violation(&err) {
            Self::Duplicate
        } else {
            Self::Database(err)
        }
    }
}

impl From<BudgetRepoError> for AnalyticsError {
    fn from(err: BudgetRepoError) -> Self {
        match err {
            BudgetRepoError::Duplicate => Self::duplicate_budget(),
            BudgetRepoError::Database(e) => Self::data_unavailable(e.to_string()),
        }
    }
}

/// Converts a row into the domain type.
#[must_use]
pub fn to_domain(model: budgets::Model) -> Budget {
    Budget {
        id: BudgetId::from_uuid(model.id),
        user_id: UserId::from_uuid(model.user_id),
        category: model.category,
        limit: model.limit,
        period: model.period.into(),
        month: u32::try_from(model.month).unwrap_or_default(),
        year: model.year,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

/// Budget repository.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's budgets for one month and period kind, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_period(
        &self,
        user_id: Uuid,
        year: i32,
        month: u32,
        period: BudgetPeriod,
    ) -> Result<Vec<Budget>, DbErr> {
        let Ok(month) = i32::try_from(month) else {
            return Ok(Vec::new());
        };

        let rows = budgets::Entity::find()
            .filter(budgets::Column::UserId.eq(user_id))
            .filter(budgets::Column::Year.eq(year))
            .filter(budgets::Column::Month.eq(month))
            .filter(budgets::Column::Period.eq(DbBudgetPeriod::from(period)))
            .order_by_asc(budgets::Column::CreatedAt)
            .order_by_asc(budgets::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(to_domain).collect())
    }

    /// Finds a budget owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_owned(&self, user_id: Uuid, id: Uuid) -> Result<Option<budgets::Model>, DbErr> {
        budgets::Entity::find_by_id(id)
            .filter(budgets::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    /// Inserts a validated budget.
    ///
    /// # Errors
    ///
    /// Returns `BudgetRepoError::Duplicate` when the category already has a
    /// budget for the period.
    pub async fn create(&self, user_id: Uuid, input: NewBudget) -> Result<Budget, BudgetRepoError> {
        let now = Utc::now().into();
        let model = budgets::ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(user_id),
            category: Set(input.category),
            limit: Set(input.limit),
            period: Set(input.period.into()),
            month: Set(i32::try_from(input.month).unwrap_or_default()),
            year: Set(input.year),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(BudgetRepoError::classify)?;

        Ok(to_domain(model))
    }

    /// Applies a partial update. Returns `None` when the row is not the
    /// user's.
    ///
    /// # Errors
    ///
    /// Returns `BudgetRepoError::Duplicate` when the change collides with
    /// another budget.
    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        changes: BudgetChanges,
    ) -> Result<Option<Budget>, BudgetRepoError> {
        let Some(existing) = self.find_owned(user_id, id).await? else {
            return Ok(None);
        };

        let mut active: budgets::ActiveModel = existing.into();
        if let Some(category) = changes.category {
            active.category = Set(category);
        }
        if let Some(limit) = changes.limit {
            active.limit = Set(limit);
        }
        if let Some(period) = changes.period {
            active.period = Set(period.into());
        }
        if let Some(month) = changes.month {
            active.month = Set(i32::try_from(month).unwrap_or_default());
        }
        if let Some(year) = changes.year {
            active.year = Set(year);
        }
        active.updated_at = Set(Utc::now().into());

        let model = active
            .update(&self.db)
            .await
            .map_err(BudgetRepoError::classify)?;
        Ok(Some(to_domain(model)))
    }

    /// Deletes a budget. Returns false when the row is not the user's.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, DbErr> {
        let Some(existing) = self.find_owned(user_id, id).await? else {
            return Ok(false);
        };
        existing.delete(&self.db).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_maps_to_integrity_violation() {
        let err: AnalyticsError = BudgetRepoError::Duplicate.into();
        assert_eq!(
            err,
            AnalyticsError::IntegrityViolation(
                "A budget for this category already exists for the selected period".to_string()
            )
        );
    }

    #[test]
    fn test_database_error_maps_to_data_unavailable() {
        let err: AnalyticsError =
            BudgetRepoError::Database(DbErr::Custom("pool timed out".to_string())).into();
        assert!(matches!(err, AnalyticsError::DataUnavailable(msg) if msg.contains("pool timed out")));
    }

    #[test]
    fn test_non_sql_error_is_not_a_duplicate() {
        let err = BudgetRepoError::classify(DbErr::Custom("boom".to_string()));
        assert!(matches!(err, BudgetRepoError::Database(_)));
    }
}
