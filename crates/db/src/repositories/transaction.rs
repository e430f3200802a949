//! Transaction repository: listing, CRUD and period reads.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};
use uuid::Uuid;

use moneymatic_core::budget::DateRange;
use moneymatic_core::transaction::{
    NewTransaction, SortField, SortOrder, Transaction, TransactionChanges, TransactionFilter,
    TransactionQuery, TransactionSort,
};
use moneymatic_shared::types::{TransactionId, UserId};

use crate::entities::{sea_orm_active_enums::TransactionType as DbTransactionType, transactions};

/// Converts a row into the domain type.
#[must_use]
pub fn to_domain(model: transactions::Model) -> Transaction {
    Transaction {
        id: TransactionId::from_uuid(model.id),
        user_id: UserId::from_uuid(model.user_id),
        transaction_type: model.transaction_type.into(),
        amount: model.amount,
        category: model.category,
        description: model.description,
        date: model.date,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

/// Transaction repository.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists one page of a user's transactions and the total match count.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        user_id: Uuid,
        query: &TransactionQuery,
    ) -> Result<(Vec<Transaction>, u64), DbErr> {
        let select = filtered(user_id, &query.filter);

        let (rows, total) = tokio::try_join!(
            sorted(select.clone(), query.sort)
                .offset(query.page.offset())
                .limit(query.page.limit)
                .all(&self.db),
            select.count(&self.db),
        )?;

        Ok((rows.into_iter().map(to_domain).collect(), total))
    }

    /// Lists a user's transactions dated within `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_in_range(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<Transaction>, DbErr> {
        let rows = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id))
            .filter(transactions::Column::Date.between(range.first_day, range.last_day))
            .order_by_asc(transactions::Column::Date)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(to_domain).collect())
    }

    /// Finds a transaction owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_owned(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<transactions::Model>, DbErr> {
        transactions::Entity::find_by_id(id)
            .filter(transactions::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    /// Inserts a validated transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, user_id: Uuid, input: NewTransaction) -> Result<Transaction, DbErr> {
        let now = Utc::now().into();
        let model = transactions::ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(user_id),
            transaction_type: Set(DbTransactionType::from(input.transaction_type)),
            amount: Set(input.amount),
            category: Set(input.category),
            description: Set(input.description),
            date: Set(input.date),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        Ok(to_domain(model))
    }

    /// Applies a partial update. Returns `None` when the row is not the
    /// user's.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        changes: TransactionChanges,
    ) -> Result<Option<Transaction>, DbErr> {
        let Some(existing) = self.find_owned(user_id, id).await? else {
            return Ok(None);
        };

        let mut active: transactions::ActiveModel = existing.into();
        if let Some(transaction_type) = changes.transaction_type {
            active.transaction_type = Set(transaction_type.into());
        }
        if let Some(amount) = changes.amount {
            active.amount = Set(amount);
        }
        if let Some(category) = changes.category {
            active.category = Set(category);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(date) = changes.date {
            active.date = Set(date);
        }
        active.updated_at = Set(Utc::now().into());

        let model = active.update(&self.db).await?;
        Ok(Some(to_domain(model)))
    }

    /// Deletes a transaction. Returns false when the row is not the user's.
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

/// `LIKE` pattern matching `search` anywhere, with wildcards taken literally.
fn contains_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn filtered(user_id: Uuid, filter: &TransactionFilter) -> Select<transactions::Entity> {
    let mut select = transactions::Entity::find().filter(transactions::Column::UserId.eq(user_id));

    if let Some(search) = &filter.search {
        select = select.filter(
            Condition::any()
                .add(transactions::Column::Description.like(contains_pattern(search)))
                .add(transactions::Column::Category.like(contains_pattern(search))),
        );
    }
    if let Some(category) = &filter.category {
        select = select.filter(transactions::Column::Category.eq(category.as_str()));
    }
    if let Some(transaction_type) = filter.transaction_type {
        select = select
            .filter(transactions::Column::TransactionType.eq(DbTransactionType::from(transaction_type)));
    }
    if let Some(from) = filter.date_from {
        select = select.filter(transactions::Column::Date.gte(from));
    }
    if let Some(to) = filter.date_to {
        select = select.filter(transactions::Column::Date.lte(to));
    }
    if let Some(min) = filter.min_amount {
        select = select.filter(transactions::Column::Amount.gte(min));
    }
    if let Some(max) = filter.max_amount {
        select = select.filter(transactions::Column::Amount.lte(max));
    }

    select
}

fn sorted(select: Select<transactions::Entity>, sort: TransactionSort) -> Select<transactions::Entity> {
    let order = match sort.order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    };
    let select = match sort.field {
        SortField::Date => select.order_by(transactions::Column::Date, order),
        SortField::Amount => select.order_by(transactions::Column::Amount, order),
        SortField::CreatedAt => select.order_by_desc(transactions::Column::CreatedAt),
    };
    // Stable paging when the sort key ties.
    select.order_by_desc(transactions::Column::Id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait, Value};

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("food"), "%food%");
        assert_eq!(contains_pattern("50%"), r"%50\%%");
        assert_eq!(contains_pattern("a_b"), r"%a\_b%");
        assert_eq!(contains_pattern(r"c:\x"), r"%c:\\x%");
    }

    #[test]
    fn test_search_binds_escaped_pattern() {
        let filter = TransactionFilter {
            search: Some("%".to_string()),
            ..TransactionFilter::default()
        };
        let statement = filtered(Uuid::nil(), &filter).build(DbBackend::Postgres);

        assert!(statement.sql.contains("LIKE"));
        let values = statement.values.unwrap().0;
        assert!(values.contains(&Value::from(r"%\%%")));
    }
}
