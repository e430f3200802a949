//! Reminder repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use moneymatic_core::reminder::{Reminder, ReminderDraft};
use moneymatic_shared::types::{ReminderId, UserId};

use crate::entities::{reminders, sea_orm_active_enums::ReminderFrequency as DbReminderFrequency};

/// Converts a row into the domain type.
#[must_use]
pub fn to_domain(model: reminders::Model) -> Reminder {
    Reminder {
        id: ReminderId::from_uuid(model.id),
        user_id: UserId::from_uuid(model.user_id),
        title: model.title,
        amount: model.amount,
        due_date: model.due_date,
        frequency: model.frequency.into(),
        is_active: model.is_active,
        notes: model.notes,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

/// Reminder repository.
#[derive(Debug, Clone)]
pub struct ReminderRepository {
    db: DatabaseConnection,
}

impl ReminderRepository {
    /// Creates a new reminder repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's reminders by due date, optionally filtered by the
    /// active flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, user_id: Uuid, is_active: Option<bool>) -> Result<Vec<Reminder>, DbErr> {
        let mut select = reminders::Entity::find().filter(reminders::Column::UserId.eq(user_id));
        if let Some(is_active) = is_active {
            select = select.filter(reminders::Column::IsActive.eq(is_active));
        }

        let rows = select
            .order_by_asc(reminders::Column::DueDate)
            .order_by_asc(reminders::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(to_domain).collect())
    }

    /// Inserts a reminder.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, user_id: Uuid, draft: ReminderDraft) -> Result<Reminder, DbErr> {
        let now = Utc::now().into();
        let model = reminders::ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(user_id),
            title: Set(draft.title),
            amount: Set(draft.amount),
            due_date: Set(draft.due_date),
            frequency: Set(DbReminderFrequency::from(draft.frequency)),
            is_active: Set(draft.is_active),
            notes: Set(draft.notes),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        Ok(to_domain(model))
    }

    /// Overwrites every editable field of a user's reminder. Returns `None`
    /// when the row is not the user's.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn replace(
        &self,
        user_id: Uuid,
        id: Uuid,
        draft: ReminderDraft,
    ) -> Result<Option<Reminder>, DbErr> {
        let Some(existing) = reminders::Entity::find_by_id(id)
            .filter(reminders::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: reminders::ActiveModel = existing.into();
        active.title = Set(draft.title);
        active.amount = Set(draft.amount);
        active.due_date = Set(draft.due_date);
        active.frequency = Set(draft.frequency.into());
        active.is_active = Set(draft.is_active);
        active.notes = Set(draft.notes);
        active.updated_at = Set(Utc::now().into());

        let model = active.update(&self.db).await?;
        Ok(Some(to_domain(model)))
    }
}
