//! Reminder payload validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::types::ReminderFrequency;
use crate::input::{is_blank, parse_date, parse_positive_amount};

/// Reasons a reminder payload is rejected. Display strings go to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReminderError {
    /// Title or due date missing.
    #[error("Please provide title and dueDate")]
    MissingFields,

    /// Frequency is not a known value.
    #[error("Frequency must be one of: one-time, weekly, monthly, yearly")]
    InvalidFrequency,

    /// Due date does not parse.
    #[error("dueDate must be a valid date")]
    InvalidDueDate,

    /// Amount is present but not a positive number.
    #[error("Amount must be a positive number")]
    InvalidAmount,
}

/// Raw upsert body. With `id` it replaces an existing reminder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPayload {
    /// Existing reminder to replace.
    pub id: Option<String>,
    /// Short label.
    pub title: Option<String>,
    /// Expected amount.
    pub amount: Option<Value>,
    /// `YYYY-MM-DD` or RFC 3339.
    pub due_date: Option<String>,
    /// Recurrence, default `one-time`.
    pub frequency: Option<String>,
    /// Default true.
    pub is_active: Option<bool>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// The full set of values written on create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDraft {
    /// Short label.
    pub title: String,
    /// Expected amount.
    pub amount: Option<Decimal>,
    /// Due date.
    pub due_date: NaiveDate,
    /// Recurrence.
    pub frequency: ReminderFrequency,
    /// Whether the reminder is shown.
    pub is_active: bool,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl ReminderPayload {
    /// Splits off the target id (blank ids count as absent) and validates
    /// the rest.
    ///
    /// # Errors
    ///
    /// Returns the first rule the payload breaks.
    pub fn into_draft(self) -> Result<(Option<String>, ReminderDraft), ReminderError> {
        let (Some(title), Some(raw_due)) = (
            self.title.filter(|t| !t.trim().is_empty()),
            self.due_date.filter(|d| !d.trim().is_empty()),
        ) else {
            return Err(ReminderError::MissingFields);
        };

        let frequency = match self.frequency.as_deref() {
            None | Some("") => ReminderFrequency::OneTime,
            Some(raw) => ReminderFrequency::parse(raw).ok_or(ReminderError::InvalidFrequency)?,
        };
        let due_date = parse_date(&raw_due).ok_or(ReminderError::InvalidDueDate)?;
        let amount = if is_blank(self.amount.as_ref()) {
            None
        } else {
            Some(
                self.amount
                    .as_ref()
                    .and_then(parse_positive_amount)
                    .ok_or(ReminderError::InvalidAmount)?,
            )
        };

        let draft = ReminderDraft {
            title,
            amount,
            due_date,
            frequency,
            is_active: self.is_active.unwrap_or(true),
            notes: self.notes.filter(|n| !n.is_empty()),
        };
        Ok((self.id.filter(|id| !id.trim().is_empty()), draft))
    }
}
