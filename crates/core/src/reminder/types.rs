//! Reminder data types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use moneymatic_shared::types::{ReminderId, UserId};

/// How often a reminder recurs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderFrequency {
    /// Fires once.
    #[default]
    OneTime,
    /// Every week.
    Weekly,
    /// Every month.
    Monthly,
    /// Every year.
    Yearly,
}

impl ReminderFrequency {
    /// All accepted values, in display order.
    pub const ALL: [Self; 4] = [Self::OneTime, Self::Weekly, Self::Monthly, Self::Yearly];

    /// Returns the stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneTime => "one-time",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Parses the stored string form.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == raw)
    }
}

/// A dated bill or payment note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Reminder ID.
    pub id: ReminderId,
    /// Owner.
    pub user_id: UserId,
    /// Short label.
    pub title: String,
    /// Expected amount, if known.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    /// Next due date.
    pub due_date: NaiveDate,
    /// Recurrence.
    pub frequency: ReminderFrequency,
    /// Whether the reminder is shown.
    pub is_active: bool,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_frequency_round_trips_through_str() {
        for frequency in ReminderFrequency::ALL {
            assert_eq!(ReminderFrequency::parse(frequency.as_str()), Some(frequency));
        }
        assert_eq!(ReminderFrequency::parse("daily"), None);
        assert_eq!(
            serde_json::to_value(ReminderFrequency::OneTime).unwrap(),
            json!("one-time")
        );
    }

    #[test]
    fn test_reminder_without_amount_serializes_null() {
        let now = Utc::now();
        let reminder = Reminder {
            id: ReminderId::new(),
            user_id: UserId::new(),
            title: "Rent".to_string(),
            amount: None,
            due_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            frequency: ReminderFrequency::Monthly,
            is_active: true,
            notes: None,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&reminder).unwrap();
        assert_eq!(value["amount"], json!(null));
        assert_eq!(value["dueDate"], "2024-04-01");
        assert_eq!(value["frequency"], "monthly");
        assert_eq!(value["isActive"], true);
    }
}
