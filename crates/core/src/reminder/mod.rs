//! Bill reminders.

pub mod types;
pub mod validation;

pub use types::{Reminder, ReminderFrequency};
pub use validation::{ReminderDraft, ReminderError, ReminderPayload};
