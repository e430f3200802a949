//! Bill reminder routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    AppState,
    error::{error_response, from_db, not_found, validation},
    middleware::AuthUser,
};
use moneymatic_core::reminder::ReminderPayload;
use moneymatic_db::ReminderRepository;

const NOT_FOUND: &str = "Reminder not found";

/// Creates the reminder routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reminders", get(list_reminders).post(upsert_reminder))
}

/// Query parameters for listing reminders.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderListQuery {
    /// `true` or `false`; anything else lists every reminder.
    pub is_active: Option<String>,
}

impl ReminderListQuery {
    fn active_filter(&self) -> Option<bool> {
        match self.is_active.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }
}

/// GET /reminders - The caller's reminders by due date.
async fn list_reminders(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ReminderListQuery>,
) -> Response {
    let repo = ReminderRepository::new((*state.db).clone());

    match repo.list(auth.user_id(), query.active_filter()).await {
        Ok(reminders) => Json(json!({ "reminders": reminders })).into_response(),
        Err(e) => {
            error!(error = %e, user_id = %auth.user_id(), "Failed to list reminders");
            error_response(&from_db(&e))
        }
    }
}

/// POST /reminders - Create a reminder, or replace one when `id` is given.
async fn upsert_reminder(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<ReminderPayload>,
) -> Response {
    let (id, draft) = match payload.into_draft() {
        Ok(parts) => parts,
        Err(e) => return validation(e),
    };
    let repo = ReminderRepository::new((*state.db).clone());

    let Some(raw_id) = id else {
        return match repo.create(auth.user_id(), draft).await {
            Ok(reminder) => {
                info!(reminder_id = %reminder.id, user_id = %auth.user_id(), "Reminder created");
                (
                    StatusCode::CREATED,
                    Json(json!({
                        "message": "Reminder created successfully",
                        "reminder": reminder,
                    })),
                )
                    .into_response()
            }
            Err(e) => {
                error!(error = %e, user_id = %auth.user_id(), "Failed to create reminder");
                error_response(&from_db(&e))
            }
        };
    };

    let Ok(reminder_id) = Uuid::parse_str(&raw_id) else {
        return not_found(NOT_FOUND);
    };
    match repo.replace(auth.user_id(), reminder_id, draft).await {
        Ok(Some(reminder)) => {
            info!(reminder_id = %reminder_id, "Reminder updated");
            Json(json!({
                "message": "Reminder updated successfully",
                "reminder": reminder,
            }))
            .into_response()
        }
        Ok(None) => not_found(NOT_FOUND),
        Err(e) => {
            error!(error = %e, reminder_id = %reminder_id, "Failed to update reminder");
            error_response(&from_db(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("true"), Some(true))]
    #[case(Some("false"), Some(false))]
    #[case(Some("yes"), None)]
    #[case(None, None)]
    fn test_active_filter(#[case] raw: Option<&str>, #[case] expected: Option<bool>) {
        let query = ReminderListQuery {
            is_active: raw.map(str::to_string),
        };
        assert_eq!(query.active_filter(), expected);
    }
}
