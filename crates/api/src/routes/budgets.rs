//! Budget routes: the monthly analytics report and budget CRUD.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    AppState,
    error::{error_response, from_analytics, from_db, not_found, validation},
    middleware::AuthUser,
};
use moneymatic_core::budget::{BudgetPayload, DUPLICATE_BUDGET_MESSAGE};
use moneymatic_db::{BudgetRepoError, BudgetRepository};
use moneymatic_shared::AppError;

const NOT_FOUND: &str = "Budget not found";

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budget", get(get_report).post(create_budget))
        .route("/budget/{budget_id}", put(update_budget).delete(delete_budget))
}

/// Query parameters for the report. Kept as strings so bad input falls back
/// to the current period instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// Month 1-12.
    pub month: Option<String>,
    /// Calendar year.
    pub year: Option<String>,
}

fn repo_error(err: BudgetRepoError) -> Response {
    match err {
        BudgetRepoError::Duplicate => {
            error_response(&AppError::Duplicate(DUPLICATE_BUDGET_MESSAGE.to_string()))
        }
        BudgetRepoError::Database(e) => {
            error!(error = %e, "Budget query failed");
            error_response(&from_db(&e))
        }
    }
}

/// GET /budget?month&year - Spending analytics for one month.
async fn get_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ReportQuery>,
) -> Response {
    match state
        .analytics
        .compute_budget_report(
            Some(auth.typed_id()),
            query.month.as_deref(),
            query.year.as_deref(),
        )
        .await
    {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            warn!(error = %e, user_id = %auth.user_id(), "Budget report failed");
            error_response(&from_analytics(e))
        }
    }
}

/// POST /budget - Create a budget for a category and month.
async fn create_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<BudgetPayload>,
) -> Response {
    let input = match payload.into_new() {
        Ok(input) => input,
        Err(e) => return validation(e),
    };

    let repo = BudgetRepository::new((*state.db).clone());
    match repo.create(auth.user_id(), input).await {
        Ok(budget) => {
            info!(budget_id = %budget.id, user_id = %auth.user_id(), "Budget created");
            (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Budget created successfully",
                    "budget": budget,
                })),
            )
                .into_response()
        }
        Err(e) => repo_error(e),
    }
}

/// PUT /budget/{budget_id} - Partial update of the caller's budget.
async fn update_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(budget_id): Path<String>,
    Json(payload): Json<BudgetPayload>,
) -> Response {
    let Ok(id) = Uuid::parse_str(&budget_id) else {
        return not_found(NOT_FOUND);
    };
    let changes = match payload.into_changes() {
        Ok(changes) => changes,
        Err(e) => return validation(e),
    };

    let repo = BudgetRepository::new((*state.db).clone());
    match repo.update(auth.user_id(), id, changes).await {
        Ok(Some(budget)) => {
            info!(budget_id = %id, "Budget updated");
            Json(json!({
                "message": "Budget updated successfully",
                "budget": budget,
            }))
            .into_response()
        }
        Ok(None) => not_found(NOT_FOUND),
        Err(e) => repo_error(e),
    }
}

/// DELETE /budget/{budget_id}
async fn delete_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(budget_id): Path<String>,
) -> Response {
    let Ok(id) = Uuid::parse_str(&budget_id) else {
        return not_found(NOT_FOUND);
    };

    let repo = BudgetRepository::new((*state.db).clone());
    match repo.delete(auth.user_id(), id).await {
        Ok(true) => {
            info!(budget_id = %id, "Budget deleted");
            Json(json!({ "message": "Budget deleted successfully" })).into_response()
        }
        Ok(false) => not_found(NOT_FOUND),
        Err(e) => {
            error!(error = %e, budget_id = %id, "Failed to delete budget");
            error_response(&from_db(&e))
        }
    }
}
