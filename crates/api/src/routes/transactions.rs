//! Income and expense transaction routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    AppState,
    error::{error_response, from_db, not_found, validation},
    middleware::AuthUser,
};
use moneymatic_core::transaction::{TransactionListParams, TransactionPayload};
use moneymatic_db::TransactionRepository;

const NOT_FOUND: &str = "Transaction not found";

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions).post(create_transaction))
        .route(
            "/transactions/{transaction_id}",
            put(update_transaction).delete(delete_transaction),
        )
}

/// GET /transactions - Filtered, sorted, paginated listing.
async fn list_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<TransactionListParams>,
) -> Response {
    let query = params.into_query();
    let repo = TransactionRepository::new((*state.db).clone());

    match repo.list(auth.user_id(), &query).await {
        Ok((transactions, total)) => Json(json!({
            "transactions": transactions,
            "pagination": query.page.meta(total),
        }))
        .into_response(),
        Err(e) => {
            error!(error = %e, user_id = %auth.user_id(), "Failed to list transactions");
            error_response(&from_db(&e))
        }
    }
}

/// POST /transactions - Record an income or expense.
async fn create_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<TransactionPayload>,
) -> Response {
    let input = match payload.into_new() {
        Ok(input) => input,
        Err(e) => return validation(e),
    };

    let repo = TransactionRepository::new((*state.db).clone());
    match repo.create(auth.user_id(), input).await {
        Ok(transaction) => {
            info!(
                transaction_id = %transaction.id,
                user_id = %auth.user_id(),
                "Transaction created"
            );
            (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Transaction created successfully",
                    "transaction": transaction,
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, user_id = %auth.user_id(), "Failed to create transaction");
            error_response(&from_db(&e))
        }
    }
}

/// PUT /transactions/{transaction_id} - Partial update of the caller's transaction.
async fn update_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(transaction_id): Path<String>,
    Json(payload): Json<TransactionPayload>,
) -> Response {
    let Ok(id) = Uuid::parse_str(&transaction_id) else {
        return not_found(NOT_FOUND);
    };
    let changes = match payload.into_changes() {
        Ok(changes) => changes,
        Err(e) => return validation(e),
    };

    let repo = TransactionRepository::new((*state.db).clone());
    match repo.update(auth.user_id(), id, changes).await {
        Ok(Some(transaction)) => {
            info!(transaction_id = %id, "Transaction updated");
            Json(json!({
                "message": "Transaction updated successfully",
                "transaction": transaction,
            }))
            .into_response()
        }
        Ok(None) => not_found(NOT_FOUND),
        Err(e) => {
            error!(error = %e, transaction_id = %id, "Failed to update transaction");
            error_response(&from_db(&e))
        }
    }
}

/// DELETE /transactions/{transaction_id}
async fn delete_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(transaction_id): Path<String>,
) -> Response {
    let Ok(id) = Uuid::parse_str(&transaction_id) else {
        return not_found(NOT_FOUND);
    };

    let repo = TransactionRepository::new((*state.db).clone());
    match repo.delete(auth.user_id(), id).await {
        Ok(true) => {
            info!(transaction_id = %id, "Transaction deleted");
            Json(json!({ "message": "Transaction deleted successfully" })).into_response()
        }
        Ok(false) => not_found(NOT_FOUND),
        Err(e) => {
            error!(error = %e, transaction_id = %id, "Failed to delete transaction");
            error_response(&from_db(&e))
        }
    }
}
