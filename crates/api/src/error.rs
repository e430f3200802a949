//! Mapping from domain and storage errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;

use moneymatic_core::budget::AnalyticsError;
use moneymatic_shared::AppError;

/// Renders an error as `{ "error": code, "message": text }`.
///
/// Server-side errors only expose a generic message.
pub fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "error": err.error_code().to_lowercase(),
            "message": err.public_message(),
        })),
    )
        .into_response()
}

/// Shorthand for a 400 with a client-facing message.
pub fn validation(message: impl ToString) -> Response {
    error_response(&AppError::Validation(message.to_string()))
}

/// Shorthand for a 404 with a client-facing message.
pub fn not_found(message: &str) -> Response {
    error_response(&AppError::NotFound(message.to_string()))
}

/// Shorthand for a 401 with a client-facing message.
pub fn unauthorized(message: &str) -> Response {
    error_response(&AppError::Unauthorized(message.to_string()))
}

/// Classifies a database error. Connection failures become 503.
#[must_use]
pub fn from_db(err: &DbErr) -> AppError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => AppError::ServiceUnavailable(err.to_string()),
        _ => AppError::Database(err.to_string()),
    }
}

/// Classifies an analytics error.
#[must_use]
pub fn from_analytics(err: AnalyticsError) -> AppError {
    match err {
        AnalyticsError::InvalidArgument(msg) => AppError::Validation(msg),
        AnalyticsError::DataUnavailable(msg) => AppError::ServiceUnavailable(msg),
        AnalyticsError::IntegrityViolation(msg) => AppError::Duplicate(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn test_connection_errors_are_unavailable() {
        let err = DbErr::Conn(RuntimeErr::Internal("refused".to_string()));
        assert!(matches!(from_db(&err), AppError::ServiceUnavailable(_)));

        let err = DbErr::Custom("bad".to_string());
        assert!(matches!(from_db(&err), AppError::Database(_)));
    }

    #[test]
    fn test_analytics_mapping() {
        assert_eq!(
            from_analytics(AnalyticsError::duplicate_budget()).status_code(),
            400
        );
        assert_eq!(
            from_analytics(AnalyticsError::data_unavailable("down")).status_code(),
            503
        );
        assert_eq!(
            from_analytics(AnalyticsError::invalid_argument("month")).status_code(),
            400
        );
    }

    #[test]
    fn test_error_response_status() {
        let response = error_response(&AppError::NotFound("Budget not found".to_string()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = error_response(&AppError::Internal("secret detail".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
