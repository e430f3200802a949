//! Authentication routes: signup, login and the current user's profile.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;
use tracing::{error, info};

use crate::{
    AppState,
    error::{error_response, from_db, unauthorized, validation},
    middleware::AuthUser,
};
use moneymatic_core::auth::{
    MIN_PASSWORD_LEN, burn_verification, hash_password, is_acceptable_password, verify_password,
};
use moneymatic_db::{UserError, UserRepository, entities::users};
use moneymatic_shared::{
    AppError,
    auth::{
        AuthResponse, ChangePasswordRequest, LoginRequest, SignupRequest, UpdateProfileRequest,
        UserInfo, UserProfile,
    },
};

/// Public auth routes.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

/// Auth routes for signed-in users (requires auth middleware to be applied externally).
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(get_profile).put(update_profile))
        .route("/auth/me/password", put(change_password))
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn server_error(context: &str, err: &impl std::fmt::Display) -> Response {
    error!(error = %err, "{context}");
    error_response(&AppError::Internal(err.to_string()))
}

fn profile(user: users::Model) -> UserProfile {
    UserProfile {
        id: user.id,
        name: user.name,
        email: user.email,
        created_at: user.created_at.into(),
        updated_at: user.updated_at.into(),
    }
}

fn issue_token(state: &AppState, user: users::Model, message: &str, status: StatusCode) -> Response {
    match state.jwt_service.generate_token(user.id, &user.email) {
        Ok(token) => (
            status,
            Json(AuthResponse {
                message: message.to_string(),
                token,
                user: UserInfo {
                    id: user.id,
                    name: user.name,
                    email: user.email,
                },
            }),
        )
            .into_response(),
        Err(e) => server_error("Failed to generate token", &e),
    }
}

/// POST /auth/signup - Register a new user.
async fn signup(State(state): State<AppState>, Json(payload): Json<SignupRequest>) -> Response {
    let (Some(name), Some(email), Some(password)) = (
        present(payload.name),
        present(payload.email),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        return validation("Please provide name, email, and password");
    };

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => return server_error("Failed to hash password", &e),
    };

    let user_repo = UserRepository::new((*state.db).clone());
    match user_repo.create(&name, &email, &password_hash).await {
        Ok(user) => {
            info!(user_id = %user.id, "User signed up");
            issue_token(&state, user, "User created successfully", StatusCode::CREATED)
        }
        Err(UserError::DuplicateEmail(_)) => {
            error_response(&AppError::Duplicate("User already exists".to_string()))
        }
        Err(UserError::Database(e)) => {
            error!(error = %e, "Database error during signup");
            error_response(&from_db(&e))
        }
        Err(e) => server_error("Signup failed", &e),
    }
}

/// POST /auth/login - Authenticate and return a token.
async fn login(State(state): State<AppState>, Json(payload): Json<LoginRequest>) -> Response {
    let (Some(email), Some(password)) = (
        present(payload.email),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        return validation("Please provide email and password");
    };

    let user_repo = UserRepository::new((*state.db).clone());
    let user = match user_repo.find_by_email(&email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            burn_verification(&password);
            info!("Login attempt for unknown email");
            return unauthorized("Invalid credentials");
        }
        Err(e) => {
            error!(error = %e, "Database error during login");
            return error_response(&from_db(&e));
        }
    };

    match verify_password(&password, &user.password_hash) {
        Ok(true) => {
            info!(user_id = %user.id, "User logged in");
            issue_token(&state, user, "Login successful", StatusCode::OK)
        }
        Ok(false) => {
            info!(user_id = %user.id, "Failed login attempt - invalid password");
            unauthorized("Invalid credentials")
        }
        Err(e) => server_error("Password verification error", &e),
    }
}

/// GET /auth/me - Current user's profile.
async fn get_profile(State(state): State<AppState>, auth: AuthUser) -> Response {
    let user_repo = UserRepository::new((*state.db).clone());

    match user_repo.find_by_id(auth.user_id()).await {
        Ok(Some(user)) => Json(json!({ "user": profile(user) })).into_response(),
        Ok(None) => unauthorized("User not found"),
        Err(e) => {
            error!(error = %e, user_id = %auth.user_id(), "Failed to load profile");
            error_response(&from_db(&e))
        }
    }
}

/// PUT /auth/me - Update name and email.
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Response {
    let (Some(name), Some(email)) = (present(payload.name), present(payload.email)) else {
        return validation("Name and email are required");
    };

    let user_repo = UserRepository::new((*state.db).clone());
    match user_repo.update_profile(auth.user_id(), &name, &email).await {
        Ok(user) => {
            info!(user_id = %user.id, "Profile updated");
            Json(json!({
                "message": "Profile updated successfully",
                "user": profile(user),
            }))
            .into_response()
        }
        Err(UserError::DuplicateEmail(_)) => validation("Email already in use"),
        Err(UserError::NotFound(_)) => unauthorized("User not found"),
        Err(UserError::Database(e)) => {
            error!(error = %e, user_id = %auth.user_id(), "Failed to update profile");
            error_response(&from_db(&e))
        }
    }
}

/// PUT /auth/me/password - Change password after verifying the current one.
async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> Response {
    let (Some(current), Some(new)) = (
        payload.current_password.filter(|p| !p.is_empty()),
        payload.new_password.filter(|p| !p.is_empty()),
    ) else {
        return validation("Current password and new password are required");
    };
    if !is_acceptable_password(&new) {
        return validation(format!(
            "New password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }

    let user_repo = UserRepository::new((*state.db).clone());
    let user = match user_repo.find_by_id(auth.user_id()).await {
        Ok(Some(user)) => user,
        Ok(None) => return unauthorized("User not found"),
        Err(e) => {
            error!(error = %e, "Database error during password change");
            return error_response(&from_db(&e));
        }
    };

    match verify_password(&current, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => return unauthorized("Current password is incorrect"),
        Err(e) => return server_error("Password verification error", &e),
    }

    let password_hash = match hash_password(&new) {
        Ok(hash) => hash,
        Err(e) => return server_error("Failed to hash password", &e),
    };

    match user_repo.update_password(user.id, &password_hash).await {
        Ok(()) => {
            info!(user_id = %user.id, "Password changed");
            Json(json!({ "message": "Password updated successfully" })).into_response()
        }
        Err(UserError::Database(e)) => {
            error!(error = %e, "Failed to store new password");
            error_response(&from_db(&e))
        }
        Err(e) => server_error("Failed to change password", &e),
    }
}
