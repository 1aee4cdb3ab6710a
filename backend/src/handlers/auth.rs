use axum::{extract::State, http::HeaderMap, Json};
use serde_json::{json, Value};

use crate::{
    error::AppError,
    middleware::auth::bearer_token,
    models::user::{LoginRequest, LoginResponse},
    state::AppState,
};

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    tracing::info!(username = %payload.username, "login request");

    let session = state
        .sessions
        .authenticate(&payload.username, &payload.password)
        .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

    Ok(Json(LoginResponse {
        success: true,
        token: Some(session.token),
        username: Some(session.username),
        user_id: Some(session.user_id),
        message: "Login successful".to_string(),
    }))
}

/// Logout reads the header itself rather than going through the auth
/// middleware: a missing or unknown token is a 400 here, not a 401.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| AppError::BadRequest("No token provided".to_string()))?;

    if !state.sessions.logout(&token) {
        return Err(AppError::BadRequest("Logout failed".to_string()));
    }

    Ok(Json(json!({ "message": "Logged out successfully" })))
}
