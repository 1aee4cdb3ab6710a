use axum::{
    extract::{Extension, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use utoipa::ToSchema;

use crate::{
    error::AppError, middleware::auth::CurrentUser, models::user::UserProfile, state::AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Body for PUT /profile. `user_id` must match the acting session's user.
pub struct UpdateProfileRequest {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<UserProfile>, AppError> {
    state
        .sessions
        .profile(&user.user_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<Value>, AppError> {
    // Users may only update their own profile.
    if payload.user_id != user.user_id {
        tracing::warn!(
            actor = %user.user_id,
            target = %payload.user_id,
            "rejected profile update for another user"
        );
        return Err(AppError::Forbidden(
            "Cannot update another user's profile".to_string(),
        ));
    }

    if !state
        .sessions
        .update_profile(&user.user_id, &payload.full_name, &payload.email)
    {
        return Err(AppError::BadRequest("Profile update failed".to_string()));
    }

    Ok(Json(json!({ "message": "Profile updated successfully" })))
}
