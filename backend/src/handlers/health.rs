use axum::{extract::State, http::HeaderMap, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{middleware::auth::identify, state::AppState};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

pub async fn health(State(state): State<AppState>, headers: HeaderMap) -> Json<HealthResponse> {
    match identify(&headers, &state.sessions) {
        Some(user_id) => tracing::info!(%user_id, "health check"),
        None => tracing::info!("health check (anonymous)"),
    }

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}
