use std::collections::BTreeMap;

use axum::{
    extract::{Extension, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    middleware::{auth::identify, correlation_id::CorrelationId},
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Dynamic configuration fetched by mobile clients on startup.
pub struct ClientConfig {
    pub web_view_url: String,
    pub feature_flags: BTreeMap<String, bool>,
}

pub async fn client_config(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    headers: HeaderMap,
) -> Json<ClientConfig> {
    match identify(&headers, &state.sessions) {
        Some(user_id) => {
            tracing::info!(correlation_id = %correlation.0, %user_id, "configuration requested")
        }
        None => tracing::info!(correlation_id = %correlation.0, "configuration requested"),
    }

    Json(ClientConfig {
        web_view_url: state.config.web_portal_url.clone(),
        feature_flags: BTreeMap::from([
            ("EnableTelemetry".to_string(), true),
            ("EnableAdvancedFeatures".to_string(), false),
        ]),
    })
}
