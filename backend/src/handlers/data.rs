use axum::{extract::State, http::HeaderMap, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    middleware::auth::identify, models::data::DataSubmission, state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub is_successful: bool,
    pub message: String,
    pub correlation_id: String,
    pub timestamp: DateTime<Utc>,
}

pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(submission): Json<DataSubmission>,
) -> Json<SubmissionReceipt> {
    match identify(&headers, &state.sessions) {
        Some(user_id) => tracing::info!(
            %user_id,
            correlation_id = %submission.correlation_id,
            session_name = %submission.session_name,
            numeric_value = submission.numeric_value,
            "data submission"
        ),
        None => tracing::info!(
            correlation_id = %submission.correlation_id,
            session_name = %submission.session_name,
            numeric_value = submission.numeric_value,
            "data submission"
        ),
    }

    let receipt = SubmissionReceipt {
        is_successful: true,
        message: "Data received successfully".to_string(),
        correlation_id: submission.correlation_id.clone(),
        timestamp: Utc::now(),
    };

    state.submissions.record(submission);
    tracing::debug!(total = state.submissions.len(), "submission stored");

    Json(receipt)
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<DataSubmission>> {
    Json(state.submissions.all())
}
