//! Telemetry data submitted by demo clients.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataSubmission {
    pub correlation_id: String,
    pub session_name: String,
    pub notes: String,
    pub numeric_value: f64,
}
