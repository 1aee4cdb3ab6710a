//! Models that represent users and authentication payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// A user directory entry. Keyed by `username` in the directory; `user_id`
/// is the externally visible identity.
pub struct UserProfile {
    /// Stable external identifier (e.g. `user-001`).
    pub user_id: String,
    /// Immutable username used for login.
    pub username: String,
    /// Contact address; updatable via PUT /profile.
    pub email: String,
    /// Display name; updatable via PUT /profile.
    pub full_name: String,
    /// Seeded account creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Set on every successful login; never cleared.
    pub last_login_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Credentials submitted by a user attempting to authenticate.
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Outcome of a login attempt. Identity fields are only present when
/// `success` is true.
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub username: Option<String>,
    pub user_id: Option<String>,
    pub message: String,
}
