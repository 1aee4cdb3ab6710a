//! Token-based session manager over a small fixed user directory.
//!
//! One shared instance per process, constructed explicitly and handed to
//! handlers through [`crate::state::AppState`]. Two independent maps are
//! held: username -> profile and token -> session. No operation locks
//! entries of both maps at once.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use crate::config::Config;
use crate::models::user::UserProfile;
use crate::utils::token;

/// Seam for the credential check. The demo deployment accepts one shared
/// development password for every seeded account; a real deployment would
/// plug in a hash-backed implementation here.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, user: &UserProfile, password: &str) -> bool;
}

pub struct SharedSecretVerifier {
    secret: String,
}

impl SharedSecretVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl CredentialVerifier for SharedSecretVerifier {
    fn verify(&self, _user: &UserProfile, password: &str) -> bool {
        password == self.secret
    }
}

#[derive(Debug, Clone)]
struct Session {
    user_id: String,
    expires_at: DateTime<Utc>,
}

/// Identity material returned on a successful login.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub token: String,
    pub user_id: String,
    pub username: String,
}

pub struct SessionManager {
    users: DashMap<String, UserProfile>,
    sessions: DashMap<String, Session>,
    verifier: Box<dyn CredentialVerifier>,
    ttl: Duration,
}

impl SessionManager {
    pub fn new(users: Vec<UserProfile>, verifier: Box<dyn CredentialVerifier>, ttl: Duration) -> Self {
        let directory = DashMap::new();
        for user in users {
            directory.insert(user.username.clone(), user);
        }
        Self {
            users: directory,
            sessions: DashMap::new(),
            verifier,
            ttl,
        }
    }

    /// The production construction: seeded directory, shared development
    /// credential, TTL from configuration.
    pub fn with_demo_directory(config: &Config) -> Self {
        Self::new(
            seed_users(),
            Box::new(SharedSecretVerifier::new(config.demo_password.clone())),
            Duration::hours(config.session_ttl_hours),
        )
    }

    /// Checks the credentials and, on success, mints a new session token
    /// and stamps the user's `last_login_at`. Each call creates its own
    /// session; concurrent sessions per user are allowed.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<AuthenticatedSession> {
        let user = match self.users.get(username) {
            Some(entry) => entry.value().clone(),
            None => {
                tracing::warn!(username, "login attempt for unknown user");
                return None;
            }
        };

        if !self.verifier.verify(&user, password) {
            tracing::warn!(username, "failed login attempt");
            return None;
        }

        let token = token::mint(&user.user_id);
        self.sessions.insert(
            token.clone(),
            Session {
                user_id: user.user_id.clone(),
                expires_at: Utc::now() + self.ttl,
            },
        );

        let user = UserProfile {
            last_login_at: Some(Utc::now()),
            ..user
        };
        self.users.insert(username.to_string(), user.clone());

        tracing::info!(username, user_id = %user.user_id, "login succeeded");
        Some(AuthenticatedSession {
            token,
            user_id: user.user_id,
            username: user.username,
        })
    }

    /// Fails closed: empty or unknown tokens are invalid. Expired sessions
    /// are removed on first read and stay invalid forever. A valid lookup
    /// does not renew the session.
    pub fn validate(&self, token: &str) -> Option<String> {
        if token.is_empty() {
            return None;
        }
        let session = self.sessions.get(token)?.value().clone();
        if Utc::now() > session.expires_at {
            self.sessions.remove(token);
            tracing::warn!(user_id = %session.user_id, "session expired");
            return None;
        }
        Some(session.user_id)
    }

    /// Linear lookup by external user id.
    pub fn profile(&self, user_id: &str) -> Option<UserProfile> {
        self.users
            .iter()
            .find(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
    }

    /// Overwrites `full_name` and `email` for the given user. The caller is
    /// responsible for checking that the acting session owns the profile.
    pub fn update_profile(&self, user_id: &str, full_name: &str, email: &str) -> bool {
        let Some(current) = self.profile(user_id) else {
            tracing::warn!(user_id, "profile update for unknown user");
            return false;
        };
        let updated = UserProfile {
            full_name: full_name.to_string(),
            email: email.to_string(),
            ..current
        };
        self.users.insert(updated.username.clone(), updated);
        tracing::info!(user_id, "profile updated");
        true
    }

    /// Removes the session for `token`. Returns false when the token is
    /// unknown (never issued, expired, or already logged out).
    pub fn logout(&self, token: &str) -> bool {
        match self.sessions.remove(token) {
            Some((_, session)) => {
                tracing::info!(user_id = %session.user_id, "user logged out");
                true
            }
            None => {
                tracing::warn!("logout with invalid token");
                false
            }
        }
    }
}

/// The fixed demo directory: three accounts with staggered creation dates.
pub fn seed_users() -> Vec<UserProfile> {
    let now = Utc::now();
    vec![
        UserProfile {
            user_id: "user-001".to_string(),
            username: "demo".to_string(),
            email: "demo@example.com".to_string(),
            full_name: "Demo User".to_string(),
            created_at: now - Duration::days(30),
            last_login_at: None,
        },
        UserProfile {
            user_id: "user-002".to_string(),
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            full_name: "Admin User".to_string(),
            created_at: now - Duration::days(60),
            last_login_at: None,
        },
        UserProfile {
            user_id: "user-003".to_string(),
            username: "test".to_string(),
            email: "test@example.com".to_string(),
            full_name: "Test User".to_string(),
            created_at: now - Duration::days(15),
            last_login_at: None,
        },
    ]
}
