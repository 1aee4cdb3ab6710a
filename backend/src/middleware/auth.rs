use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::{services::SessionManager, state::AppState};

/// Identity attached to the request by [`require_auth`].
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub user_id: String,
    pub token: String,
}

/// Gate for routes that require a live session. Rejects with 401 before
/// the handler runs; on success the handler can read [`CurrentUser`] from
/// request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = bearer_token(request.headers()).ok_or(StatusCode::UNAUTHORIZED)?;
    let user_id = state
        .sessions
        .validate(&token)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    request.extensions_mut().insert(CurrentUser { user_id, token });
    Ok(next.run(request).await)
}

/// Resolves the acting user on endpoints where authentication is optional.
/// Never fails the request; an absent or stale token simply yields `None`.
pub fn identify(headers: &HeaderMap, sessions: &SessionManager) -> Option<String> {
    bearer_token(headers).and_then(|token| sessions.validate(&token))
}

/// Extracts the bearer token from the `Authorization` header, if any.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer_token)
        .map(str::to_string)
}

fn parse_bearer_token(header: &str) -> Option<&str> {
    if let Some(rest) = header.strip_prefix("Bearer ") {
        return Some(rest);
    }
    if let Some(rest) = header.strip_prefix("bearer ") {
        return Some(rest);
    }
    if let Some(space_idx) = header.find(' ') {
        let (scheme, rest) = header.split_at(space_idx);
        if scheme.eq_ignore_ascii_case("bearer") {
            return Some(rest.trim_start());
        }
    }
    None
}
