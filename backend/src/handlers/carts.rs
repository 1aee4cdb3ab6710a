use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

use crate::{
    error::AppError,
    middleware::auth::identify,
    models::cart::Cart,
    state::AppState,
    utils::query::{ListQuery, SortOrder},
};

#[derive(Debug, Default, Deserialize)]
pub struct CartListQuery {
    pub startdate: Option<String>,
    pub enddate: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
    pub limit: Option<u32>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CartListQuery>,
) -> Result<Json<Vec<Cart>>, AppError> {
    let start = parse_date_bound(query.startdate.as_deref())?;
    let end = parse_date_bound(query.enddate.as_deref())?;

    let carts = if start.is_some() || end.is_some() {
        state.carts.by_date_range(start, end)
    } else {
        state.carts.get_all()
    };

    let list = ListQuery {
        sort: query.sort,
        limit: query.limit,
    };
    Ok(Json(list.apply(carts)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Cart>, AppError> {
    state
        .carts
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Cart not found".to_string()))
}

pub async fn by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<Cart>> {
    Json(state.carts.by_user(&user_id))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Cart>,
) -> Json<Cart> {
    let actor = identify(&headers, &state.sessions);
    let created = state.carts.add(payload);
    tracing::info!(
        cart_id = created.id,
        user_id = %created.user_id,
        products = created.products.len(),
        actor = actor.as_deref().unwrap_or("anonymous"),
        "cart created"
    );
    Json(created)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(payload): Json<Cart>,
) -> Result<Json<Cart>, AppError> {
    state
        .carts
        .update(id, payload)
        .map(|updated| {
            tracing::info!(cart_id = id, user_id = %updated.user_id, "cart updated");
            Json(updated)
        })
        .ok_or_else(|| AppError::NotFound("Cart not found".to_string()))
}

// PATCH replaces the stored value just like PUT; there is no merge-patch.
pub async fn patch(
    state: State<AppState>,
    id: Path<u32>,
    payload: Json<Cart>,
) -> Result<Json<Cart>, AppError> {
    update(state, id, payload).await
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Cart>, AppError> {
    state
        .carts
        .remove(id)
        .map(|deleted| {
            tracing::info!(cart_id = id, user_id = %deleted.user_id, "cart deleted");
            Json(deleted)
        })
        .ok_or_else(|| AppError::NotFound("Cart not found".to_string()))
}

/// Accepts either an RFC3339 timestamp or a bare `YYYY-MM-DD` date, which
/// is taken as midnight UTC. Both bounds of the range are inclusive.
fn parse_date_bound(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(timestamp.with_timezone(&Utc)));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date.and_time(NaiveTime::MIN).and_utc()));
    }

    Err(AppError::BadRequest(format!("Invalid date: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn date_bound_accepts_rfc3339_and_plain_dates() {
        let parsed = parse_date_bound(Some("2024-03-05T10:30:00Z"))
            .expect("valid")
            .expect("present");
        assert_eq!(parsed.hour(), 10);

        let parsed = parse_date_bound(Some("2024-03-05"))
            .expect("valid")
            .expect("present");
        assert_eq!(parsed.hour(), 0);
        assert_eq!(parsed.minute(), 0);
    }

    #[test]
    fn date_bound_rejects_garbage() {
        assert!(parse_date_bound(Some("last tuesday")).is_err());
    }

    #[test]
    fn missing_bound_is_unbounded() {
        assert!(parse_date_bound(None).expect("valid").is_none());
    }
}
