use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};

use crate::{
    error::AppError, middleware::auth::identify, models::product::Product, state::AppState,
    utils::query::ListQuery,
};

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Product>> {
    Json(query.apply(state.products.get_all()))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Product>, AppError> {
    state
        .products
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}

pub async fn categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.products.categories())
}

pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Product>> {
    Json(query.apply(state.products.by_category(&category)))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Product>,
) -> Json<Product> {
    // Authentication is optional here; a valid token only enriches the log.
    let actor = identify(&headers, &state.sessions);
    let created = state.products.add(payload);
    tracing::info!(
        product_id = created.id,
        title = %created.title,
        actor = actor.as_deref().unwrap_or("anonymous"),
        "product created"
    );
    Json(created)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(payload): Json<Product>,
) -> Result<Json<Product>, AppError> {
    state
        .products
        .update(id, payload)
        .map(|updated| {
            tracing::info!(product_id = id, title = %updated.title, "product updated");
            Json(updated)
        })
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}

// PATCH replaces the stored value just like PUT; there is no merge-patch.
pub async fn patch(
    state: State<AppState>,
    id: Path<u32>,
    payload: Json<Product>,
) -> Result<Json<Product>, AppError> {
    update(state, id, payload).await
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Product>, AppError> {
    state
        .products
        .remove(id)
        .map(|deleted| {
            tracing::info!(product_id = id, title = %deleted.title, "product deleted");
            Json(deleted)
        })
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}
