//! Storefront demo backend: a thin HTTP surface over an in-process state
//! layer (token session manager plus concurrent product/cart stores).

use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use state::AppState;

/// Builds the full application router. Separated from `main` so
/// integration tests can drive the exact production route table.
pub fn app(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/health", get(handlers::health::health))
        .route("/config", get(handlers::config::client_config))
        .route(
            "/data",
            post(handlers::data::submit).get(handlers::data::list),
        )
        .route(
            "/products",
            get(handlers::products::list).post(handlers::products::create),
        )
        .route("/products/categories", get(handlers::products::categories))
        .route(
            "/products/category/{category}",
            get(handlers::products::by_category),
        )
        .route(
            "/products/{id}",
            get(handlers::products::get)
                .put(handlers::products::update)
                .patch(handlers::products::patch)
                .delete(handlers::products::delete),
        )
        .route(
            "/carts",
            get(handlers::carts::list).post(handlers::carts::create),
        )
        .route("/carts/user/{user_id}", get(handlers::carts::by_user))
        .route(
            "/carts/{id}",
            get(handlers::carts::get)
                .put(handlers::carts::update)
                .patch(handlers::carts::patch)
                .delete(handlers::carts::delete),
        );

    // Profile routes require a valid bearer session.
    let profile_routes = Router::new()
        .route(
            "/profile",
            get(handlers::profile::get_profile).put(handlers::profile::update_profile),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(profile_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api-doc/openapi.json", docs::ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(
                    middleware::correlation_id::correlation_id,
                ))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::PATCH,
                            Method::DELETE,
                            Method::OPTIONS,
                        ])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
}
