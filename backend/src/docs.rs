#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    error::ErrorResponse,
    handlers::{
        config::ClientConfig, data::SubmissionReceipt, health::HealthResponse,
        profile::UpdateProfileRequest,
    },
    models::{
        cart::{Cart, CartProduct},
        data::DataSubmission,
        product::Product,
        user::{LoginRequest, LoginResponse, UserProfile},
    },
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        login_doc,
        logout_doc,
        get_profile_doc,
        update_profile_doc,
        list_products_doc,
        get_product_doc,
        categories_doc,
        products_by_category_doc,
        create_product_doc,
        update_product_doc,
        delete_product_doc,
        list_carts_doc,
        get_cart_doc,
        carts_by_user_doc,
        create_cart_doc,
        update_cart_doc,
        delete_cart_doc,
        health_doc,
        client_config_doc,
        submit_data_doc,
        list_data_doc
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            UserProfile,
            UpdateProfileRequest,
            Product,
            Cart,
            CartProduct,
            DataSubmission,
            SubmissionReceipt,
            ClientConfig,
            HealthResponse,
            ErrorResponse
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Auth", description = "Login, logout, and session tokens"),
        (name = "Profile", description = "User profile read/update"),
        (name = "Products", description = "Product catalog CRUD"),
        (name = "Carts", description = "Shopping cart CRUD"),
        (name = "System", description = "Health, configuration, telemetry")
    ),
    security(("BearerAuth" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "BearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "Auth",
    security(())
)]
fn login_doc() {}

#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Session removed"),
        (status = 400, description = "Missing or unknown token", body = ErrorResponse)
    ),
    tag = "Auth"
)]
fn logout_doc() {}

#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, body = UserProfile),
        (status = 401, description = "Missing, invalid, or expired token"),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    ),
    tag = "Profile"
)]
fn get_profile_doc() {}

#[utoipa::path(
    put,
    path = "/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 401, description = "Missing, invalid, or expired token"),
        (status = 403, description = "Target user differs from the session user", body = ErrorResponse)
    ),
    tag = "Profile"
)]
fn update_profile_doc() {}

#[utoipa::path(
    get,
    path = "/products",
    params(
        ("sort" = Option<String>, Query, description = "`desc` reverses id order"),
        ("limit" = Option<u32>, Query, description = "Truncate after ordering; 0 = unbounded")
    ),
    responses((status = 200, body = [Product])),
    tag = "Products",
    security(())
)]
fn list_products_doc() {}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = u32, Path, description = "Product id")),
    responses(
        (status = 200, body = Product),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    ),
    tag = "Products",
    security(())
)]
fn get_product_doc() {}

#[utoipa::path(
    get,
    path = "/products/categories",
    responses((status = 200, body = [String])),
    tag = "Products",
    security(())
)]
fn categories_doc() {}

#[utoipa::path(
    get,
    path = "/products/category/{category}",
    params(("category" = String, Path, description = "Category name, case-insensitive")),
    responses((status = 200, body = [Product])),
    tag = "Products",
    security(())
)]
fn products_by_category_doc() {}

#[utoipa::path(
    post,
    path = "/products",
    request_body = Product,
    responses((status = 200, description = "Stored product with assigned id", body = Product)),
    tag = "Products",
    security(())
)]
fn create_product_doc() {}

#[utoipa::path(
    put,
    path = "/products/{id}",
    request_body = Product,
    params(("id" = u32, Path, description = "Product id; overrides any id in the body")),
    responses(
        (status = 200, body = Product),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    ),
    tag = "Products",
    security(())
)]
fn update_product_doc() {}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = u32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Removed product", body = Product),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    ),
    tag = "Products",
    security(())
)]
fn delete_product_doc() {}

#[utoipa::path(
    get,
    path = "/carts",
    params(
        ("startdate" = Option<String>, Query, description = "Inclusive lower bound, RFC3339 or YYYY-MM-DD"),
        ("enddate" = Option<String>, Query, description = "Inclusive upper bound, RFC3339 or YYYY-MM-DD"),
        ("sort" = Option<String>, Query, description = "`desc` reverses id order"),
        ("limit" = Option<u32>, Query, description = "Truncate after ordering; 0 = unbounded")
    ),
    responses(
        (status = 200, body = [Cart]),
        (status = 400, description = "Unparseable date bound", body = ErrorResponse)
    ),
    tag = "Carts",
    security(())
)]
fn list_carts_doc() {}

#[utoipa::path(
    get,
    path = "/carts/{id}",
    params(("id" = u32, Path, description = "Cart id")),
    responses(
        (status = 200, body = Cart),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    ),
    tag = "Carts",
    security(())
)]
fn get_cart_doc() {}

#[utoipa::path(
    get,
    path = "/carts/user/{user_id}",
    params(("user_id" = String, Path, description = "External user id, e.g. user-001")),
    responses((status = 200, description = "That user's carts, ascending by date", body = [Cart])),
    tag = "Carts",
    security(())
)]
fn carts_by_user_doc() {}

#[utoipa::path(
    post,
    path = "/carts",
    request_body = Cart,
    responses((status = 200, description = "Stored cart with assigned id", body = Cart)),
    tag = "Carts",
    security(())
)]
fn create_cart_doc() {}

#[utoipa::path(
    put,
    path = "/carts/{id}",
    request_body = Cart,
    params(("id" = u32, Path, description = "Cart id; overrides any id in the body")),
    responses(
        (status = 200, body = Cart),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    ),
    tag = "Carts",
    security(())
)]
fn update_cart_doc() {}

#[utoipa::path(
    delete,
    path = "/carts/{id}",
    params(("id" = u32, Path, description = "Cart id")),
    responses(
        (status = 200, description = "Removed cart", body = Cart),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    ),
    tag = "Carts",
    security(())
)]
fn delete_cart_doc() {}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, body = HealthResponse)),
    tag = "System",
    security(())
)]
fn health_doc() {}

#[utoipa::path(
    get,
    path = "/config",
    responses((status = 200, body = ClientConfig)),
    tag = "System",
    security(())
)]
fn client_config_doc() {}

#[utoipa::path(
    post,
    path = "/data",
    request_body = DataSubmission,
    responses((status = 200, body = SubmissionReceipt)),
    tag = "System",
    security(())
)]
fn submit_data_doc() {}

#[utoipa::path(
    get,
    path = "/data",
    responses((status = 200, body = [DataSubmission])),
    tag = "System",
    security(())
)]
fn list_data_doc() {}
