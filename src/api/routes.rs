//! Application route configuration.

use axum::{http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    auth_routes, category_routes, order_routes, product_routes, supplier_routes, user_routes,
};
use super::middleware::auth_middleware;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Welcome and health endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public authentication routes
        .nest("/api/auth", auth_routes())
        // Protected resource routes (require JWT)
        .nest("/api/categories", protected(category_routes(), &state))
        .nest("/api/products", protected(product_routes(), &state))
        .nest("/api/suppliers", protected(supplier_routes(), &state))
        .nest("/api/orders", protected(order_routes(), &state))
        .nest("/api/users", protected(user_routes(), &state))
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Attach the JWT middleware to a resource router.
fn protected(routes: Router<AppState>, state: &AppState) -> Router<AppState> {
    routes.route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth_middleware,
    ))
}

/// Root endpoint
async fn root() -> &'static str {
    "POS System API is running"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint.
///
/// Startup aborts when the database is unreachable, so a responding
/// process implies a live connection pool.
async fn health() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse { status: "healthy" }))
}
