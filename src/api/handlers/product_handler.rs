//! Product handlers.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewProduct, Product, ProductPatch};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Collection, Created, Document};

/// Product creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Product name is required"))]
    #[schema(example = "Coffee Beans 1kg")]
    pub product_name: String,
    #[validate(length(min = 1, message = "Product description is required"))]
    pub product_description: String,
    /// Unit price, must not be negative
    #[validate(range(min = 0.0, message = "Product price cannot be negative"))]
    #[schema(example = 12.5)]
    pub product_price: f64,
    /// Units in stock, must not be negative
    #[validate(range(min = 0, message = "Product quantity cannot be negative"))]
    #[schema(example = 40)]
    pub product_quantity: i32,
    /// Category name this product belongs to
    #[validate(length(min = 1, message = "Product category is required"))]
    #[schema(example = "Beverages")]
    pub product_category: String,
}

/// Product update request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Product name cannot be empty"))]
    pub product_name: Option<String>,
    #[validate(length(min = 1, message = "Product description cannot be empty"))]
    pub product_description: Option<String>,
    #[validate(range(min = 0.0, message = "Product price cannot be negative"))]
    pub product_price: Option<f64>,
    #[validate(range(min = 0, message = "Product quantity cannot be negative"))]
    pub product_quantity: Option<i32>,
    #[validate(length(min = 1, message = "Product category cannot be empty"))]
    pub product_category: Option<String>,
}

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(create_product))
        .route("/all", get(list_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/products/add",
    tag = "Products",
    request_body = CreateProductRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> AppResult<Created<Product>> {
    let product = state
        .product_service
        .create_product(NewProduct {
            product_name: payload.product_name,
            product_description: payload.product_description,
            product_price: payload.product_price,
            product_quantity: payload.product_quantity,
            product_category: payload.product_category,
        })
        .await?;

    Ok(Created(Document::with_message(
        product,
        "Product created successfully",
    )))
}

/// List all products
#[utoipa::path(
    get,
    path = "/api/products/all",
    tag = "Products",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of products", body = [Product]),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Collection<Product>> {
    let products = state.product_service.list_products().await?;
    Ok(Collection(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Document<Product>> {
    let product = state.product_service.get_product(id).await?;
    Ok(Document::new(product))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateProductRequest>,
) -> AppResult<Document<Product>> {
    let product = state
        .product_service
        .update_product(
            id,
            ProductPatch {
                product_name: payload.product_name,
                product_description: payload.product_description,
                product_price: payload.product_price,
                product_quantity: payload.product_quantity,
                product_category: payload.product_category,
            },
        )
        .await?;

    Ok(Document::with_message(
        product,
        "Product updated successfully",
    ))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product deleted successfully"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse> {
    state.product_service.delete_product(id).await?;
    Ok(ApiResponse::message("Product deleted successfully"))
}
