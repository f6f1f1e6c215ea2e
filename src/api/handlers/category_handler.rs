//! Category handlers.

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
use crate::domain::{Category, CategoryPatch, NewCategory};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Collection, Created, Document};

/// Category creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, message = "Category name is required"))]
    #[schema(example = "Beverages")]
    pub category_name: String,
    #[validate(length(min = 1, message = "Category description is required"))]
    #[schema(example = "Drinks, juices and coffee")]
    pub category_description: String,
}

/// Category update request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub category_name: Option<String>,
    #[validate(length(min = 1, message = "Category description cannot be empty"))]
    pub category_description: Option<String>,
}

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(create_category))
        .route("/all", get(list_categories))
        .route(
            "/:id",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/categories/add",
    tag = "Categories",
    request_body = CreateCategoryRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Category created successfully", body = Category),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<Created<Category>> {
    let category = state
        .category_service
        .create_category(NewCategory {
            category_name: payload.category_name,
            category_description: payload.category_description,
        })
        .await?;

    Ok(Created(Document::with_message(
        category,
        "Category created successfully",
    )))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categories/all",
    tag = "Categories",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of categories", body = [Category]),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Collection<Category>> {
    let categories = state.category_service.list_categories().await?;
    Ok(Collection(categories))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "Category ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Document<Category>> {
    let category = state.category_service.get_category(id).await?;
    Ok(Document::new(category))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Category updated successfully", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateCategoryRequest>,
) -> AppResult<Document<Category>> {
    let category = state
        .category_service
        .update_category(
            id,
            CategoryPatch {
                category_name: payload.category_name,
                category_description: payload.category_description,
            },
        )
        .await?;

    Ok(Document::with_message(
        category,
        "Category updated successfully",
    ))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "Category ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Category deleted successfully"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse> {
    state.category_service.delete_category(id).await?;
    Ok(ApiResponse::message("Category deleted successfully"))
}
