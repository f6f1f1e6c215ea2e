//! Supplier handlers.

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
use crate::domain::{NewSupplier, Supplier, SupplierPatch};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Collection, Created, Document};

/// Supplier creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierRequest {
    #[validate(length(min = 1, message = "Supplier name is required"))]
    #[schema(example = "Acme Foods")]
    pub supplier_name: String,
    #[validate(email(message = "Invalid supplier email format"))]
    #[schema(example = "sales@acmefoods.example")]
    pub supplier_email: String,
    #[validate(length(min = 1, message = "Supplier phone is required"))]
    #[schema(example = "555-0100")]
    pub supplier_phone: String,
    #[validate(length(min = 1, message = "Supplier address is required"))]
    #[schema(example = "1 Industrial Way")]
    pub supplier_address: String,
}

/// Supplier update request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupplierRequest {
    #[validate(length(min = 1, message = "Supplier name cannot be empty"))]
    pub supplier_name: Option<String>,
    #[validate(email(message = "Invalid supplier email format"))]
    pub supplier_email: Option<String>,
    #[validate(length(min = 1, message = "Supplier phone cannot be empty"))]
    pub supplier_phone: Option<String>,
    #[validate(length(min = 1, message = "Supplier address cannot be empty"))]
    pub supplier_address: Option<String>,
}

/// Create supplier routes
pub fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(create_supplier))
        .route("/all", get(list_suppliers))
        .route(
            "/:id",
            get(get_supplier)
                .put(update_supplier)
                .delete(delete_supplier),
        )
}

/// Create a new supplier
#[utoipa::path(
    post,
    path = "/api/suppliers/add",
    tag = "Suppliers",
    request_body = CreateSupplierRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Supplier created successfully", body = Supplier),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Supplier with this email already exists")
    )
)]
pub async fn create_supplier(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSupplierRequest>,
) -> AppResult<Created<Supplier>> {
    let supplier = state
        .supplier_service
        .create_supplier(NewSupplier {
            supplier_name: payload.supplier_name,
            supplier_email: payload.supplier_email,
            supplier_phone: payload.supplier_phone,
            supplier_address: payload.supplier_address,
        })
        .await?;

    Ok(Created(Document::with_message(
        supplier,
        "Supplier created successfully",
    )))
}

/// List all suppliers
#[utoipa::path(
    get,
    path = "/api/suppliers/all",
    tag = "Suppliers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of suppliers", body = [Supplier]),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_suppliers(State(state): State<AppState>) -> AppResult<Collection<Supplier>> {
    let suppliers = state.supplier_service.list_suppliers().await?;
    Ok(Collection(suppliers))
}

/// Get a supplier by ID
#[utoipa::path(
    get,
    path = "/api/suppliers/{id}",
    tag = "Suppliers",
    params(("id" = Uuid, Path, description = "Supplier ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Supplier found", body = Supplier),
        (status = 404, description = "Supplier not found")
    )
)]
pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Document<Supplier>> {
    let supplier = state.supplier_service.get_supplier(id).await?;
    Ok(Document::new(supplier))
}

/// Update a supplier
#[utoipa::path(
    put,
    path = "/api/suppliers/{id}",
    tag = "Suppliers",
    params(("id" = Uuid, Path, description = "Supplier ID")),
    request_body = UpdateSupplierRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Supplier updated successfully", body = Supplier),
        (status = 404, description = "Supplier not found"),
        (status = 409, description = "Supplier with this email already exists")
    )
)]
pub async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateSupplierRequest>,
) -> AppResult<Document<Supplier>> {
    let supplier = state
        .supplier_service
        .update_supplier(
            id,
            SupplierPatch {
                supplier_name: payload.supplier_name,
                supplier_email: payload.supplier_email,
                supplier_phone: payload.supplier_phone,
                supplier_address: payload.supplier_address,
            },
        )
        .await?;

    Ok(Document::with_message(
        supplier,
        "Supplier updated successfully",
    ))
}

/// Delete a supplier
#[utoipa::path(
    delete,
    path = "/api/suppliers/{id}",
    tag = "Suppliers",
    params(("id" = Uuid, Path, description = "Supplier ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Supplier deleted successfully"),
        (status = 404, description = "Supplier not found")
    )
)]
pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse> {
    state.supplier_service.delete_supplier(id).await?;
    Ok(ApiResponse::message("Supplier deleted successfully"))
}
