//! Order handlers.
//!
//! Orders are created with a line-item snapshot and start in `pending`
//! status; updates touch only the status and notes.

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
use crate::domain::{LineItem, NewOrder, Order, OrderPatch, OrderStatus};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Collection, Created, Document};

/// Order creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Order number is required"))]
    #[schema(example = "ORD-1001")]
    pub order_number: String,
    #[validate(length(min = 1, message = "Customer name is required"))]
    #[schema(example = "Jane Doe")]
    pub customer_name: String,
    #[validate(email(message = "Invalid customer email format"))]
    #[schema(example = "jane@example.com")]
    pub customer_email: String,
    /// Line items; product name and price are snapshotted as sent
    pub products: Vec<LineItem>,
    /// Order total, must be greater than zero
    #[schema(example = 25.0)]
    pub total_amount: f64,
    #[validate(length(min = 1, message = "Shipping address is required"))]
    #[schema(example = "12 Main St")]
    pub shipping_address: String,
    pub notes: Option<String>,
}

/// Order update request; only status and notes are mutable
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub status: Option<OrderStatus>,
    pub notes: Option<String>,
}

/// Create order routes
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(create_order))
        .route("/all", get(list_orders))
        .route(
            "/:id",
            get(get_order).put(update_order).delete(delete_order),
        )
}

/// Create a new order
#[utoipa::path(
    post,
    path = "/api/orders/add",
    tag = "Orders",
    request_body = CreateOrderRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Order created successfully", body = Order),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Order with this order number already exists")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> AppResult<Created<Order>> {
    let order = state
        .order_service
        .create_order(NewOrder {
            order_number: payload.order_number,
            customer_name: payload.customer_name,
            customer_email: payload.customer_email,
            products: payload.products,
            total_amount: payload.total_amount,
            shipping_address: payload.shipping_address,
            notes: payload.notes,
        })
        .await?;

    Ok(Created(Document::with_message(
        order,
        "Order created successfully",
    )))
}

/// List all orders, newest first
#[utoipa::path(
    get,
    path = "/api/orders/all",
    tag = "Orders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of orders", body = [Order]),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Collection<Order>> {
    let orders = state.order_service.list_orders().await?;
    Ok(Collection(orders))
}

/// Get an order by ID
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "Order ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Document<Order>> {
    let order = state.order_service.get_order(id).await?;
    Ok(Document::new(order))
}

/// Update an order's status and notes
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Order updated successfully", body = Order),
        (status = 404, description = "Order not found")
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateOrderRequest>,
) -> AppResult<Document<Order>> {
    let order = state
        .order_service
        .update_order(
            id,
            OrderPatch {
                status: payload.status,
                notes: payload.notes,
            },
        )
        .await?;

    Ok(Document::with_message(order, "Order updated successfully"))
}

/// Delete an order
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "Order ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Order deleted successfully"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse> {
    state.order_service.delete_order(id).await?;
    Ok(ApiResponse::message("Order deleted successfully"))
}
