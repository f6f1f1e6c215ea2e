//! Order domain entity, line-item snapshots and order status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Order lifecycle status.
///
/// The set is a free-form enumeration: any status may be set to any
/// other, there is no enforced transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        match s {
            "processing" => OrderStatus::Processing,
            "shipped" => OrderStatus::Shipped,
            "delivered" => OrderStatus::Delivered,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Pending,
        }
    }
}

/// Snapshot of a product at order-creation time.
///
/// Name and price are copies, deliberately not live references: later
/// product edits must never change historical orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Uuid>,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Customer order with an immutable line-item snapshot.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub products: Vec<LineItem>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub shipping_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create an order. Status always starts at `pending`.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub products: Vec<LineItem>,
    pub total_amount: f64,
    pub shipping_address: String,
    pub notes: Option<String>,
}

/// Partial update of an order. Only status and notes are mutable;
/// line items, amounts and customer details are frozen at creation.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_form() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status));
            let back: OrderStatus = serde_json::from_str(&wire).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn unknown_status_is_rejected_on_deserialization() {
        let result = serde_json::from_str::<OrderStatus>("\"refunded\"");
        assert!(result.is_err());
    }

    #[test]
    fn line_item_without_product_id_serializes_cleanly() {
        let item = LineItem {
            product_id: None,
            product_name: "Cola".to_string(),
            quantity: 2,
            price: 1.5,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("productId").is_none());
        assert_eq!(json["productName"], "Cola");
    }
}
