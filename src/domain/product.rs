//! Product domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Stocked product.
///
/// `product_category` is a denormalized category name, not a reference;
/// stock quantity changes only through direct edits (order creation does
/// not decrement it).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub product_name: String,
    pub product_description: String,
    pub product_price: f64,
    pub product_quantity: i32,
    pub product_category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub product_name: String,
    pub product_description: String,
    pub product_price: f64,
    pub product_quantity: i32,
    pub product_category: String,
}

/// Partial update of mutable product fields.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub product_name: Option<String>,
    pub product_description: Option<String>,
    pub product_price: Option<f64>,
    pub product_quantity: Option<i32>,
    pub product_category: Option<String>,
}
