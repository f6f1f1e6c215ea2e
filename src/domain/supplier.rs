//! Supplier domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Supplier contact record. Email is unique within the collection.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub supplier_name: String,
    pub supplier_email: String,
    pub supplier_phone: String,
    pub supplier_address: String,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a supplier.
#[derive(Debug, Clone)]
pub struct NewSupplier {
    pub supplier_name: String,
    pub supplier_email: String,
    pub supplier_phone: String,
    pub supplier_address: String,
}

/// Partial update of mutable supplier fields.
#[derive(Debug, Clone, Default)]
pub struct SupplierPatch {
    pub supplier_name: Option<String>,
    pub supplier_email: Option<String>,
    pub supplier_phone: Option<String>,
    pub supplier_address: Option<String>,
}
