//! Category domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Product category. Products reference categories by name only
/// (a denormalized string, not a foreign key).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub category_name: String,
    pub category_description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub category_name: String,
    pub category_description: String,
}

/// Partial update of mutable category fields.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub category_name: Option<String>,
    pub category_description: Option<String>,
}
