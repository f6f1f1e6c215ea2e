//! Response envelopes reproducing the API's wire contract.
//!
//! Every endpoint answers `{"success": bool, ...}`. Successful resource
//! responses nest the record under its own key, e.g.
//! `{"success": true, "category": {...}}` or
//! `{"success": true, "categories": [...]}`.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::{Category, Order, Product, Supplier, User};

/// Wire naming for a resource: the JSON keys used when enveloping a
/// single record or a collection.
pub trait Resource {
    const SINGULAR: &'static str;
    const PLURAL: &'static str;
}

impl Resource for Category {
    const SINGULAR: &'static str = "category";
    const PLURAL: &'static str = "categories";
}

impl Resource for Product {
    const SINGULAR: &'static str = "product";
    const PLURAL: &'static str = "products";
}

impl Resource for Supplier {
    const SINGULAR: &'static str = "supplier";
    const PLURAL: &'static str = "suppliers";
}

impl Resource for Order {
    const SINGULAR: &'static str = "order";
    const PLURAL: &'static str = "orders";
}

impl Resource for User {
    const SINGULAR: &'static str = "user";
    const PLURAL: &'static str = "users";
}

/// Single-record envelope: `{"success": true, "<singular>": {...}}`
/// with an optional human-readable message.
#[derive(Debug)]
pub struct Document<T> {
    data: T,
    message: Option<&'static str>,
}

impl<T> Document<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: &'static str) -> Self {
        Self {
            data,
            message: Some(message),
        }
    }
}

impl<T: Resource + Serialize> Serialize for Document<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.message.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("success", &true)?;
        if let Some(message) = self.message {
            map.serialize_entry("message", message)?;
        }
        map.serialize_entry(T::SINGULAR, &self.data)?;
        map.end()
    }
}

impl<T: Resource + Serialize> IntoResponse for Document<T> {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

/// Collection envelope: `{"success": true, "<plural>": [...]}`
#[derive(Debug)]
pub struct Collection<T>(pub Vec<T>);

impl<T: Resource + Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("success", &true)?;
        map.serialize_entry(T::PLURAL, &self.0)?;
        map.end()
    }
}

impl<T: Resource + Serialize> IntoResponse for Collection<T> {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

/// Created response helper: 201 with a `Document` body.
pub struct Created<T>(pub Document<T>);

impl<T: Resource + Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

/// Message-only success response: `{"success": true, "message": "..."}`
#[derive(Debug, serde::Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_category() -> Category {
        Category {
            id: Uuid::new_v4(),
            category_name: "Beverages".to_string(),
            category_description: "Drinks".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn document_envelope_uses_singular_key() {
        let doc = Document::with_message(sample_category(), "Category created successfully");
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Category created successfully");
        assert_eq!(json["category"]["categoryName"], "Beverages");
        assert!(json["category"]["_id"].is_string());
    }

    #[test]
    fn collection_envelope_uses_plural_key() {
        let list = Collection(vec![sample_category()]);
        let json = serde_json::to_value(&list).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["categories"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn message_response_shape() {
        let json = serde_json::to_value(ApiResponse::message("Category deleted successfully")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Category deleted successfully");
    }
}
