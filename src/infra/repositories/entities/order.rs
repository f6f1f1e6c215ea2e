//! Order table entity.
//!
//! Line items are stored as a JSON document on the order row so the
//! snapshot taken at creation time is preserved verbatim.

use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use crate::domain::LineItem;

/// JSON-backed line-item snapshot column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct OrderItems(pub Vec<LineItem>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    #[sea_orm(column_type = "Json")]
    pub products: OrderItems,
    pub total_amount: f64,
    pub status: String,
    pub shipping_address: String,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Order {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            order_number: model.order_number,
            customer_name: model.customer_name,
            customer_email: model.customer_email,
            products: model.products.0,
            total_amount: model.total_amount,
            status: crate::domain::OrderStatus::from(model.status.as_str()),
            shipping_address: model.shipping_address,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
