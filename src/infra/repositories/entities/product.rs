//! Product table entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub product_name: String,
    pub product_description: String,
    pub product_price: f64,
    pub product_quantity: i32,
    pub product_category: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            product_name: model.product_name,
            product_description: model.product_description,
            product_price: model.product_price,
            product_quantity: model.product_quantity,
            product_category: model.product_category,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
