//! Supplier table entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub supplier_name: String,
    #[sea_orm(unique)]
    pub supplier_email: String,
    pub supplier_phone: String,
    pub supplier_address: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Supplier {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            supplier_name: model.supplier_name,
            supplier_email: model.supplier_email,
            supplier_phone: model.supplier_phone,
            supplier_address: model.supplier_address,
            created_at: model.created_at,
        }
    }
}
