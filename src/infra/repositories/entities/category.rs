//! Category table entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub category_name: String,
    pub category_description: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Category {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            category_name: model.category_name,
            category_description: model.category_description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
