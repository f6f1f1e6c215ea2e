//! Product repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::entities::product::{self, Entity as ProductEntity};
use crate::domain::{NewProduct, Product, ProductPatch};
use crate::errors::{AppError, AppResult};

/// Product persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, new: NewProduct) -> AppResult<Product>;
    async fn list(&self) -> AppResult<Vec<Product>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;
    async fn update(&self, id: Uuid, patch: ProductPatch) -> AppResult<Product>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed product store.
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn create(&self, new: NewProduct) -> AppResult<Product> {
        let now = chrono::Utc::now();
        let active = product::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_name: Set(new.product_name),
            product_description: Set(new.product_description),
            product_price: Set(new.product_price),
            product_quantity: Set(new.product_quantity),
            product_category: Set(new.product_category),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .order_by_asc(product::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let model = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(Product::from))
    }

    async fn update(&self, id: Uuid, patch: ProductPatch) -> AppResult<Product> {
        let model = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("Product"))?;

        let mut active: product::ActiveModel = model.into();
        if let Some(name) = patch.product_name {
            active.product_name = Set(name);
        }
        if let Some(description) = patch.product_description {
            active.product_description = Set(description);
        }
        if let Some(price) = patch.product_price {
            active.product_price = Set(price);
        }
        if let Some(quantity) = patch.product_quantity {
            active.product_quantity = Set(quantity);
        }
        if let Some(category) = patch.product_category {
            active.product_category = Set(category);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ProductEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Product"));
        }

        Ok(())
    }
}
