//! Category repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::entities::category::{self, Entity as CategoryEntity};
use crate::domain::{Category, CategoryPatch, NewCategory};
use crate::errors::{AppError, AppResult};

/// Category persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, new: NewCategory) -> AppResult<Category>;
    async fn list(&self) -> AppResult<Vec<Category>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>>;
    async fn update(&self, id: Uuid, patch: CategoryPatch) -> AppResult<Category>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed category store.
pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryStore {
    async fn create(&self, new: NewCategory) -> AppResult<Category> {
        let now = chrono::Utc::now();
        let active = category::ActiveModel {
            id: Set(Uuid::new_v4()),
            category_name: Set(new.category_name),
            category_description: Set(new.category_description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Category::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Category>> {
        let models = CategoryEntity::find()
            .order_by_asc(category::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        let model = CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(Category::from))
    }

    async fn update(&self, id: Uuid, patch: CategoryPatch) -> AppResult<Category> {
        let model = CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("Category"))?;

        let mut active: category::ActiveModel = model.into();
        if let Some(name) = patch.category_name {
            active.category_name = Set(name);
        }
        if let Some(description) = patch.category_description {
            active.category_description = Set(description);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Category::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = CategoryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Category"));
        }

        Ok(())
    }
}
