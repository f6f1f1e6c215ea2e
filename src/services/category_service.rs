//! Category service - CRUD over product categories.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Category, CategoryPatch, NewCategory};
use crate::errors::{AppError, AppResult};
use crate::infra::CategoryRepository;

/// Category service trait for dependency injection.
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// Create a new category
    async fn create_category(&self, new: NewCategory) -> AppResult<Category>;

    /// List all categories
    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    /// Get category by ID
    async fn get_category(&self, id: Uuid) -> AppResult<Category>;

    /// Update category details
    async fn update_category(&self, id: Uuid, patch: CategoryPatch) -> AppResult<Category>;

    /// Delete category
    async fn delete_category(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of CategoryService.
pub struct CategoryManager {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryManager {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl CategoryService for CategoryManager {
    async fn create_category(&self, new: NewCategory) -> AppResult<Category> {
        self.categories.create(new).await
    }

    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.categories.list().await
    }

    async fn get_category(&self, id: Uuid) -> AppResult<Category> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category"))
    }

    async fn update_category(&self, id: Uuid, patch: CategoryPatch) -> AppResult<Category> {
        self.categories.update(id, patch).await
    }

    async fn delete_category(&self, id: Uuid) -> AppResult<()> {
        self.categories.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockCategoryRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_category() -> Category {
        let now = Utc::now();
        Category {
            id: Uuid::new_v4(),
            category_name: "Beverages".to_string(),
            category_description: "Drinks and juices".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn get_category_maps_missing_row_to_not_found() {
        let id = Uuid::new_v4();
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = CategoryManager::new(Arc::new(categories));
        let err = service.get_category(id).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_category_passes_through() {
        let created = sample_category();
        let expected_id = created.id;

        let mut categories = MockCategoryRepository::new();
        categories
            .expect_create()
            .returning(move |_| Ok(created.clone()));

        let service = CategoryManager::new(Arc::new(categories));
        let category = service
            .create_category(NewCategory {
                category_name: "Beverages".to_string(),
                category_description: "Drinks and juices".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(category.id, expected_id);
    }
}
