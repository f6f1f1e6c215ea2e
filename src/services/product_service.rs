//! Product service - CRUD over the product catalog.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewProduct, Product, ProductPatch};
use crate::errors::{AppError, AppResult};
use crate::infra::ProductRepository;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Create a new product
    async fn create_product(&self, new: NewProduct) -> AppResult<Product>;

    /// List all products
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Get product by ID
    async fn get_product(&self, id: Uuid) -> AppResult<Product>;

    /// Update product details
    async fn update_product(&self, id: Uuid, patch: ProductPatch) -> AppResult<Product>;

    /// Delete product
    async fn delete_product(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ProductService.
pub struct ProductManager {
    products: Arc<dyn ProductRepository>,
}

impl ProductManager {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn create_product(&self, new: NewProduct) -> AppResult<Product> {
        self.products.create(new).await
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.products.list().await
    }

    async fn get_product(&self, id: Uuid) -> AppResult<Product> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product"))
    }

    async fn update_product(&self, id: Uuid, patch: ProductPatch) -> AppResult<Product> {
        self.products.update(id, patch).await
    }

    async fn delete_product(&self, id: Uuid) -> AppResult<()> {
        self.products.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockProductRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn get_product_maps_missing_row_to_not_found() {
        let id = Uuid::new_v4();
        let mut products = MockProductRepository::new();
        products
            .expect_find_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = ProductManager::new(Arc::new(products));
        let err = service.get_product(id).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_product_passes_patch_through() {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let updated = Product {
            id,
            product_name: "Coffee".to_string(),
            product_description: "Whole beans".to_string(),
            product_price: 12.5,
            product_quantity: 40,
            product_category: "Beverages".to_string(),
            created_at: now,
            updated_at: now,
        };

        let mut products = MockProductRepository::new();
        products
            .expect_update()
            .withf(move |got_id, patch| *got_id == id && patch.product_price == Some(12.5))
            .returning(move |_, _| Ok(updated.clone()));

        let service = ProductManager::new(Arc::new(products));
        let patch = ProductPatch {
            product_price: Some(12.5),
            ..Default::default()
        };

        let product = service.update_product(id, patch).await.unwrap();
        assert_eq!(product.product_price, 12.5);
    }
}
