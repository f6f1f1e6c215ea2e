//! Storage port - the single seam between services and persistence.
//!
//! A `Store` is constructed once at startup and handed to the service
//! container, which threads the repositories through.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    CategoryRepository, CategoryStore, OrderRepository, OrderStore, ProductRepository,
    ProductStore, SupplierRepository, SupplierStore, UserRepository, UserStore,
};

/// Storage port aggregating the per-collection repositories.
pub trait Store: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;
    fn categories(&self) -> Arc<dyn CategoryRepository>;
    fn products(&self) -> Arc<dyn ProductRepository>;
    fn suppliers(&self) -> Arc<dyn SupplierRepository>;
    fn orders(&self) -> Arc<dyn OrderRepository>;
}

/// SeaORM-backed implementation of the storage port.
pub struct Persistence {
    user_repo: Arc<UserStore>,
    category_repo: Arc<CategoryStore>,
    product_repo: Arc<ProductStore>,
    supplier_repo: Arc<SupplierStore>,
    order_repo: Arc<OrderStore>,
}

impl Persistence {
    /// Build all repositories over a shared connection pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            category_repo: Arc::new(CategoryStore::new(db.clone())),
            product_repo: Arc::new(ProductStore::new(db.clone())),
            supplier_repo: Arc::new(SupplierStore::new(db.clone())),
            order_repo: Arc::new(OrderStore::new(db)),
        }
    }
}

impl Store for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.category_repo.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.product_repo.clone()
    }

    fn suppliers(&self) -> Arc<dyn SupplierRepository> {
        self.supplier_repo.clone()
    }

    fn orders(&self) -> Arc<dyn OrderRepository> {
        self.order_repo.clone()
    }
}
