//! Service container - wires repositories into services at startup.
//!
//! SOLID (DIP): Everything downstream depends on the service traits,
//! not the concrete managers built here.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, CategoryManager, CategoryService, OrderManager, OrderService,
    ProductManager, ProductService, SupplierManager, SupplierService, UserManager, UserService,
};
use crate::config::Config;
use crate::infra::{Persistence, Store};

/// Bundle of all application services.
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UserService>,
    pub categories: Arc<dyn CategoryService>,
    pub products: Arc<dyn ProductService>,
    pub suppliers: Arc<dyn SupplierService>,
    pub orders: Arc<dyn OrderService>,
}

impl Services {
    /// Build all services over a storage port.
    pub fn from_store(store: Arc<dyn Store>, config: Config) -> Self {
        Self {
            auth: Arc::new(Authenticator::new(store.users(), config)),
            users: Arc::new(UserManager::new(store.users())),
            categories: Arc::new(CategoryManager::new(store.categories())),
            products: Arc::new(ProductManager::new(store.products())),
            suppliers: Arc::new(SupplierManager::new(store.suppliers())),
            orders: Arc::new(OrderManager::new(store.orders())),
        }
    }

    /// Build all services from a database connection and config.
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        Self::from_store(Arc::new(Persistence::new(db)), config)
    }
}
