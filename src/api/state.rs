//! Application state - Dependency injection container.
//!
//! Holds the service trait objects only; handlers never see the
//! database or repositories directly.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, CategoryService, OrderService, ProductService, Services, SupplierService,
    UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub category_service: Arc<dyn CategoryService>,
    pub product_service: Arc<dyn ProductService>,
    pub supplier_service: Arc<dyn SupplierService>,
    pub order_service: Arc<dyn OrderService>,
}

impl AppState {
    /// Create application state from the database and config.
    pub fn from_config(database: &Database, config: Config) -> Self {
        Self::new(Services::from_connection(database.get_connection(), config))
    }

    /// Create application state from a prebuilt service bundle.
    ///
    /// Tests use this with hand-rolled service implementations.
    pub fn new(services: Services) -> Self {
        Self {
            auth_service: services.auth,
            user_service: services.users,
            category_service: services.categories,
            product_service: services.products,
            supplier_service: services.suppliers,
            order_service: services.orders,
        }
    }
}
