//! Infrastructure layer - External systems integration
//!
//! Database connection management, SeaORM repositories and the storage
//! port handed to the service layer.

pub mod db;
pub mod repositories;
pub mod store;

pub use db::{Database, Migrator};
pub use repositories::{
    CategoryRepository, OrderRepository, ProductRepository, SupplierRepository, UserRepository,
};
pub use store::{Persistence, Store};
