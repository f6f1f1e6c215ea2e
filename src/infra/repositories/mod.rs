//! Repository layer - Data access abstraction
//!
//! One repository trait per collection, each backed by a SeaORM store.
//! Services depend on the traits only, so the underlying store technology
//! stays an implementation detail.

pub(crate) mod entities;

mod category_repository;
mod order_repository;
mod product_repository;
mod supplier_repository;
mod user_repository;

pub use category_repository::{CategoryRepository, CategoryStore};
pub use order_repository::{OrderRepository, OrderStore};
pub use product_repository::{ProductRepository, ProductStore};
pub use supplier_repository::{SupplierRepository, SupplierStore};
pub use user_repository::{UserRepository, UserStore};

// Mocks are generated for unit tests only
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use supplier_repository::MockSupplierRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
