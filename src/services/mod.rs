//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion: handlers see only the service traits, and the
//! services see only the repository traits.

mod auth_service;
mod category_service;
pub mod container;
mod order_service;
mod product_service;
mod supplier_service;
mod user_service;

// Service Container
pub use container::Services;

// Service traits and implementations
pub use auth_service::{AuthService, AuthSession, Authenticator, Claims};
pub use category_service::{CategoryManager, CategoryService};
pub use order_service::{OrderManager, OrderService};
pub use product_service::{ProductManager, ProductService};
pub use supplier_service::{SupplierManager, SupplierService};
pub use user_service::{UserManager, UserService, UserUpdate};
