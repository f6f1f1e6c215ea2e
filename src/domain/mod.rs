//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod category;
pub mod order;
pub mod password;
pub mod product;
pub mod supplier;
pub mod user;

pub use category::{Category, CategoryPatch, NewCategory};
pub use order::{LineItem, NewOrder, Order, OrderPatch, OrderStatus};
pub use password::Password;
pub use product::{NewProduct, Product, ProductPatch};
pub use supplier::{NewSupplier, Supplier, SupplierPatch};
pub use user::{NewUser, User, UserPatch, UserRole};
