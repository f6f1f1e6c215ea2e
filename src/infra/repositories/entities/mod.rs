//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Each module also carries the `Model` -> domain conversion.

pub mod category;
pub mod order;
pub mod product;
pub mod supplier;
pub mod user;
