//! Shared types for consistent response shapes.

mod response;

pub use response::{ApiResponse, Collection, Created, Document, Resource};
