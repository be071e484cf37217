//! # Common Errors
//!
//! Cross-layer error types that carry no infrastructure dependency.
//! Access-control errors live in [`crate::auth::error`]; this module holds
//! the domain-neutral remainder.

pub mod entity;

pub use entity::NotFoundError;
