//! # Web Utilities
//!
//! HTTP-layer helpers shared by the server setup: the CORS layer builder
//! and the JSON 404 fallback.

pub mod cors;
pub mod fallback;

pub use cors::build_cors;
pub use fallback::not_found;
