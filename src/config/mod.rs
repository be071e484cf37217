//! # Configuration
//!
//! Environment-driven configuration, loaded once at startup through
//! [`app::AppConfig::from_env`] and handed down to the subsystems.

pub mod app;
pub mod db;
pub mod env;
pub mod keycloak;
pub mod web;

pub use app::AppConfig;
pub use db::{DbConfig, DbPool, create_pool};
pub use keycloak::KeycloakConfig;
pub use web::{CorsConfig, HttpConfig};
