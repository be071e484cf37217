//! # Database Infrastructure
//!
//! A thin synchronous database layer: the [`port`] module defines the
//! abstract [`Db`] interface plus parameter/row types, and
//! [`mysql_adapter`] implements it over a `mysql::Pool`.
//!
//! Repositories depend only on `Arc<dyn Db>`, so tests run against an
//! in-memory fake and never need a database.

pub mod mysql_adapter;
pub mod port;

pub use mysql_adapter::MySqlDb;
pub use port::{Db, Param, Row, Value};
