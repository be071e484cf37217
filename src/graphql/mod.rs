//! # GraphQL Layer
//!
//! The transport-facing pieces: the axum endpoint handler, the schema
//! builder and the per-field scope guard. Domain resolvers live in
//! [`crate::user`].

pub mod graphiql;
pub mod guard;
pub mod handler;
pub mod schema;

pub use graphiql::graphiql_handler;
pub use guard::RequireScope;
pub use handler::graphql_handler;
pub use schema::{AppSchema, build_schema};
