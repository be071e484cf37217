//! # keyway_user_api
//!
//! GraphQL user CRUD service gated by a Keycloak-backed guard pipeline.
//!
//! Every request to the GraphQL endpoint runs through the same sequence:
//! bearer extraction, token introspection against the identity provider,
//! identity attachment, then per-operation scope checks. Any failure along
//! the way denies the request; the pipeline never falls through open.
//!
//! - [`auth`] — the guard pipeline and the identity provider port
//! - [`user`] — the one managed entity and its resolvers
//! - [`graphql`] — endpoint handler, schema builder, field guard
//! - [`db`] / [`time`] — infrastructure ports and their MySQL/system adapters
//! - [`config`] — environment-driven configuration
//! - [`web`] — CORS and fallback plumbing
//! - [`error`] — domain-neutral error types

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod time;
pub mod user;
pub mod web;
