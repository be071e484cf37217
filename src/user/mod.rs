//! # User Domain
//!
//! The one entity this service manages. [`model`] and [`input`] are the
//! GraphQL-facing types, [`repo`] the persistence port, [`mysql_repo`] its
//! production adapter and [`resolver`] the guarded operations.

pub mod input;
pub mod model;
pub mod mysql_repo;
pub mod repo;
pub mod resolver;

pub use input::CreateUserInput;
pub use model::User;
pub use mysql_repo::MySqlUserRepo;
pub use repo::{NewUser, UserRepo};
pub use resolver::{UserMutation, UserQuery};
