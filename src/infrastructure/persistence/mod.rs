//! PostgreSQL repository implementations.
//!
//! - [`PgUserRepository`] - Read access to the users table

pub mod pg_user_repository;

pub use pg_user_repository::{PgUserRepository, UserTable};
