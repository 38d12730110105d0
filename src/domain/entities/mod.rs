//! Core domain entities.
//!
//! - [`User`] - A record of the users table

pub mod user;

pub use user::User;
