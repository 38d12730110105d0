//! Application layer services.
//!
//! Services consume repository traits and expose operations to HTTP handlers
//! and the admin CLI.
//!
//! - [`services::user_service::UserService`] - User listing

pub mod services;
