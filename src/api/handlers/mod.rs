//! HTTP request handlers.

pub mod fallback;
pub mod users;

pub use fallback::not_found_handler;
pub use users::list_users_handler;
