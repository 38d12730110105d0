//! API route configuration.

use crate::api::handlers::list_users_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET /users` - List all user records
///
/// Any other method on `/users` is answered with `405 Method Not Allowed`.
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users_handler))
}
