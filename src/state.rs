//! Shared state handed to every request handler.

use std::sync::Arc;

use crate::application::services::UserService;

/// Dependencies wired once at startup and cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }
}
