//! User listing service.

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service giving HTTP handlers and the admin CLI access to user records.
///
/// Holds no state of its own; every call re-reads the table.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Returns all user records in the order produced by the repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.find_all().await
    }
}
