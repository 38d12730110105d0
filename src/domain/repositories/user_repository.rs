//! Repository trait for user records.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the users table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every record currently in the table.
    ///
    /// No ordering is guaranteed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or if a row cannot be
    /// mapped to a [`User`].
    async fn find_all(&self) -> Result<Vec<User>, AppError>;
}
