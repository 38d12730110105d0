//! Handler for the user listing endpoint.

use axum::{Json, extract::State};

use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every user record.
///
/// # Endpoint
///
/// `GET /users`
///
/// Takes no parameters; any query string is ignored.
///
/// # Response
///
/// A JSON array with one object per row, each holding the row's columns under
/// their declared names:
///
/// ```json
/// [
///   { "id": "u1", "name": "Alice" },
///   { "id": "u2", "name": "Bob" }
/// ]
/// ```
///
/// # Errors
///
/// Returns 500 with a JSON error body if the database cannot be read.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = state.user_service.get_all_users().await?;
    Ok(Json(users))
}
