//! User entity representing a single row of the externally managed users table.

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::error::AppError;

/// A user record as stored in the database.
///
/// The column set of the users table is owned by whoever manages the schema,
/// so every column is kept in `fields` under its declared name, including the
/// key column. Serializing a `User` yields exactly that object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    #[serde(skip)]
    id: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl User {
    /// Builds a user from a row rendered as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the key column is missing or its
    /// value is not a string.
    pub fn from_row(key_column: &str, fields: Map<String, Value>) -> Result<Self, AppError> {
        let id = match fields.get(key_column) {
            Some(Value::String(id)) => id.clone(),
            Some(other) => {
                return Err(AppError::internal(
                    "User key is not a string",
                    json!({"column": key_column, "value": other}),
                ));
            }
            None => {
                return Err(AppError::internal(
                    "User key column missing from row",
                    json!({"column": key_column}),
                ));
            }
        };

        Ok(Self { id, fields })
    }

    /// Unique key of the record.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All columns of the record by name.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
