//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Location of the users table.
///
/// Both names must already be validated SQL identifiers (see
/// [`crate::config::Config::validate`]); they are quoted, not escaped.
/// Names are folded to lower case on construction, matching how PostgreSQL
/// stores unquoted identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTable {
    /// Table name, optionally schema-qualified (`schema.table`).
    pub name: String,
    /// Primary key column holding the string user id.
    pub key_column: String,
}

impl UserTable {
    pub fn new(name: impl Into<String>, key_column: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            key_column: key_column.into().to_lowercase(),
        }
    }

    /// Quoted, possibly schema-qualified table reference.
    pub fn quoted_name(&self) -> String {
        self.name
            .split('.')
            .map(|part| format!("\"{part}\""))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Query returning every row as a single `jsonb` object.
    ///
    /// `t.*` always denotes the whole row, even when the table has a column
    /// named `t`.
    pub fn select_all_sql(&self) -> String {
        format!("SELECT to_jsonb(t.*) AS record FROM {} t", self.quoted_name())
    }

    /// Query counting the rows of the table.
    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM {}", self.quoted_name())
    }
}

impl Default for UserTable {
    fn default() -> Self {
        Self::new("users", "id")
    }
}

/// PostgreSQL repository for user records.
///
/// Rows are read through `to_jsonb` so the column set is whatever the
/// externally managed schema defines.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
    table: UserTable,
    select_all: String,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>, table: UserTable) -> Self {
        let select_all = table.select_all_sql();
        Self {
            pool,
            table,
            select_all,
        }
    }

    /// Counts the rows of the users table without mapping them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(&self.table.count_sql())
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let rows: Vec<Json<Map<String, Value>>> = sqlx::query_scalar(&self.select_all)
            .fetch_all(self.pool.as_ref())
            .await?;

        tracing::debug!(table = %self.table.name, rows = rows.len(), "loaded users");

        rows.into_iter()
            .map(|Json(fields)| User::from_row(&self.table.key_column, fields))
            .collect()
    }
}
