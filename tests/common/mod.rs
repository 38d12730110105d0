#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use user_service::application::services::UserService;
use user_service::infrastructure::persistence::{PgUserRepository, UserTable};
use user_service::state::AppState;

pub async fn create_test_user(pool: &PgPool, id: &str, name: &str) {
    sqlx::query("INSERT INTO users (id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_full_user(pool: &PgPool, id: &str, name: &str, email: Option<&str>) {
    sqlx::query(
        "INSERT INTO users (id, name, email, active, login_count) VALUES ($1, $2, $3, FALSE, 7)",
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .execute(pool)
    .await
    .unwrap();
}

pub fn create_test_state(pool: PgPool) -> AppState {
    create_test_state_for(pool, UserTable::default())
}

pub fn create_test_state_for(pool: PgPool, table: UserTable) -> AppState {
    let user_repo = Arc::new(PgUserRepository::new(Arc::new(pool), table));
    let user_service = Arc::new(UserService::new(user_repo));

    AppState::new(user_service)
}
