mod common;

use sqlx::PgPool;
use std::collections::HashSet;
use std::sync::Arc;
use user_service::AppError;
use user_service::domain::repositories::UserRepository;
use user_service::infrastructure::persistence::{PgUserRepository, UserTable};

#[sqlx::test(migrations = "tests/migrations")]
async fn test_find_all_empty(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool), UserTable::default());

    let result = repo.find_all().await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

#[sqlx::test(migrations = "tests/migrations")]
async fn test_find_all_returns_every_row(pool: PgPool) {
    common::create_test_user(&pool, "u1", "Alice").await;
    common::create_test_user(&pool, "u2", "Bob").await;
    let repo = PgUserRepository::new(Arc::new(pool), UserTable::default());

    let users = repo.find_all().await.unwrap();

    let ids: HashSet<&str> = users.iter().map(|u| u.id()).collect();
    assert_eq!(ids, HashSet::from(["u1", "u2"]));
}

#[sqlx::test(migrations = "tests/migrations")]
async fn test_find_all_preserves_columns(pool: PgPool) {
    common::create_full_user(&pool, "u1", "Alice", None).await;
    let repo = PgUserRepository::new(Arc::new(pool), UserTable::default());

    let users = repo.find_all().await.unwrap();

    assert_eq!(users.len(), 1);
    let fields = users[0].fields();
    assert_eq!(fields.len(), 5);
    assert_eq!(fields["id"], "u1");
    assert_eq!(fields["name"], "Alice");
    assert!(fields["email"].is_null());
    assert_eq!(fields["active"], false);
    assert_eq!(fields["login_count"], 7);
}

#[sqlx::test(migrations = "tests/migrations")]
async fn test_find_all_reflects_current_state(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool.clone()), UserTable::default());

    assert!(repo.find_all().await.unwrap().is_empty());

    common::create_test_user(&pool, "u1", "Alice").await;

    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "tests/migrations")]
async fn test_find_all_schema_qualified_table(pool: PgPool) {
    sqlx::query("INSERT INTO smartpra.app_users (user_id, role) VALUES ('admin', 'owner')")
        .execute(&pool)
        .await
        .unwrap();
    let repo = PgUserRepository::new(
        Arc::new(pool),
        UserTable::new("smartpra.app_users", "user_id"),
    );

    let users = repo.find_all().await.unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id(), "admin");
    assert_eq!(users[0].fields()["role"], "owner");
}

#[sqlx::test(migrations = "tests/migrations")]
async fn test_find_all_missing_table(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool), UserTable::new("no_such_table", "id"));

    let result = repo.find_all().await;

    assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
}

#[sqlx::test(migrations = "tests/migrations")]
async fn test_find_all_wrong_key_column(pool: PgPool) {
    common::create_test_user(&pool, "u1", "Alice").await;
    let repo = PgUserRepository::new(Arc::new(pool), UserTable::new("users", "user_id"));

    let result = repo.find_all().await;

    assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
}

#[sqlx::test(migrations = "tests/migrations")]
async fn test_find_all_column_named_like_alias(pool: PgPool) {
    sqlx::query("INSERT INTO aliased_users (id, t) VALUES ('u1', 'x')")
        .execute(&pool)
        .await
        .unwrap();
    let repo = PgUserRepository::new(Arc::new(pool), UserTable::new("aliased_users", "id"));

    let users = repo.find_all().await.unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id(), "u1");
    assert_eq!(users[0].fields().len(), 2);
    assert_eq!(users[0].fields()["t"], "x");
}

#[sqlx::test(migrations = "tests/migrations")]
async fn test_find_all_mixed_case_names(pool: PgPool) {
    sqlx::query("INSERT INTO MixedCaseUsers (UserId) VALUES ('u1')")
        .execute(&pool)
        .await
        .unwrap();
    let repo = PgUserRepository::new(
        Arc::new(pool),
        UserTable::new("MixedCaseUsers", "UserId"),
    );

    let users = repo.find_all().await.unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id(), "u1");
}

#[sqlx::test(migrations = "tests/migrations")]
async fn test_count(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool.clone()), UserTable::default());

    assert_eq!(repo.count().await.unwrap(), 0);

    common::create_test_user(&pool, "u1", "Alice").await;
    common::create_test_user(&pool, "u2", "Bob").await;

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test(migrations = "tests/migrations")]
async fn test_count_ignores_key_mapping(pool: PgPool) {
    common::create_test_user(&pool, "u1", "Alice").await;
    let repo = PgUserRepository::new(Arc::new(pool), UserTable::new("users", "user_id"));

    assert!(repo.find_all().await.is_err());
    assert_eq!(repo.count().await.unwrap(), 1);
}
