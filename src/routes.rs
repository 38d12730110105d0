//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /users` - List all user records
//! - anything else - JSON `404 Not Found`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::public_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::UserService;
    use crate::domain::repositories::MockUserRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(mock_repo: MockUserRepository) -> AppState {
        AppState::new(Arc::new(UserService::new(Arc::new(mock_repo))))
    }

    #[tokio::test]
    async fn test_trailing_slash_is_normalized() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_all().times(1).returning(|| Ok(vec![]));
        let app = app_router(state(mock_repo));

        let request = Request::builder()
            .uri("/users/")
            .body(Body::empty())
            .unwrap();
        let response = ServiceExt::<Request<Body>>::oneshot(app, request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_is_json_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_all().never();
        let app = app_router(state(mock_repo));

        let request = Request::builder()
            .uri("/users/u1")
            .body(Body::empty())
            .unwrap();
        let response = ServiceExt::<Request<Body>>::oneshot(app, request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }
}
