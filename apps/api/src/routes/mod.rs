pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::ats::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/ats-score", post(handlers::handle_ats_score))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::ats::extract::DocumentTextExtractor;
    use crate::ats::lexicon::Lexicon;
    use crate::config::DEFAULT_MAX_UPLOAD_BYTES;

    fn app() -> Router {
        let state = AppState::new(
            Arc::new(Lexicon::builtin()),
            Arc::new(DocumentTextExtractor::new(std::env::temp_dir())),
        );
        build_router(state, DEFAULT_MAX_UPLOAD_BYTES)
    }

    #[tokio::test]
    async fn test_any_origin_allowed_on_ats_score() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/ats-score")
            .header(header::ORIGIN, "https://jobs.example.com")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_preflight_allows_post_from_any_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/ats-score")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert!(response.status().is_success());
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
