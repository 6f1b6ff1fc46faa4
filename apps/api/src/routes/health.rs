use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports service version and which stopword lexicon is active.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let source = state.lexicon.source();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "ats-api",
        "lexicon": {
            "source": source.label(),
            "path": source.path().map(|p| p.display().to_string()),
            "stopwords": state.lexicon.len(),
        }
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::ats::extract::DocumentTextExtractor;
    use crate::ats::lexicon::Lexicon;
    use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
    use crate::routes::build_router;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_health_reports_builtin_lexicon() {
        let state = AppState::new(
            Arc::new(Lexicon::builtin()),
            Arc::new(DocumentTextExtractor::new(std::env::temp_dir())),
        );
        let response = build_router(state, DEFAULT_MAX_UPLOAD_BYTES)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["lexicon"]["source"], "builtin");
        assert!(body["lexicon"]["path"].is_null());
        assert_eq!(body["lexicon"]["stopwords"], 179);
    }
}
