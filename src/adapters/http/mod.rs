//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the full application: the health probe at the
//! root and the assessment API under `/api`.

pub mod assessment;

use std::time::Duration;

use axum::{http::HeaderValue, routing::get, Json, Router};
use http::Method;
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::ServerConfig;

pub use assessment::{assessment_routes, AssessmentHandlers};

/// Builds the application router with tracing, timeout and CORS layers.
pub fn app_router(handlers: AssessmentHandlers, server: &ServerConfig) -> Router {
    let api = assessment_routes(handlers).layer(cors_layer(&server.cors_origins_list()));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(TimeoutLayer::new(Duration::from_secs(
                    server.request_timeout_secs,
                ))),
        )
}

/// GET /health - Liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Any origin when the list is empty, otherwise only the listed origins.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "ok");
    }

    #[test]
    fn cors_layer_accepts_empty_and_listed_origins() {
        let _ = cors_layer(&[]);
        let _ = cors_layer(&["https://forms.bcssaints.org".to_string(), "bad\norigin".to_string()]);
    }
}
