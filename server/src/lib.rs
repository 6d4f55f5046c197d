pub mod api;
pub mod config;
pub mod telemetry;

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::Router;
use pantry_core::client::PING_PATH;
use pantry_core::LlmProvider;
use std::sync::Arc;
use std::time::Duration;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::trace::TraceLayer;
use tracing::{Level, Span};
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across all handlers: the one generation provider.
pub type AppState = Arc<dyn LlmProvider>;

/// Build the full application router: API routes, Swagger UI and request tracing.
pub fn build_router(state: AppState) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    Router::new()
        .merge(api::router())
        .merge(swagger_ui)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(log_response)
                .on_failure(log_failure),
        )
}

fn request_span(request: &Request<Body>) -> Span {
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or(request.uri().path());

    // Liveness checks stay below info
    if matched_path == PING_PATH {
        tracing::trace_span!("http_request")
    } else {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            path = %matched_path,
        )
    }
}

fn log_response(response: &Response<Body>, latency: Duration, span: &Span) {
    if span.metadata().map(|m| m.level()) == Some(&Level::TRACE) {
        return;
    }
    let status = response.status();
    let latency_ms = latency.as_millis();
    if status.is_server_error() {
        tracing::error!(status = %status.as_u16(), %latency_ms, "request failed with server error");
    } else if status.is_client_error() {
        tracing::warn!(status = %status.as_u16(), %latency_ms, "request rejected");
    } else {
        tracing::info!(status = %status.as_u16(), %latency_ms, "request completed");
    }
}

fn log_failure(error: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
    tracing::error!(
        error = %error,
        latency_ms = %latency.as_millis(),
        "request failed"
    );
}
