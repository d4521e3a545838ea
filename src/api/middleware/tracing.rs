//! HTTP request/response tracing middleware.

use std::time::Duration;

use axum::{body::Body, http::Response};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Creates the access log layer.
///
/// Every request gets an `INFO` span with method, URI and HTTP version.
/// One event is emitted per response with status and latency; its level
/// follows the status class:
///
/// | Status | Level |
/// |--------|-------|
/// | 5xx    | ERROR |
/// | 4xx    | WARN  |
/// | other  | INFO  |
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/url version=HTTP/1.1}: status=201 latency_ms=12 Response
/// WARN request{method=GET uri=/url version=HTTP/1.1}: status=401 latency_ms=0 Response
/// ```
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    DefaultMakeSpan,
    (),
    fn(&Response<Body>, Duration, &Span),
> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(())
        .on_response(log_response as fn(&Response<Body>, Duration, &Span))
}

fn log_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    let status = response.status().as_u16();
    let latency_ms = latency.as_millis() as u64;

    if response.status().is_server_error() {
        tracing::error!(status, latency_ms, "Response");
    } else if response.status().is_client_error() {
        tracing::warn!(status, latency_ms, "Response");
    } else {
        tracing::info!(status, latency_ms, "Response");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::get};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_layer_passes_responses_through() {
        let app = Router::new()
            .route("/ok", get(|| async { "ok" }))
            .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
            .layer(layer());

        let response = app
            .clone()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/ok")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
