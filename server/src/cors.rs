//! Cross-origin access middleware
//!
//! Policy text is public data: every response permits cross-origin reads
//! from any origin, with no credentials involved. An OPTIONS probe on any
//! path is answered with an empty 204 before routing, so capability
//! discovery works even against paths the router does not know.

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

fn apply_read_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}

/// Middleware stamping cross-origin read headers onto every response and
/// short-circuiting OPTIONS probes with an empty 204.
pub async fn allow_public_reads(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        debug!("Answering OPTIONS probe for {}", request.uri().path());
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_read_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    apply_read_headers(response.headers_mut());
    response
}
