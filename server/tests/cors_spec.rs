//! Cross-origin contract tests
//!
//! Policy text is public: every response carries unrestricted read headers,
//! and an OPTIONS probe is answered with an empty 204 regardless of path.

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use policy_server::{create_app, AppState};
use tower::util::ServiceExt;

fn assert_read_headers(response: &axum::response::Response) {
    let headers = response.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .and_then(|v| v.to_str().ok()),
        Some("GET, OPTIONS")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .and_then(|v| v.to_str().ok()),
        Some("Content-Type")
    );
}

#[tokio::test]
async fn given_any_path_when_options_requested_then_returns_empty_204() -> Result<()> {
    for path in ["/privacy/all", "/privacy/searchit", "/", "/no/such/route"] {
        // Act
        let response = create_app(AppState::new())
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await?;

        // Assert
        assert_eq!(response.status(), StatusCode::NO_CONTENT, "path {}", path);
        assert_read_headers(&response);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        assert!(bytes.is_empty(), "path {}", path);
    }

    Ok(())
}

#[tokio::test]
async fn given_list_request_then_response_allows_cross_origin_reads() -> Result<()> {
    let response = create_app(AppState::new())
        .oneshot(
            Request::builder()
                .uri("/privacy/all")
                .body(Body::empty())
                .unwrap(),
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_read_headers(&response);

    Ok(())
}

#[tokio::test]
async fn given_lookup_miss_then_error_response_still_allows_cross_origin_reads() -> Result<()> {
    let response = create_app(AppState::new())
        .oneshot(
            Request::builder()
                .uri("/privacy/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_read_headers(&response);

    Ok(())
}

#[tokio::test]
async fn given_fallback_response_then_read_headers_are_present() -> Result<()> {
    let response = create_app(AppState::new())
        .oneshot(
            Request::builder()
                .uri("/elsewhere")
                .body(Body::empty())
                .unwrap(),
        )
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_read_headers(&response);

    Ok(())
}
