use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use enrollment_api::state::AppState;

/// Build the router over a lazy pool: no connection is attempted until a
/// handler actually touches the database, so routing-level behavior is
/// testable without one.
fn test_app() -> axum::Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/enrollment_test")
        .expect("lazy pool");
    enrollment_api::app(AppState { pool })
}

async fn body_json(response: axum::response::Response) -> Result<serde_json::Value> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn delete_is_rejected_with_allow_header() -> Result<()> {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/students/basic-ed")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let allow = response
        .headers()
        .get("allow")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    for method in ["GET", "POST", "PUT"] {
        assert!(allow.contains(method), "Allow header missing {}: {:?}", method, allow);
    }
    assert!(!allow.contains("DELETE"), "Allow header should not list DELETE: {:?}", allow);

    let body = body_json(response).await?;
    assert_eq!(body["error"], "Method DELETE Not Allowed");

    Ok(())
}

#[tokio::test]
async fn patch_is_rejected_like_any_unsupported_method() -> Result<()> {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/students/basic-ed")
                .header("content-type", "application/json")
                .body(Body::from("{}"))?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(response).await?;
    assert_eq!(body["error"], "Method PATCH Not Allowed");

    Ok(())
}

#[tokio::test]
async fn root_describes_the_service() -> Result<()> {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(body["name"], "Enrollment API");
    assert!(
        body["endpoints"]["students"].as_str().unwrap_or_default().contains("/api/students/basic-ed"),
        "student resource missing from endpoint listing: {}",
        body
    );

    Ok(())
}

#[tokio::test]
async fn unknown_route_is_a_plain_404() -> Result<()> {
    let response = test_app()
        .oneshot(Request::builder().uri("/api/students/college").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
