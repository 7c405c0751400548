pub mod record_get;
pub mod record_post;
pub mod record_put;

// Re-export handler functions for use in routing
pub use record_get::get as record_get;
pub use record_post::post as record_post;
pub use record_put::put as record_put;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

/// Query parameters shared by every method on the resource.
///
/// `studentId` selects one record (GET fetch-one, PUT); `userId` scopes the
/// list (GET fetch-list) and keys the insert (POST).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentParams {
    pub student_id: Option<String>,
    pub user_id: Option<String>,
}

impl StudentParams {
    /// An empty query value is treated the same as an absent one
    pub fn student_id(&self) -> Option<&str> {
        self.student_id.as_deref().filter(|s| !s.is_empty())
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|s| !s.is_empty())
    }
}

/// Fallback for unsupported methods on the resource
pub async fn method_not_allowed(method: Method) -> Response {
    let mut response = (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": format!("Method {} Not Allowed", method) })),
    )
        .into_response();
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("GET, POST, PUT"));
    response
}
