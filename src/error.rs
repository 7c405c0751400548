// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    MissingRequiredFields { missing_fields: Vec<&'static str> },

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error (storage/transaction failure)
    Internal { detail: Option<String> },
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::MissingRequiredFields { .. } => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Internal { .. } => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::MissingRequiredFields { .. } => "Missing required fields",
            ApiError::NotFound(msg) => msg,
            ApiError::Internal { .. } => "Internal server error",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::MissingRequiredFields { missing_fields } => {
                json!({
                    "error": self.message(),
                    "missingFields": missing_fields,
                })
            }
            ApiError::Internal { detail } => {
                let mut response = json!({ "error": self.message() });
                // Query details are only exposed in development mode
                if crate::is_development!() {
                    if let Some(detail) = detail {
                        response["details"] = json!(detail);
                    }
                }
                response
            }
            _ => json!({ "error": self.message() }),
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn missing_fields(missing_fields: Vec<&'static str>) -> Self {
        ApiError::MissingRequiredFields { missing_fields }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// Storage failure on the write path: logged server-side, detail exposed
    /// to the client only in development mode.
    pub fn storage_error(err: sqlx::Error) -> Self {
        tracing::error!("Database query error: {}", err);
        ApiError::Internal {
            detail: Some(err.to_string()),
        }
    }
}

// Read-path storage failures carry no detail, matching the fetch responses
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database query error: {}", err);
        ApiError::Internal { detail: None }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}
