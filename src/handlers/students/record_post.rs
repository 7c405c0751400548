use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde_json::json;

use crate::api::format::view_to_record;
use crate::api::validate::missing_required_fields;
use crate::api::view::StudentView;
use crate::database::students;
use crate::error::ApiError;
use crate::state::AppState;

use super::StudentParams;

/// POST /api/students/basic-ed?userId=<id> - create one enrollment record.
///
/// The whole write runs in one transaction; returning early on validation
/// or query failure drops the transaction, which rolls it back and gives
/// the connection straight back to the pool.
pub async fn post(
    State(state): State<AppState>,
    Query(params): Query<StudentParams>,
    Json(view): Json<StudentView>,
) -> Result<impl IntoResponse, ApiError> {
    let mut tx = state.pool.begin().await.map_err(ApiError::storage_error)?;

    let user_id = params.user_id();
    let missing = missing_required_fields("userId", user_id, &view);
    if !missing.is_empty() {
        return Err(ApiError::missing_fields(missing));
    }

    // validation guarantees the key parameter past this point
    let record = view_to_record(user_id.unwrap_or_default().to_string(), &view);

    let id = students::insert(&mut tx, &record)
        .await
        .map_err(ApiError::storage_error)?;
    tx.commit().await.map_err(ApiError::storage_error)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Student created successfully" })),
    ))
}
