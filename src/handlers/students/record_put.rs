use axum::extract::{Query, State};
use axum::response::{IntoResponse, Json};
use serde_json::json;

use crate::api::format::view_to_record;
use crate::api::validate::missing_required_fields;
use crate::api::view::StudentView;
use crate::database::students;
use crate::error::ApiError;
use crate::state::AppState;

use super::StudentParams;

/// PUT /api/students/basic-ed?studentId=<id> - full replace of one record.
///
/// Every mapped column is rewritten and `updated_at` refreshed. No match
/// for the id means 404 with nothing written: the dropped transaction
/// rolls back.
pub async fn put(
    State(state): State<AppState>,
    Query(params): Query<StudentParams>,
    Json(view): Json<StudentView>,
) -> Result<impl IntoResponse, ApiError> {
    let mut tx = state.pool.begin().await.map_err(ApiError::storage_error)?;

    let Some(student_id) = params.student_id() else {
        return Err(ApiError::bad_request("Student ID is required"));
    };

    let missing = missing_required_fields("studentId", Some(student_id), &view);
    if !missing.is_empty() {
        return Err(ApiError::missing_fields(missing));
    }

    let record = view_to_record(student_id.to_string(), &view);

    let updated = students::update(&mut tx, &record)
        .await
        .map_err(ApiError::storage_error)?;
    let Some(id) = updated else {
        return Err(ApiError::not_found("Student not found"));
    };

    tx.commit().await.map_err(ApiError::storage_error)?;

    Ok(Json(json!({ "id": id, "message": "Student updated successfully" })))
}
