use axum::extract::{Query, State};
use axum::response::{IntoResponse, Json, Response};

use crate::api::format::record_to_view;
use crate::database::students;
use crate::error::ApiError;
use crate::state::AppState;

use super::StudentParams;

/// GET /api/students/basic-ed
///
/// With `studentId`: fetch one record and return the nested view. Without
/// it: return the list projection for `userId`, newest first.
pub async fn get(
    State(state): State<AppState>,
    Query(params): Query<StudentParams>,
) -> Result<Response, ApiError> {
    if let Some(student_id) = params.student_id() {
        let record = students::fetch_by_id(&state.pool, student_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Student not found"))?;

        Ok(Json(record_to_view(&record)).into_response())
    } else {
        let rows = students::list_for_user(&state.pool, params.user_id()).await?;
        Ok(Json(rows).into_response())
    }
}
