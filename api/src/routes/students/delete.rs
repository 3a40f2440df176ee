use crate::error::ApiError;
use crate::response::DeletedResponse;
use axum::{
    Json,
    extract::{Path, State},
};
use db::models::student::Model as StudentModel;
use util::state::AppState;

/// DELETE /students/{id}
///
/// Permanently removes a student. Deleting twice reports 404 the second time.
///
/// ### Responses
/// - `200 OK`: `{ "deleted": true }`
/// - `404 Not Found`: `{ "message": "Not found" }`
pub async fn delete_student(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    if !StudentModel::delete_by_id(app_state.db(), &id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(DeletedResponse { deleted: true }))
}
