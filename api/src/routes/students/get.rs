use crate::error::ApiError;
use axum::{
    Json,
    extract::{Path, State},
};
use db::models::student::Model as StudentModel;
use util::state::AppState;

/// GET /students
///
/// Returns every stored student. No pagination; order is whatever the database returns.
///
/// ### Response: 200 OK
/// ```json
/// [
///   {
///     "id": "6f1c2a1e-0c8b-4c1e-9a57-3b0a4f1f7d20",
///     "firstName": "Ana",
///     "lastName": "Lee",
///     "studentCode": "S1",
///     "birthDate": "2010-05-01",
///     "gender": "F"
///   }
/// ]
/// ```
pub async fn list_students(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<StudentModel>>, ApiError> {
    let students = StudentModel::find_all(app_state.db()).await?;
    Ok(Json(students))
}

/// GET /students/{id}
///
/// ### Responses
/// - `200 OK`: the student object
/// - `404 Not Found`: `{ "message": "Not found" }`
pub async fn get_student(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudentModel>, ApiError> {
    StudentModel::find_by_id(app_state.db(), &id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}
