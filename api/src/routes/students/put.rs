use crate::error::ApiError;
use crate::response::UpdatedResponse;
use crate::routes::students::common::UpdateStudentRequest;
use crate::validation::parse_json_body;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use db::models::student::Model as StudentModel;
use util::state::AppState;

/// PUT /students/{id}
///
/// Partially updates a student. Any subset of the five fields may be sent; each one
/// present is validated with the create rules, absent ones are left as they are.
/// The body is validated before the id is looked up.
///
/// ### Request Body
/// ```json
/// { "lastName": "Park" }
/// ```
///
/// ### Responses
/// - `200 OK`: `{ "updated": true }`, also for an empty body when the student exists
/// - `400 Bad Request`: field errors
/// - `404 Not Found`: `{ "message": "Not found" }`
pub async fn update_student(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let body = parse_json_body(&body)?;
    let changes = UpdateStudentRequest::parse(&body)?;

    if !StudentModel::update_by_id(app_state.db(), &id, changes).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(UpdatedResponse { updated: true }))
}
