//! # Student Creation Route
//!
//! - `POST /students`: Validate a full student body and insert it

use crate::error::ApiError;
use crate::response::CreatedResponse;
use crate::routes::students::common::CreateStudentRequest;
use crate::validation::parse_json_body;
use axum::{Json, body::Bytes, extract::State};
use db::models::student::Model as StudentModel;
use util::state::AppState;

/// POST /students
///
/// Creates a student. All five fields are required; the id is generated server-side.
///
/// ### Request Body
/// ```json
/// {
///   "firstName": "Ana",
///   "lastName": "Lee",
///   "studentCode": "S1",
///   "birthDate": "2010-05-01",
///   "gender": "F"
/// }
/// ```
///
/// ### Response: 200 OK
/// ```json
/// { "id": "6f1c2a1e-0c8b-4c1e-9a57-3b0a4f1f7d20" }
/// ```
///
/// ### Errors:
/// - 400 Bad Request: `{ "errors": { "formErrors": [], "fieldErrors": { ... } } }`
pub async fn create_student(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreatedResponse>, ApiError> {
    let body = parse_json_body(&body)?;
    let student = CreateStudentRequest::parse(&body)?;

    let id = StudentModel::create(app_state.db(), student).await?;

    Ok(Json(CreatedResponse { id }))
}
