//! Wire shapes for every JSON body the service sends.
//!
//! | Outcome | Body |
//! |---|---|
//! | create | `{ "id": "<uuid>" }` |
//! | update | `{ "updated": true }` |
//! | delete | `{ "deleted": true }` |
//! | not found / auth failure | `{ "message": "..." }` |
//! | validation failure | `{ "errors": { "formErrors": [...], "fieldErrors": {...} } }` |
//!
//! List and get responses serialise the student model directly.

use crate::validation::FieldErrors;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct UpdatedResponse {
    pub updated: bool,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorsResponse {
    pub errors: FieldErrors,
}
