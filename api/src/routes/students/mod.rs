//! # Students Routes Module
//!
//! Wires up the `/students` endpoint group.
//!
//! ## Structure
//! - `common.rs`: request types and their validation rules
//! - `post.rs`: create
//! - `get.rs`: list and fetch by id
//! - `put.rs`: partial update
//! - `delete.rs`: delete

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_student;
use get::{get_student, list_students};
use post::create_student;
use put::update_student;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/students` route group.
///
/// - `POST /students` → `create_student`
/// - `GET /students` → `list_students`
/// - `GET /students/{id}` → `get_student`
/// - `PUT /students/{id}` → `update_student`
/// - `DELETE /students/{id}` → `delete_student`
pub fn students_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_student))
        .route("/", get(list_students))
        .route("/{id}", get(get_student))
        .route("/{id}", put(update_student))
        .route("/{id}", delete(delete_student))
}
