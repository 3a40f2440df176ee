//! HTTP route entry point.
//!
//! Route groups:
//! - `/students` → Student CRUD
//!
//! Every route, and every unmatched path, sits behind the bearer-token gate.

use crate::auth::guards::require_bearer;
use crate::routes::students::students_routes;
use axum::{Router, middleware::from_fn_with_state};
use util::state::AppState;

pub mod students;

/// Builds the complete application router with its state applied.
///
/// Request logging and CORS are left to the caller so tests can mount the bare router.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/students", students_routes())
        .layer(from_fn_with_state(app_state.clone(), require_bearer))
        .with_state(app_state)
}
