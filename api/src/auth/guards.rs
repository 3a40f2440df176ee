use crate::error::ApiError;
use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use sha2::{Digest, Sha256};
use tracing::warn;
use util::state::AppState;

/// Rejects any request whose `Authorization: Bearer <token>` does not carry the
/// configured secret.
///
/// Layered over the whole router, so unmatched paths are gated too. The rejection
/// never says which part of the credential was wrong.
///
/// ### Usage:
/// ```ignore
/// let app = Router::new()
///     .nest("/students", students_routes())
///     .layer(from_fn_with_state(app_state.clone(), require_bearer))
///     .with_state(app_state);
/// ```
pub async fn require_bearer(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = req.into_parts();

    let bearer = TypedHeader::<Authorization<Bearer>>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(Authorization(bearer))| bearer);

    let Some(bearer) = bearer else {
        warn!(path = %parts.uri.path(), "Missing or malformed Authorization header");
        return Err(ApiError::Unauthorized);
    };

    if !tokens_match(bearer.token(), app_state.api_token()) {
        warn!(path = %parts.uri.path(), "Rejected bearer token");
        return Err(ApiError::Unauthorized);
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Compares the SHA-256 digests of both tokens.
///
/// An empty configured secret matches nothing.
pub fn tokens_match(presented: &str, expected: &str) -> bool {
    if expected.is_empty() {
        return false;
    }
    Sha256::digest(presented.as_bytes()) == Sha256::digest(expected.as_bytes())
}
