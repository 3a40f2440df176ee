use api::{auth::middleware::log_request, routes::routes};
use axum::{
    Router,
    body::Body,
    http::{Request, header::AUTHORIZATION, header::CONTENT_TYPE},
    middleware::from_fn,
    response::Response,
};
use db::test_utils::setup_test_db;
use serde_json::{Value, json};
use util::state::AppState;

pub const TEST_TOKEN: &str = "test-api-token";

/// Router backed by a fresh in-memory database, plus the state so tests can seed it.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let app_state = AppState::new(db, TEST_TOKEN);
    let app = routes(app_state.clone()).layer(from_fn(log_request));
    (app, app_state)
}

/// Builds a request, optionally authenticated and optionally carrying a JSON body.
pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub fn valid_student() -> Value {
    json!({
        "firstName": "Ana",
        "lastName": "Lee",
        "studentCode": "S1",
        "birthDate": "2010-05-01",
        "gender": "F"
    })
}
