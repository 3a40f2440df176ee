use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts},
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::UserAgent;
use std::{net::SocketAddr, time::Instant};
use tracing::info;

/// Logs method, path, client IP, user-agent, status and latency for each request.
/// CORS preflight `OPTIONS` requests pass through unlogged.
///
/// The client IP is only known when the server was started with
/// `into_make_service_with_connect_info::<SocketAddr>()`; otherwise it logs as `unknown`.
///
/// ### Usage:
/// ```ignore
/// use axum::middleware::from_fn;
/// use api::auth::middleware::log_request;
///
/// let app = routes(app_state).layer(from_fn(log_request));
/// ```
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();

    let ip = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());

    let user_agent = TypedHeader::<UserAgent>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(ua)| ua.to_string());

    let method = parts.method.clone();
    let path = parts.uri.path().to_owned();
    let started = Instant::now();

    let response = next.run(Request::from_parts(parts, body)).await;

    info!(
        method = %method,
        path = %path,
        ip = ip.as_deref().unwrap_or("unknown"),
        user_agent = user_agent.as_deref().unwrap_or("unknown"),
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );

    response
}
