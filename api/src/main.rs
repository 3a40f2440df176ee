use api::{auth::middleware::log_request, routes::routes};
use axum::middleware::from_fn;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};
use tracing_appender::rolling;
use util::{config, state::AppState};

#[tokio::main]
async fn main() {
    // Load configuration and initialize logging
    let _log_guard = init_logging(&config::log_file(), &config::log_level());

    let api_token = config::api_token();
    if api_token.is_empty() {
        error!("API_TOKEN is not set; refusing to start without a bearer secret");
        std::process::exit(1);
    }

    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, "Failed to connect to database");
            std::process::exit(1);
        }
    };

    let app_state = AppState::new(db, api_token);

    let app = routes(app_state)
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive());

    let addr = format!("{}:{}", config::host(), config::port());
    let addr: SocketAddr = match addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(%addr, error = %e, "Invalid listen address");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!(
        project = %config::project_name(),
        env = %config::env(),
        %addr,
        "Listening"
    );

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    {
        error!(error = %e, "Server crashed");
        std::process::exit(1);
    }
}

fn init_logging(log_file: &str, log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = config::log_to_stdout().then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
            .with_thread_ids(true)
    });

    let env_filter =
        EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("api=info,db=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
}
