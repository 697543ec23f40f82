//! Portfolio Server
//!
//! Serves the portfolio pages and the projects list, backed by an embedded
//! SQLite database.

mod error;
mod extractors;
mod handlers;
mod settings;
mod storage;
mod views;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use portfolio_core::ProjectStore;
use std::path::Path;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use settings::Settings;
use storage::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<dyn ProjectStore>,
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting portfolio server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let settings = Settings::load().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, db={}, static={}",
        settings.bind_address(),
        settings.database_path,
        settings.static_dir.display()
    );

    let db = Database::connect(&settings.database_path)
        .await
        .context("Failed to initialize database")?;

    let state = AppState {
        projects: Arc::new(db),
    };

    let app = router(state, &settings.static_dir);

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/about", get(handlers::pages::about))
        .route("/resume", get(handlers::pages::resume))
        .route("/projects", get(handlers::projects::list))
        .route(
            "/add_project",
            get(handlers::projects::add_form).post(handlers::projects::add),
        )
        .route("/delete_project/:id", post(handlers::projects::delete))
        .route(
            "/contact",
            get(handlers::contact::form).post(handlers::contact::submit),
        )
        .route("/thankyou", get(handlers::pages::thank_you))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(handlers::pages::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
