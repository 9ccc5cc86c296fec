pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::controller::InteractionController;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Mutex<InteractionController>>,
}

impl AppState {
    pub fn new(controller: InteractionController) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
        }
    }
}

/// Build the router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/answers/format", post(routes::answers::format))
        .route(
            "/api/quiz",
            post(routes::quiz::generate).get(routes::quiz::current),
        )
        .route("/api/quiz/answers", put(routes::quiz::select))
        .route("/api/quiz/submit", post(routes::quiz::submit))
        .route("/api/flashcards", post(routes::flashcards::generate))
        .route("/api/outline/diagram", post(routes::outline::diagram))
        .route("/api/progress", get(routes::progress::get))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr()?;

    let state = AppState::new(InteractionController::new(config.outline));

    let app = app(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
