use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;
mod models;
mod routes;
mod services;
mod utils;

use config::AppConfig;
use routes::{health::health_check, search::search_jobs, total::job_totals};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("jobs_api=info,tower_http=info")
        .init();

    let config = Arc::new(AppConfig::load());

    // /search and /total do their own method check so non-GET requests get
    // a JSON 405 body instead of axum's empty default.
    let app = Router::new()
        .route("/status", get(health_check))
        .route("/search", any(search_jobs))
        .route("/total", any(job_totals))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(config);

    let port = std::env::var("PORT").unwrap_or_else(|_| "7000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("Jobs API starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
