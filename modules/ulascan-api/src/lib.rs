pub mod auth;
pub mod rest;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use ulascan_engine::{Analyzer, HistoryStore};

pub struct AppState {
    pub analyzer: Analyzer,
    pub history: Arc<dyn HistoryStore>,
    pub jwt_secret: String,
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Analysis
        .route("/api/ml/guest/analysis", get(rest::guest_analysis))
        .route("/api/ml/analysis", get(rest::user_analysis))
        // History
        .route("/api/history", get(rest::history_list))
        .route("/api/history/{id}", get(rest::history_detail))
        .with_state(state)
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
