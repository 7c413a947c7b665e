use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use ulascan_engine::{AnalysisError, HistoryError, HistoryQuery};

use crate::auth::AuthUser;
use crate::AppState;

// --- Query structs ---

#[derive(Deserialize)]
pub struct AnalysisQuery {
    product_url: Option<String>,
}

#[derive(Deserialize)]
pub struct HistoryListQuery {
    page: Option<u32>,
    limit: Option<u32>,
    product_name: Option<String>,
}

// --- Handlers ---

pub async fn guest_analysis(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalysisQuery>,
) -> Response {
    let url = params.product_url.unwrap_or_default();
    match state.analyzer.analyze(&url).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => analysis_error(err),
    }
}

pub async fn user_analysis(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalysisQuery>,
) -> Response {
    let url = params.product_url.unwrap_or_default();
    match state.analyzer.analyze_for_user(&url, auth.user_id).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => analysis_error(err),
    }
}

pub async fn history_list(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryListQuery>,
) -> Response {
    let query = HistoryQuery {
        page: params.page.unwrap_or(1),
        limit: params.limit.unwrap_or(10),
        product_name: params.product_name,
    };

    match state.history.list(auth.user_id, query).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(err) => {
            warn!(error = %err, "History list failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

pub async fn history_detail(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.history.get(id, auth.user_id).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(HistoryError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "history record not found" })),
        )
            .into_response(),
        Err(err) => {
            warn!(error = %err, "History lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

// --- Helpers ---

/// Resolver, upstream, and enrichment failures are the caller's problem
/// (bad or unusable link); only a history write failure is ours.
fn analysis_error(err: AnalysisError) -> Response {
    let status = match &err {
        AnalysisError::History(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };
    warn!(error = %err, "Analysis request failed");
    (
        status,
        Json(serde_json::json!({ "error": err.to_string() })),
    )
        .into_response()
}
