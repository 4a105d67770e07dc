use crate::{
    api::{
        error::ApiError,
        response::{ApiResponse, with_total_count},
    },
    cache::ANONYMOUS_SESSION,
    models::{AccountFilters, CreatorsResponse},
    search::fetch_account_metrics,
    state::AppState,
    validation::{validate_address_list, validate_search_term},
};
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

/// Header carrying the caller's search session id.
pub const SESSION_HEADER: &str = "x-session-id";

// GET /creators query parameters
#[derive(Deserialize)]
pub struct CreatorsQuery {
    search: Option<String>,
}

// GET /accounts/metrics query parameters
#[derive(Deserialize)]
pub struct MetricsQuery {
    address: Option<String>,
}

// Create router with all routes
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/creators", get(search_creators))
        .route("/creators/session", delete(reset_session))
        .route("/accounts/metrics", get(account_metrics))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

fn session_id(headers: &HeaderMap) -> String {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(ANONYMOUS_SESSION)
        .to_string()
}

async fn health() -> &'static str {
    "ok"
}

// GET /creators handler
async fn search_creators(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<CreatorsQuery>,
) -> Result<Response, ApiError> {
    let term = validate_search_term(params.search.as_deref())?;
    let session_id = session_id(&headers);

    info!("Processing creator search for session: {}, search: '{}'", session_id, term);

    let session = state.sessions.session(&session_id).await;
    let outcome = session.search(&state.search, &term).await.map_err(|e| {
        warn!("Creator search '{}' failed: {}", term, e);
        ApiError::search(&term, e)
    })?;

    let count = outcome.creators.len();
    let body = CreatorsResponse {
        search: outcome.search,
        creators: outcome.creators,
    };

    Ok(with_total_count(body, count))
}

// DELETE /creators/session handler
async fn reset_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    let session_id = session_id(&headers);
    state.sessions.invalidate(&session_id).await;
    info!("Reset search session: {}", session_id);
    StatusCode::NO_CONTENT.into_response()
}

// GET /accounts/metrics handler
async fn account_metrics(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MetricsQuery>,
) -> Result<Response, ApiError> {
    let addresses = validate_address_list(params.address.as_deref().unwrap_or_default())?;

    info!("Fetching account metrics for {} addresses", addresses.len());

    let filters = AccountFilters {
        address: Some(addresses),
        ..Default::default()
    };
    let metrics = fetch_account_metrics(state.search.accounts(), &filters).await?;

    Ok(ApiResponse { data: metrics }.into_response())
}
