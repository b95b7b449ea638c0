//! # Proxy Routes
//!
//! The server's single endpoint: GET `/portuguese` under the `/api/bible`
//! prefix. The handler forwards to the upstream provider and relays the JSON
//! body; any failure becomes a 500 with a generic message plus the failure's
//! message string.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Config;

/// Passage requested when the client does not name one
pub const DEFAULT_PASSAGE: &str = "João 3:16";

/// Translation version used when the client does not name one
pub const DEFAULT_VERSION: &str = "ARC";

/// Shared state for the proxy handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Outbound HTTP client, shared across requests
    pub client: reqwest::Client,
    pub config: Config,
}

/// Optional overrides for the proxied passage lookup
#[derive(Debug, Deserialize)]
pub struct PassageQuery {
    passage: Option<String>,
    version: Option<String>,
}

/// Build the application router with the bible routes mounted under
/// `/api/bible`
pub fn router(state: Arc<AppState>) -> Router {
    let bible_routes = Router::new()
        .route("/portuguese", get(portuguese))
        .with_state(state);

    Router::new().nest("/api/bible", bible_routes)
}

/// GET /api/bible/portuguese — relay a Portuguese passage from the upstream
/// provider
async fn portuguese(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PassageQuery>,
) -> (StatusCode, Json<Value>) {
    let passage = query.passage.as_deref().unwrap_or(DEFAULT_PASSAGE);
    let version = query.version.as_deref().unwrap_or(DEFAULT_VERSION);

    match fetch_upstream(&state, passage, version).await {
        Ok(body) => (StatusCode::OK, Json(body)),
        Err(e) => {
            tracing::error!("Error fetching Bible text: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": "Error fetching Bible text",
                    "error": e.to_string(),
                })),
            )
        }
    }
}

/// GET the passage from the provider and decode the body as JSON
async fn fetch_upstream(state: &AppState, passage: &str, version: &str) -> Result<Value> {
    let url = format!("{}/content/BIBLIA", state.config.base_url);
    let mut request = state
        .client
        .get(&url)
        .query(&[("passage", passage), ("version", version)]);

    // The key is only attached when configured; the provider rejects empty keys.
    if !state.config.api_key.is_empty() {
        request = request.query(&[("key", state.config.api_key.as_str())]);
    }

    let response = request.send().await?;
    let response = response.error_for_status()?;
    Ok(response.json::<Value>().await?)
}
