use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::extract::clean_content;
use crate::ifixit;
use crate::models::{
    default_max_results, DeviceInfo, GuideDocument, SearchRequest, SearchResponse, MAX_QUERY_LEN,
    MAX_RESULTS_LIMIT,
};
use crate::search::{expand, rank};
use crate::state::AppState;

/// POST /search - Device search pipeline:
///   1. Expand the query with model-number aliases
///   2. Fetch suggestions per expanded query, skipping failed sub-queries
///   3. Deduplicate by source URL, score, rank, truncate
pub async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let query = validate_query(&req.query)?;
    let max_results = validate_max_results(req.max_results)?;

    let devices = run_search(&state, &query, max_results).await;

    tracing::info!("Found {} devices for query '{query}'", devices.len());

    Ok(Json(SearchResponse {
        total_results: devices.len(),
        devices,
        query,
        timestamp: Utc::now(),
    }))
}

/// GET /search?q=...&max_results=... - same pipeline for quick manual testing.
pub async fn quick_search(
    State(state): State<AppState>,
    Query(params): Query<QuickSearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let req = SearchRequest {
        query: params.q,
        max_results: params.max_results,
    };
    search(State(state), Json(req)).await
}

#[derive(Debug, Deserialize)]
pub struct QuickSearchParams {
    pub q: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

/// Expand, fetch, and rank. Per-sub-query failures are logged and skipped;
/// an empty result set is a valid outcome, not an error.
pub async fn run_search(state: &AppState, query: &str, max_results: usize) -> Vec<DeviceInfo> {
    let expanded = expand::expand(query);
    tracing::info!("Searching for devices with query '{query}' ({} variants)", expanded.len());

    let mut pooled: Vec<GuideDocument> = Vec::new();
    for sub_query in &expanded {
        match ifixit::client::load_suggestions(&state.http_client, &state.config.ifixit, sub_query)
            .await
        {
            Ok(docs) => pooled.extend(docs),
            Err(e) => {
                tracing::warn!("Search failed for '{sub_query}': {e:#}");
            }
        }
    }

    rank::rank(pooled, query, max_results)
        .into_iter()
        .map(|doc| DeviceInfo {
            title: if doc.title.is_empty() {
                "Unknown Device".to_string()
            } else {
                doc.title
            },
            source: doc.source,
            content: clean_content(&doc.content),
            relevance_score: doc.relevance_score,
        })
        .collect()
}

fn validate_query(raw: &str) -> Result<String, (StatusCode, String)> {
    let query = raw.trim();
    if query.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Query cannot be empty or whitespace only".to_string(),
        ));
    }
    if query.chars().count() > MAX_QUERY_LEN {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Query must be at most {MAX_QUERY_LEN} characters"),
        ));
    }
    Ok(query.to_string())
}

fn validate_max_results(max_results: usize) -> Result<usize, (StatusCode, String)> {
    if max_results == 0 || max_results > MAX_RESULTS_LIMIT {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("max_results must be between 1 and {MAX_RESULTS_LIMIT}"),
        ));
    }
    Ok(max_results)
}
