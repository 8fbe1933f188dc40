use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::extract::clean_content;
use crate::ifixit;
use crate::llm::summarize;
use crate::models::{SummarizeRequest, SummarizeResponse, VALID_SUMMARY_TYPES};
use crate::state::AppState;

/// POST /summarize - Fetch the first repair guide for a device URL and
/// produce a beginner-friendly summary, falling back to the deterministic
/// template when the LLM is unconfigured or fails.
pub async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, (StatusCode, String)> {
    if !VALID_SUMMARY_TYPES.contains(&req.summary_type.as_str()) {
        return Err((
            StatusCode::BAD_REQUEST,
            format!(
                "Summary type must be one of: {}",
                VALID_SUMMARY_TYPES.join(", ")
            ),
        ));
    }

    if !ifixit::client::validate_device_url(&state.config.ifixit, &req.device_url) {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Not a valid iFixit device URL: {}", req.device_url),
        ));
    }

    tracing::info!(
        "Generating summary for device: {} (type: {})",
        req.device_url,
        req.summary_type
    );

    let guides =
        ifixit::client::load_guides(&state.http_client, &state.config.ifixit, &req.device_url)
            .await
            .map_err(|e| {
                tracing::error!("Error loading guides for summary: {e:#}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to retrieve guides from iFixit".to_string(),
                )
            })?;

    let Some(guide) = guides.first() else {
        return Err((
            StatusCode::NOT_FOUND,
            "No repair guides found for this device".to_string(),
        ));
    };

    let guide_title = if guide.title.is_empty() {
        "Unknown Repair Guide".to_string()
    } else {
        guide.title.clone()
    };
    let guide_content = clean_content(&guide.content);

    // Device name is the title's first word, repair type the rest.
    let (device_name, repair_type) = split_title(&guide_title);

    let result = summarize::summarize_repair_guide(
        &state.http_client,
        &state.config.llm,
        &device_name,
        &repair_type,
        &guide_content,
    )
    .await
    .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Json(SummarizeResponse {
        device_url: req.device_url,
        original_title: guide_title,
        summary: result.summary,
        difficulty: result.difficulty,
        time_estimate: result.time_estimate,
        success_rate: result.success_rate,
        available: result.available,
        timestamp: Utc::now(),
    }))
}

fn split_title(title: &str) -> (String, String) {
    let mut words = title.split_whitespace();
    let device_name = words.next().unwrap_or("Device").to_string();
    let rest: Vec<&str> = words.collect();
    let repair_type = if rest.is_empty() {
        "repair".to_string()
    } else {
        rest.join(" ")
    };
    (device_name, repair_type)
}
