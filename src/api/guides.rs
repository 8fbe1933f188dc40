use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::extract::{clean_content, extract_steps, extract_tools_and_parts, sanitize_text};
use crate::ifixit;
use crate::models::{GuideDocument, GuideResponse, RepairGuide};
use crate::state::AppState;

/// Display cap for guide titles in responses.
const MAX_TITLE_LEN: usize = 200;

/// GET /guides/{*device_url} - Repair guides for a device, with tools,
/// parts, and steps extracted from each guide's text.
///
/// Teardown and community-answer retrieval is not implemented; the response
/// keeps their (empty) fields so clients have a stable shape.
pub async fn get_guides(
    State(state): State<AppState>,
    Path(device_url): Path<String>,
) -> Result<Json<GuideResponse>, (StatusCode, String)> {
    let device_url = normalize_device_url(&device_url);

    if !ifixit::client::validate_device_url(&state.config.ifixit, &device_url) {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Not a valid iFixit device URL: {device_url}"),
        ));
    }

    tracing::info!("Loading repair guides for device: {device_url}");

    let documents =
        ifixit::client::load_guides(&state.http_client, &state.config.ifixit, &device_url)
            .await
            .map_err(|e| {
                tracing::error!("Error loading repair guides: {e:#}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to retrieve guides from iFixit".to_string(),
                )
            })?;

    let guides: Vec<RepairGuide> = documents.into_iter().map(to_repair_guide).collect();

    tracing::info!("Retrieved {} guides for {device_url}", guides.len());

    Ok(Json(GuideResponse {
        device_url,
        guides,
        teardowns: Vec::new(),
        answers: Vec::new(),
        timestamp: Utc::now(),
    }))
}

/// Axum wildcard captures strip the leading slashes from `https://`, so the
/// scheme arrives mangled; repair it before validation.
pub fn normalize_device_url(raw: &str) -> String {
    let raw = raw.trim_start_matches('/');
    if let Some(rest) = raw.strip_prefix("https:/").filter(|r| !r.starts_with('/')) {
        return format!("https://{rest}");
    }
    if let Some(rest) = raw.strip_prefix("http:/").filter(|r| !r.starts_with('/')) {
        return format!("http://{rest}");
    }
    raw.to_string()
}

pub fn to_repair_guide(doc: GuideDocument) -> RepairGuide {
    let (tools, parts) = extract_tools_and_parts(&doc.content);
    let steps = extract_steps(&doc.content);

    RepairGuide {
        title: if doc.title.is_empty() {
            "Untitled Guide".to_string()
        } else {
            sanitize_text(&doc.title, MAX_TITLE_LEN)
        },
        source: doc.source,
        content: clean_content(&doc.content),
        tools,
        parts,
        steps,
    }
}
