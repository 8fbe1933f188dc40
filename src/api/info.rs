use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::models::HealthResponse;

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// GET /health - liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: API_VERSION.to_string(),
        timestamp: Utc::now(),
    })
}

/// GET / - service description and route index.
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Repair Guide Search API",
        "version": API_VERSION,
        "description": "A REST API for searching and retrieving repair guides from iFixit",
        "health": "/health",
        "endpoints": {
            "search": "/search",
            "guides": "/guides/{device_url}",
            "summarize": "/summarize",
            "popular": "/popular",
        },
    }))
}

/// GET /popular - canned device suggestions for UI autocomplete.
pub async fn popular() -> Json<serde_json::Value> {
    Json(json!({
        "categories": {
            "smartphones": [
                "iPhone 14", "iPhone 13", "iPhone 12",
                "Samsung Galaxy S23", "Samsung Galaxy S22",
                "Google Pixel 8", "Google Pixel 7",
            ],
            "laptops": [
                "MacBook Pro", "MacBook Air", "MacBook",
                "Dell XPS", "Lenovo ThinkPad", "HP Spectre",
            ],
            "gaming": [
                "PlayStation 5", "Xbox Series X", "Nintendo Switch",
                "PlayStation 4", "Xbox One",
            ],
            "tablets": [
                "iPad", "iPad Pro", "iPad Air",
                "Samsung Galaxy Tab", "Microsoft Surface",
            ],
        },
        "timestamp": Utc::now(),
    }))
}
