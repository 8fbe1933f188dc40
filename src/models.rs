use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document retrieved from iFixit: a device suggestion or a repair guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideDocument {
    pub title: String,
    /// Canonical source URL, used as the deduplication key.
    pub source: String,
    pub content: String,
    /// Assigned by the ranker, not present on the raw document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<u32>,
}

/// Coarse difficulty bucket derived from guide or summary text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
    Unknown,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Difficult => "Difficult",
            Difficulty::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// Coarse success-likelihood bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SuccessRate {
    High,
    Moderate,
    Low,
    Unknown,
}

impl std::fmt::Display for SuccessRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SuccessRate::High => "High",
            SuccessRate::Moderate => "Moderate",
            SuccessRate::Low => "Low",
            SuccessRate::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// One extracted repair step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    pub title: String,
    pub content: String,
}

/// Device search request
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

pub fn default_max_results() -> usize {
    10
}

/// Upper bound on `max_results` accepted by the API.
pub const MAX_RESULTS_LIMIT: usize = 50;

/// Upper bound on query length accepted by the API.
pub const MAX_QUERY_LEN: usize = 100;

/// A device entry in a search response.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceInfo {
    pub title: String,
    pub source: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<u32>,
}

/// Device search response
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_results: usize,
    pub devices: Vec<DeviceInfo>,
    pub timestamp: DateTime<Utc>,
}

/// A repair guide with extracted structure.
#[derive(Debug, Clone, Serialize)]
pub struct RepairGuide {
    pub title: String,
    pub source: String,
    pub content: String,
    pub tools: Vec<String>,
    pub parts: Vec<String>,
    pub steps: Vec<Step>,
}

/// Guides response for a device URL.
#[derive(Debug, Clone, Serialize)]
pub struct GuideResponse {
    pub device_url: String,
    pub guides: Vec<RepairGuide>,
    pub teardowns: Vec<RepairGuide>,
    pub answers: Vec<RepairGuide>,
    pub timestamp: DateTime<Utc>,
}

/// Summary request
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub device_url: String,
    #[serde(default = "default_summary_type")]
    pub summary_type: String,
}

pub fn default_summary_type() -> String {
    "beginner".to_string()
}

pub const VALID_SUMMARY_TYPES: &[&str] = &["beginner", "intermediate", "expert"];

/// Summary response
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeResponse {
    pub device_url: String,
    pub original_title: String,
    pub summary: String,
    pub difficulty: Difficulty,
    pub time_estimate: String,
    pub success_rate: SuccessRate,
    pub available: bool,
    pub timestamp: DateTime<Utc>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}
