//! Heuristic difficulty, time, and success-likelihood estimation.
//!
//! Two vocabularies exist on purpose: one for analyzing raw guide content
//! (the fallback path) and one for mining an LLM-generated summary. The
//! lists diverge in the original system and are kept separate here rather
//! than unified.
//!
//! All functions are pure; no I/O, no shared mutable state.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Difficulty, SuccessRate};

// ─── Raw guide content path ──────────────────────────────

const CONTENT_EASY: &[&str] = &["easy", "simple", "straightforward", "basic", "beginner"];
const CONTENT_DIFFICULT: &[&str] = &[
    "difficult",
    "challenging",
    "complex",
    "advanced",
    "expert",
    "professional",
];

/// Classify difficulty from raw guide content. Easy keywords take precedence
/// over difficult keywords; neither matching means Moderate.
pub fn difficulty_from_content(content: &str) -> Difficulty {
    let lower = content.to_lowercase();
    if CONTENT_EASY.iter().any(|w| lower.contains(w)) {
        Difficulty::Easy
    } else if CONTENT_DIFFICULT.iter().any(|w| lower.contains(w)) {
        Difficulty::Difficult
    } else {
        Difficulty::Moderate
    }
}

/// Derive success likelihood from a difficulty bucket.
pub fn success_from_difficulty(difficulty: Difficulty) -> SuccessRate {
    match difficulty {
        Difficulty::Easy => SuccessRate::High,
        Difficulty::Difficult => SuccessRate::Low,
        _ => SuccessRate::Moderate,
    }
}

/// Length heuristic for repair time when no explicit time phrase exists.
pub fn time_from_length(content: &str) -> String {
    let len = content.len();
    if len < 1000 {
        "30-60 minutes".to_string()
    } else if len < 3000 {
        "1-2 hours".to_string()
    } else {
        "2-4 hours".to_string()
    }
}

// ─── Generated summary path ──────────────────────────────

const SUMMARY_EASY: &[&str] = &["easy", "simple", "straightforward", "beginner"];
const SUMMARY_MODERATE: &[&str] = &["moderate", "medium", "intermediate"];
const SUMMARY_DIFFICULT: &[&str] = &["difficult", "challenging", "complex", "advanced"];

/// Classify difficulty from an LLM-generated summary.
pub fn difficulty_from_summary(summary: &str) -> Difficulty {
    let lower = summary.to_lowercase();
    if SUMMARY_EASY.iter().any(|w| lower.contains(w)) {
        Difficulty::Easy
    } else if SUMMARY_MODERATE.iter().any(|w| lower.contains(w)) {
        Difficulty::Moderate
    } else if SUMMARY_DIFFICULT.iter().any(|w| lower.contains(w)) {
        Difficulty::Difficult
    } else {
        Difficulty::Moderate
    }
}

const SUMMARY_SUCCESS_HIGH: &[&str] = &[
    "high success",
    "likely to succeed",
    "good chance",
    "excellent",
];
const SUMMARY_SUCCESS_MODERATE: &[&str] =
    &["moderate success", "decent chance", "reasonable", "fair"];
const SUMMARY_SUCCESS_LOW: &[&str] = &["low success", "challenging", "difficult", "risky"];

/// Classify success likelihood from an LLM-generated summary.
///
/// Phrases are matched on word boundaries: plain substring matching would
/// find "fair" inside "repair" and misclassify nearly every summary.
pub fn success_from_summary(summary: &str) -> SuccessRate {
    let lower = summary.to_lowercase();
    if SUMMARY_SUCCESS_HIGH.iter().any(|p| contains_phrase(&lower, p)) {
        SuccessRate::High
    } else if SUMMARY_SUCCESS_MODERATE
        .iter()
        .any(|p| contains_phrase(&lower, p))
    {
        SuccessRate::Moderate
    } else if SUMMARY_SUCCESS_LOW.iter().any(|p| contains_phrase(&lower, p)) {
        SuccessRate::Low
    } else {
        SuccessRate::Moderate
    }
}

fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    haystack.match_indices(phrase).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(|c| c.is_alphanumeric()) && !after.is_some_and(|c| c.is_alphanumeric())
    })
}

// ─── Time phrase extraction ──────────────────────────────

static TIME_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)(\d+)\s*-\s*(\d+)\s*(?:hours?|hrs?)", "hours"),
        (r"(?i)(\d+)\s*(?:hours?|hrs?)", "hours"),
        (r"(?i)(\d+)\s*-\s*(\d+)\s*(?:minutes?|mins?)", "minutes"),
        (r"(?i)(\d+)\s*(?:minutes?|mins?)", "minutes"),
        (r"(?i)(\d+)\s*-\s*(\d+)\s*days?", "days"),
        (r"(?i)(\d+)\s*days?", "days"),
    ]
    .into_iter()
    .map(|(p, unit)| (Regex::new(p).unwrap(), unit))
    .collect()
});

/// Extract a time estimate from `text`, falling back to the length heuristic
/// over `guide_content` when no time phrase matches.
pub fn estimate_time(text: &str, guide_content: &str) -> String {
    for (pattern, unit) in TIME_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            return match caps.get(2) {
                Some(hi) => format!("{}-{} {}", &caps[1], hi.as_str(), unit),
                None => format!("{} {}", &caps[1], unit),
            };
        }
    }
    time_from_length(guide_content)
}
