//! Best-effort structural extraction from unstructured guide text.
//!
//! Guide formatting is controlled by iFixit authors, not by this service, so
//! everything here is heuristic: the contract is "a superset of
//! obviously-labeled items the patterns can find", never a structural
//! guarantee. False negatives are acceptable.

pub mod guide;

pub use guide::{extract_steps, extract_tools_and_parts};

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static UNSAFE_CHARS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[<>"']"#).unwrap());

/// Normalize raw guide text for API responses: collapse whitespace, strip
/// HTML tags, and decode the common entities.
pub fn clean_content(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    let collapsed = WHITESPACE_RE.replace_all(content, " ");
    let stripped = TAG_RE.replace_all(&collapsed, "");
    stripped
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .trim()
        .to_string()
}

/// Strip markup-significant characters and cap length for display fields.
pub fn sanitize_text(text: &str, max_length: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let sanitized = UNSAFE_CHARS_RE.replace_all(text, "");
    let sanitized = sanitized.trim();
    if sanitized.chars().count() > max_length {
        let truncated: String = sanitized.chars().take(max_length).collect();
        format!("{}...", truncated.trim_end())
    } else {
        sanitized.to_string()
    }
}
