//! Tool, part, and step extraction from repair guide text.
//!
//! The pattern lists are fixed and ordered; for overlapping labels the first
//! pattern in the list wins. Each match captures the remainder of the line up
//! to a sentence boundary.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Step;

/// Minimum fragment length in characters for a tool or part name. Single
/// characters are comma-splitting noise.
const MIN_ITEM_LEN: usize = 2;

/// Minimum meaningful step description length in characters.
const MIN_STEP_LEN: usize = 4;

static TOOL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_patterns(&[
        r"(?i)Tools?[:\s]*([^.\n]+)",
        r"(?i)Required[:\s]*([^.\n]+)",
        r"(?i)Equipment[:\s]*([^.\n]+)",
        r"(?i)Supplies[:\s]*([^.\n]+)",
        r"(?i)Tools? needed[:\s]*([^.\n]+)",
        r"(?i)Required tools?[:\s]*([^.\n]+)",
    ])
});

static PART_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_patterns(&[
        r"(?i)Parts?[:\s]*([^.\n]+)",
        r"(?i)Replacement[:\s]*([^.\n]+)",
        r"(?i)Components?[:\s]*([^.\n]+)",
        r"(?i)Parts? needed[:\s]*([^.\n]+)",
        r"(?i)Required parts?[:\s]*([^.\n]+)",
    ])
});

static STEP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_patterns(&[
        r"(\d+)[.)]\s*([^.\n]+)",
        r"(?i)Step\s*(\d+)[:\s]*([^.\n]+)",
    ])
});

fn compile_patterns(patterns: &[&str]) -> Vec<Regex> {
    // Patterns are fixed and known-valid at initialization.
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

/// Extract tool and part names from guide text.
///
/// Matched label lines are comma-split, trimmed, and deduplicated
/// (case-sensitive, first occurrence wins). Empty input yields empty lists.
pub fn extract_tools_and_parts(content: &str) -> (Vec<String>, Vec<String>) {
    if content.is_empty() {
        return (Vec::new(), Vec::new());
    }
    (
        collect_labeled_items(content, &TOOL_PATTERNS),
        collect_labeled_items(content, &PART_PATTERNS),
    )
}

fn collect_labeled_items(content: &str, patterns: &[Regex]) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for pattern in patterns {
        for caps in pattern.captures_iter(content) {
            let Some(line) = caps.get(1) else { continue };
            for fragment in line.as_str().split(',') {
                let item = fragment.trim();
                if item.chars().count() >= MIN_ITEM_LEN && !items.iter().any(|i| i == item) {
                    items.push(item.to_string());
                }
            }
        }
    }
    items
}

/// Extract ordered repair steps from guide text.
///
/// Matches both `1.` / `1)` and `Step 1:` label shapes. Steps are keyed by
/// their number label: the first occurrence of a label wins and order of
/// first appearance is preserved.
pub fn extract_steps(content: &str) -> Vec<Step> {
    let mut steps: Vec<Step> = Vec::new();
    if content.is_empty() {
        return steps;
    }

    for pattern in STEP_PATTERNS.iter() {
        for caps in pattern.captures_iter(content) {
            let (Some(num), Some(desc)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let desc = desc.as_str().trim();
            if desc.chars().count() < MIN_STEP_LEN {
                continue;
            }
            let title = format!("Step {}", num.as_str());
            if !steps.iter().any(|s| s.title == title) {
                steps.push(Step {
                    title,
                    content: desc.to_string(),
                });
            }
        }
    }

    steps
}
