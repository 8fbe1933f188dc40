//! Relevance ranking for device search results.
//!
//! Results from all expanded query variants are pooled, deduplicated by
//! source URL, then scored against the original query. Scores are coarse
//! buckets: 100 for a full-query substring match, 50 for any single token
//! match, 75 for the model-number digit heuristic. Results matching none of
//! the three are dropped, unless that would drop everything.

use crate::models::GuideDocument;

pub const SCORE_EXACT: u32 = 100;
pub const SCORE_MODEL_NUMBER: u32 = 75;
pub const SCORE_PARTIAL: u32 = 50;

/// Deduplicate, score, and order results against `query`, keeping at most
/// `max_results`.
pub fn rank(results: Vec<GuideDocument>, query: &str, max_results: usize) -> Vec<GuideDocument> {
    let deduped = dedup_by_source(results);
    let query_lower = query.to_lowercase();

    let mut scored: Vec<GuideDocument> = Vec::new();
    for doc in &deduped {
        if let Some(score) = relevance_score(doc, query, &query_lower) {
            let mut doc = doc.clone();
            doc.relevance_score = Some(score);
            scored.push(doc);
        }
    }

    // Stable sort: ties keep pooled input order.
    scored.sort_by_key(|d| std::cmp::Reverse(d.relevance_score.unwrap_or(0)));

    // Better to show something than nothing.
    let mut ranked = if scored.is_empty() { deduped } else { scored };
    ranked.truncate(max_results);
    ranked
}

/// Keep the first occurrence of each source URL.
pub fn dedup_by_source(results: Vec<GuideDocument>) -> Vec<GuideDocument> {
    let mut seen = std::collections::HashSet::new();
    results
        .into_iter()
        .filter(|doc| seen.insert(doc.source.clone()))
        .collect()
}

fn relevance_score(doc: &GuideDocument, query: &str, query_lower: &str) -> Option<u32> {
    let title = doc.title.to_lowercase();
    let content = doc.content.to_lowercase();

    if title.contains(query_lower) || content.contains(query_lower) {
        return Some(SCORE_EXACT);
    }

    if query_lower
        .split_whitespace()
        .any(|word| title.contains(word) || content.contains(word))
    {
        return Some(SCORE_PARTIAL);
    }

    // Model-number heuristic: "G973" should still match "Galaxy S10 (G973F)".
    if query.chars().any(|c| c.is_ascii_digit()) && doc.title.chars().any(|c| c.is_ascii_digit()) {
        let query_digits: String = query.chars().filter(|c| c.is_ascii_digit()).collect();
        let title_digits: String = doc.title.chars().filter(|c| c.is_ascii_digit()).collect();
        if query_digits.contains(&title_digits) || title_digits.contains(&query_digits) {
            return Some(SCORE_MODEL_NUMBER);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, source: &str, content: &str) -> GuideDocument {
        GuideDocument {
            title: title.to_string(),
            source: source.to_string(),
            content: content.to_string(),
            relevance_score: None,
        }
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let results = vec![
            doc("iPhone 14", "https://www.ifixit.com/Device/iPhone_14", "first"),
            doc("iPhone 14 (dup)", "https://www.ifixit.com/Device/iPhone_14", "second"),
            doc("iPhone 13", "https://www.ifixit.com/Device/iPhone_13", "other"),
        ];
        let deduped = dedup_by_source(results);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].content, "first");
    }

    #[test]
    fn test_exact_match_scores_100() {
        let results = vec![doc("iPhone 14 Repair", "https://a", "Guides for the iPhone 14")];
        let ranked = rank(results, "iPhone 14", 10);
        assert_eq!(ranked[0].relevance_score, Some(100));
    }

    #[test]
    fn test_token_match_scores_50() {
        let results = vec![doc("Galaxy Battery Guide", "https://a", "battery swaps")];
        let ranked = rank(results, "iphone battery", 10);
        assert_eq!(ranked[0].relevance_score, Some(50));
    }

    #[test]
    fn test_model_number_heuristic_scores_75() {
        // "9731" is not a literal token of the title, but the title's digit
        // string "973" is a substring of the query's digits.
        let results = vec![doc("SM-G973F Teardown", "https://a", "exploded view")];
        let ranked = rank(results, "9731", 10);
        assert_eq!(ranked[0].relevance_score, Some(75));
    }

    #[test]
    fn test_exact_beats_model_number_beats_partial() {
        let results = vec![
            doc("spudger catalog", "https://partial", "iphone accessories"),
            doc("Handset 97", "https://model", "exploded view"),
            doc("iphone 973", "https://exact", "the iphone 973 page"),
        ];
        let ranked = rank(results, "iphone 973", 10);
        let scores: Vec<_> = ranked.iter().map(|d| d.relevance_score.unwrap()).collect();
        assert_eq!(scores, vec![100, 75, 50]);
        assert_eq!(ranked[0].source, "https://exact");
    }

    #[test]
    fn test_no_matches_falls_back_to_deduped_input() {
        let results = vec![
            doc("Toaster", "https://a", "heating element"),
            doc("Kettle", "https://b", "water boiler"),
        ];
        let ranked = rank(results, "xylophone", 10);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|d| d.relevance_score.is_none()));
        // Input order preserved on fallback
        assert_eq!(ranked[0].title, "Toaster");
    }

    #[test]
    fn test_truncates_to_max_results() {
        let results: Vec<_> = (0..20)
            .map(|i| doc(&format!("iPhone {i}"), &format!("https://{i}"), "iphone"))
            .collect();
        let ranked = rank(results, "iphone", 5);
        assert_eq!(ranked.len(), 5);
    }

    #[test]
    fn test_no_two_entries_share_a_source() {
        let results = vec![
            doc("iPhone 14", "https://same", "iphone"),
            doc("iPhone 14 again", "https://same", "iphone"),
            doc("iPhone 14 more", "https://same", "iphone"),
        ];
        let ranked = rank(results, "iphone", 10);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let results = vec![
            doc("iphone a", "https://a", ""),
            doc("iphone b", "https://b", ""),
            doc("iphone c", "https://c", ""),
        ];
        let ranked = rank(results, "iphone", 10);
        let sources: Vec<_> = ranked.iter().map(|d| d.source.as_str()).collect();
        assert_eq!(sources, vec!["https://a", "https://b", "https://c"]);
    }

    #[test]
    fn test_idempotent_on_uniform_ranked_input() {
        let results = vec![
            doc("iphone a", "https://a", ""),
            doc("iphone b", "https://b", ""),
        ];
        let once = rank(results, "iphone", 10);
        let twice = rank(once.clone(), "iphone", 10);
        let order_once: Vec<_> = once.iter().map(|d| d.source.clone()).collect();
        let order_twice: Vec<_> = twice.iter().map(|d| d.source.clone()).collect();
        assert_eq!(order_once, order_twice);
    }

    #[test]
    fn test_empty_query_matches_everything_exactly() {
        // "" is a substring of any title, so every result scores 100.
        let results = vec![doc("Anything", "https://a", "text")];
        let ranked = rank(results, "", 10);
        assert_eq!(ranked[0].relevance_score, Some(100));
    }

    #[test]
    fn test_query_without_digits_never_hits_model_heuristic() {
        let results = vec![doc("Model 42", "https://a", "")];
        let ranked = rank(results, "zzz", 10);
        assert!(ranked[0].relevance_score.is_none());
    }

    #[test]
    fn test_result_without_title_still_matches_on_content() {
        let results = vec![doc("", "https://a", "iphone 14 battery guide")];
        let ranked = rank(results, "iphone 14", 10);
        assert_eq!(ranked[0].relevance_score, Some(100));
    }
}
