//! Query expansion against the static model-number alias table.
//!
//! iFixit search responds poorly to bare regulatory model codes ("G973F"),
//! so queries are expanded with the marketing names they map to, and vice
//! versa. The table is read-only, process-wide data.

/// Manufacturer model code → marketing name. Keys are unique; several codes
/// map to the same device.
pub const MODEL_ALIASES: &[(&str, &str)] = &[
    // Samsung Galaxy models
    ("G973", "Samsung Galaxy S10"),
    ("G973F", "Samsung Galaxy S10"),
    ("G973U", "Samsung Galaxy S10"),
    ("G973W", "Samsung Galaxy S10"),
    ("G970", "Samsung Galaxy S10e"),
    ("G970F", "Samsung Galaxy S10e"),
    ("G970U", "Samsung Galaxy S10e"),
    ("G975", "Samsung Galaxy S10+"),
    ("G975F", "Samsung Galaxy S10+"),
    ("G975U", "Samsung Galaxy S10+"),
    ("G998", "Samsung Galaxy S21 Ultra"),
    ("G991", "Samsung Galaxy S21"),
    ("G996", "Samsung Galaxy S21+"),
    ("G998B", "Samsung Galaxy S21 Ultra"),
    ("G991B", "Samsung Galaxy S21"),
    ("G996B", "Samsung Galaxy S21+"),
    // iPhone models
    ("A1505", "iPhone 6"),
    ("A1507", "iPhone 6"),
    ("A1508", "iPhone 6"),
    ("A1516", "iPhone 6"),
    ("A1522", "iPhone 6 Plus"),
    ("A1524", "iPhone 6 Plus"),
    ("A1526", "iPhone 6 Plus"),
    ("A1529", "iPhone 6 Plus"),
    ("A1549", "iPhone 6 Plus"),
    ("A1586", "iPhone 6"),
    ("A1589", "iPhone 6"),
    ("A1593", "iPhone 6 Plus"),
    ("A1633", "iPhone 6s"),
    ("A1634", "iPhone 6s Plus"),
    ("A1688", "iPhone 6s"),
    ("A1687", "iPhone 6s Plus"),
    ("A1700", "iPhone 6s"),
    ("A1699", "iPhone 6s Plus"),
    ("A1778", "iPhone 7"),
    ("A1784", "iPhone 7 Plus"),
    ("A1660", "iPhone 7"),
    ("A1661", "iPhone 7 Plus"),
    ("A1779", "iPhone 7"),
    ("A1785", "iPhone 7 Plus"),
    ("A1863", "iPhone 8"),
    ("A1864", "iPhone 8 Plus"),
    ("A1905", "iPhone 8"),
    ("A1897", "iPhone 8 Plus"),
    ("A1906", "iPhone 8"),
    ("A1898", "iPhone 8 Plus"),
    ("A1920", "iPhone XS"),
    ("A1921", "iPhone XS Max"),
    ("A2097", "iPhone XS"),
    ("A2101", "iPhone XS Max"),
    ("A2098", "iPhone XS"),
    ("A2102", "iPhone XS Max"),
    ("A2111", "iPhone XR"),
    ("A2105", "iPhone XR"),
    ("A2106", "iPhone XR"),
    ("A2108", "iPhone XR"),
    ("A2215", "iPhone 11"),
    ("A2221", "iPhone 11 Pro"),
    ("A2223", "iPhone 11 Pro Max"),
    ("A2220", "iPhone 11"),
    ("A2218", "iPhone 11 Pro"),
    // MacBook models
    ("A1502", "MacBook Pro 13-inch"),
    ("A1398", "MacBook Pro 15-inch"),
    ("A1466", "MacBook Air 13-inch"),
    ("A1465", "MacBook Air 11-inch"),
    ("A1534", "MacBook 12-inch"),
    ("A1706", "MacBook Pro 13-inch"),
];

/// Expand a device query with model-number aliases.
///
/// The result always contains the original query, is deduplicated, and its
/// iteration order carries no meaning.
pub fn expand(query: &str) -> Vec<String> {
    let mut expanded = vec![query.to_string()];

    // Exact model-code match
    if let Some((_, name)) = MODEL_ALIASES.iter().find(|(code, _)| *code == query) {
        push_unique(&mut expanded, name);
    }

    // Substring match in either direction
    let query_lower = query.to_lowercase();
    for (code, name) in MODEL_ALIASES {
        if query_lower.contains(&code.to_lowercase()) || query_lower.contains(&name.to_lowercase())
        {
            push_unique(&mut expanded, code);
            push_unique(&mut expanded, name);
        }
    }

    expanded
}

fn push_unique(queries: &mut Vec<String>, candidate: &str) {
    if !queries.iter().any(|q| q == candidate) {
        queries.push(candidate.to_string());
    }
}
