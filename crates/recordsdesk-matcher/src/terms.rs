//! Term extraction from request descriptions

/// Words carrying no signal for record matching
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "that", "with", "this", "from", "are", "was", "were", "have", "has",
    "had", "not", "but", "all", "any", "can", "will", "been", "would", "like", "need", "please",
    "about", "regarding", "copy", "copies", "record", "records", "request",
];

/// Extract query terms from a free-text description
///
/// Lower-cases, strips punctuation, splits on whitespace, drops tokens of
/// length ≤ 2 and stop words, and keeps at most the first 10 survivors.
/// Caller-supplied extra terms are appended afterwards (lower-cased,
/// uncounted against the cap).
pub fn extract_terms(description: &str, extra_terms: &[String]) -> Vec<String> {
    let normalized: String = description
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let mut terms: Vec<String> = normalized
        .split_whitespace()
        .filter(|t| t.len() > 2 && !STOP_WORDS.contains(t))
        .take(10)
        .map(String::from)
        .collect();

    terms.extend(extra_terms.iter().map(|t| t.to_lowercase()));
    terms
}
