//! Candidate scoring, ranking, and explanation

use crate::pool::PoolEntry;
use crate::terms::extract_terms;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use recordsdesk_domain::MatchCandidate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Per-term score increment
const TERM_INCREMENT: f64 = 0.1;
/// Bonus when the leading three terms appear verbatim
const PHRASE_BONUS: f64 = 0.3;
/// Candidates scoring at or below this never appear in results
const SCORE_THRESHOLD: f64 = 0.3;
/// Maximum number of ranked results
const MAX_RESULTS: usize = 6;
/// Half-width of the jitter interval
const JITTER_SPAN: f64 = 0.05;
/// Maximum key phrases pooled into the explanation
const MAX_EXPLAIN_PHRASES: usize = 8;

/// Injected perturbation source for the "realistic variation" the portal
/// displays on match scores
///
/// `Jitter::none()` makes scoring exactly deterministic; `Jitter::seeded`
/// reproduces the same perturbation sequence for a given seed.
#[derive(Debug, Default)]
pub struct Jitter(Option<StdRng>);

impl Jitter {
    /// No perturbation; scores are the raw overlap scores
    pub fn none() -> Self {
        Self(None)
    }

    /// Seeded perturbation, reproducible per seed
    pub fn seeded(seed: u64) -> Self {
        Self(Some(StdRng::seed_from_u64(seed)))
    }

    fn offset(&mut self) -> f64 {
        match &mut self.0 {
            None => 0.0,
            Some(rng) => rng.gen_range(-JITTER_SPAN..=JITTER_SPAN),
        }
    }
}

/// How a ranked result set came about
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchExplanation {
    /// Terms extracted from the request description
    pub query_terms: Vec<String>,
    /// Key phrases pooled from the returned candidates (at most 8)
    pub key_phrases: Vec<String>,
    /// Maximum relevance score across the results
    pub semantic_similarity: f64,
    /// Fraction of query terms present in any returned candidate's key
    /// phrases
    pub keyword_overlap: f64,
    /// Coarse contextual-relevance figure: 0.75 with results, 0.2 without
    pub contextual_relevance: f64,
    /// Templated summary chosen by result count
    pub summary: String,
}

/// A ranked result set plus its explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Ranked candidates, strictly descending by score, at most 6
    pub results: Vec<MatchCandidate>,
    /// Explanation of the ranking
    pub explanation: MatchExplanation,
}

/// The mock similarity matcher over a candidate pool
pub struct Matcher {
    pool: Vec<PoolEntry>,
}

impl Matcher {
    /// Build a matcher over an explicit pool
    pub fn new(pool: Vec<PoolEntry>) -> Self {
        Self { pool }
    }

    /// Build a matcher over the built-in pool
    pub fn with_builtin_pool() -> Self {
        Self::new(crate::pool::builtin_pool())
    }

    /// Look up a pool entry by candidate id
    ///
    /// Used by the accept flow to copy candidate fields onto a request.
    pub fn candidate(&self, id: &str) -> Option<&PoolEntry> {
        self.pool.iter().find(|e| e.id == id)
    }

    /// Score the pool against a request description and return the ranked
    /// shortlist with an explanation
    pub fn search(&self, description: &str, extra_terms: &[String], jitter: &mut Jitter) -> MatchOutcome {
        let query_terms = extract_terms(description, extra_terms);

        let mut scored: Vec<MatchCandidate> = self
            .pool
            .iter()
            .filter_map(|entry| {
                let base = overlap_score(&query_terms, entry);
                let final_score = (base + jitter.offset()).clamp(0.0, 1.0);
                if final_score <= SCORE_THRESHOLD {
                    return None;
                }
                // Distance tracks the pre-jitter score, so it is not
                // strictly the complement of the displayed relevance
                Some(entry.clone().into_candidate(final_score, 1.0 - base))
            })
            .collect();

        scored.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
        });
        scored.truncate(MAX_RESULTS);

        let explanation = explain(&query_terms, &scored);
        MatchOutcome {
            results: scored,
            explanation,
        }
    }
}

/// Raw term-overlap score for one pool entry, clamped to [0, 1]
fn overlap_score(query_terms: &[String], entry: &PoolEntry) -> f64 {
    let haystack = entry.haystack();
    let phrases_lower: Vec<String> = entry.key_phrases.iter().map(|p| p.to_lowercase()).collect();

    let mut score = 0.0;
    for term in query_terms {
        if haystack.contains(term.as_str()) || phrases_lower.iter().any(|p| p.contains(term.as_str())) {
            score += TERM_INCREMENT;
        }
    }

    if query_terms.len() >= 3 {
        let leading_phrase = query_terms[..3].join(" ");
        if haystack.contains(&leading_phrase) {
            score += PHRASE_BONUS;
        }
    }

    score.clamp(0.0, 1.0)
}

fn explain(query_terms: &[String], results: &[MatchCandidate]) -> MatchExplanation {
    let mut key_phrases: Vec<String> = Vec::new();
    for candidate in results {
        for phrase in &candidate.key_phrases {
            if !key_phrases.contains(phrase) {
                key_phrases.push(phrase.clone());
            }
            if key_phrases.len() == MAX_EXPLAIN_PHRASES {
                break;
            }
        }
        if key_phrases.len() == MAX_EXPLAIN_PHRASES {
            break;
        }
    }

    let semantic_similarity = results
        .iter()
        .map(|c| c.relevance_score)
        .fold(0.0, f64::max);

    let keyword_overlap = if query_terms.is_empty() {
        0.0
    } else {
        let matched = query_terms
            .iter()
            .filter(|term| {
                results.iter().any(|c| {
                    c.key_phrases
                        .iter()
                        .any(|p| p.to_lowercase().contains(term.as_str()))
                })
            })
            .count();
        matched as f64 / query_terms.len() as f64
    };

    let contextual_relevance = if results.is_empty() { 0.2 } else { 0.75 };

    let summary = match results.len() {
        0 => "No sufficiently similar records were found. Broader wording or additional search terms may help.".to_string(),
        n @ 1..=4 => format!(
            "Found {} closely related record(s) sharing terminology with the request description.",
            n
        ),
        n => format!(
            "Found {} potentially related records; the request language overlaps several record series.",
            n
        ),
    };

    MatchExplanation {
        query_terms: query_terms.to_vec(),
        key_phrases,
        semantic_similarity,
        keyword_overlap,
        contextual_relevance,
        summary,
    }
}
