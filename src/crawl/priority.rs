// src/crawl/priority.rs
// =============================================================================
// This module decides which internal links are worth fetching.
//
// Scoring is a cascade; the first rule that matches wins:
// 1. the path IS a pattern (optionally with a trailing "/") -> 100 - index
// 2. the path CONTAINS a pattern                            -> 50 - index
// 3. otherwise shallow pages win: max(0, 20 - 5 * depth)
//
// The index is the pattern's position in the list, so list order is the
// editorial priority ("/om" before "/kontakt"). Scores are never summed.
//
// Rust concepts:
// - Pure functions: same input, same output, no I/O
// - Stable sorting: sort_by keeps equal elements in their original order
// =============================================================================

use url::Url;

const EXACT_MATCH_BASE: i32 = 100;
const PARTIAL_MATCH_BASE: i32 = 50;
const SHALLOW_BASE: i32 = 20;
const DEPTH_PENALTY: i32 = 5;

/// A candidate link paired with its score (only lives during selection)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub url: Url,
    pub score: i32,
}

/// Scores one URL against the ordered pattern list.
///
/// Examples with patterns ["/om", "/kontakt"]:
///   https://x.se/om        -> 100
///   https://x.se/om/       -> 100
///   https://x.se/kontakt   -> 99
///   https://x.se/om-oss    -> 50   (contains "/om")
///   https://x.se/a/b/c     -> 5    (depth 3)
pub fn score_url<S: AsRef<str>>(url: &Url, patterns: &[S]) -> i32 {
    let path = url.path().to_lowercase();

    for (index, pattern) in patterns.iter().enumerate() {
        let pattern = pattern.as_ref();
        let is_exact = path == pattern
            || path
                .strip_suffix('/')
                .is_some_and(|trimmed| trimmed == pattern);
        if is_exact {
            return EXACT_MATCH_BASE.saturating_sub(rank(index));
        }
    }

    for (index, pattern) in patterns.iter().enumerate() {
        if path.contains(pattern.as_ref()) {
            return PARTIAL_MATCH_BASE.saturating_sub(rank(index));
        }
    }

    let depth = path.split('/').filter(|segment| !segment.is_empty()).count();
    let penalty = i32::try_from(depth)
        .unwrap_or(i32::MAX)
        .saturating_mul(DEPTH_PENALTY);
    SHALLOW_BASE.saturating_sub(penalty).max(0)
}

fn rank(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

/// Picks the `limit` best candidates from the seed page's internal links.
///
/// The seed itself is never a candidate. Ties keep the order in which the
/// links were discovered on the page.
pub fn select_candidates<S: AsRef<str>>(
    internal_links: &[Url],
    seed: &Url,
    patterns: &[S],
    limit: usize,
) -> Vec<ScoredCandidate> {
    let mut candidates: Vec<ScoredCandidate> = internal_links
        .iter()
        .filter(|url| *url != seed)
        .map(|url| ScoredCandidate {
            score: score_url(url, patterns),
            url: url.clone(),
        })
        .collect();

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(limit);
    candidates
}
