//! # Suggestion Engine
//!
//! "Did you mean…" suggestions for searches that match nothing.
//!
//! ## When It Runs
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  search("all", "piza") ──► 0 matches                              │
//! │        │                                                          │
//! │        ▼                                                          │
//! │  suggest("piza", catalog.all_items())                             │
//! │        │                                                          │
//! │        │  per item: levenshtein(lowercased name, query)           │
//! │        │  stable ascending sort, first 3 names                    │
//! │        ▼                                                          │
//! │  ["Margherita Pizza", "Pepperoni Pizza", "Lasagna"]               │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only invoked on zero matches; a successful search never pays for the
//! distance computation.

use crate::types::MenuItem;

/// Maximum number of suggestions returned.
const MAX_SUGGESTIONS: usize = 3;

/// Classic single-row dynamic-programming Levenshtein edit distance.
///
/// Cost 1 per insert/delete/substitute, 0 for an exact character match.
/// Distance to/from the empty string is the other string's length.
///
/// ```rust
/// use ace_core::suggest::levenshtein;
///
/// assert_eq!(levenshtein("pizza", "pizza"), 0);
/// assert_eq!(levenshtein("piza", "pizza"), 1);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // dp[j] holds the distance between a[..i] and b[..j] for the current
    // row i; `prev` carries the diagonal (i-1, j-1) value.
    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for i in 1..=a.len() {
        let mut prev = i - 1;
        dp[0] = i;
        for j in 1..=b.len() {
            let tmp = dp[j];
            let substitute = prev + usize::from(a[i - 1] != b[j - 1]);
            dp[j] = (dp[j] + 1).min(dp[j - 1] + 1).min(substitute);
            prev = tmp;
        }
    }
    dp[b.len()]
}

/// Computes up to 3 near-match item names for a query that matched nothing.
///
/// The query is trimmed and lowercased; each item's name is lowercased
/// before the distance comparison. The sort is stable, so equidistant
/// names keep their catalog order. Returns fewer than 3 names only when
/// the catalog itself has fewer than 3 items.
pub fn suggest(query: &str, items: &[MenuItem]) -> Vec<String> {
    let needle = query.trim().to_lowercase();

    let mut ranked: Vec<(&MenuItem, usize)> = items
        .iter()
        .map(|item| (item, levenshtein(&item.name.to_lowercase(), &needle)))
        .collect();
    ranked.sort_by_key(|&(_, distance)| distance);

    ranked
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(item, _)| item.name.clone())
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
