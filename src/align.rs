//! String alignment and edit-distance primitives.
//!
//! This module hosts the shared dynamic-programming core of the
//! matching engine: a weighted alignment parameterized by a per-character
//! similarity function (used for both keyboard and phonetic string
//! similarity), plus the two edit-distance variants the aggregator can
//! be configured with.

use std::cmp::Ordering;

/// Length of the common prefix the Winkler boost considers, at most.
const WINKLER_PREFIX_CAP: usize = 4;

/// Scaling factor of the Winkler prefix boost.
const WINKLER_PREFIX_SCALE: f64 = 0.1;

/// Compute a weighted alignment similarity between two strings.
///
/// Builds a `(m + 1) x (n + 1)` table where exact character matches
/// score `1.0` and mismatches fall back to the best of a skip on either
/// side or a substitution credited with `pair_similarity` of the two
/// characters. The final score is the table corner normalized by the
/// longer length, yielding a value in `[0, 1]`.
///
/// If either string is empty the similarity is `0.0`. Note this differs
/// deliberately from [`levenshtein_similarity`] and
/// [`jaro_winkler_similarity`], which both define empty-vs-empty as
/// `1.0`.
pub fn weighted_similarity<F>(a: &str, b: &str, pair_similarity: F) -> f64
where
    F: Fn(char, char) -> f64,
{
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a == b {
        return 1.0;
    }

    let s1: Vec<char> = a.chars().collect();
    let s2: Vec<char> = b.chars().collect();
    let (m, n) = (s1.len(), s2.len());

    let mut dp = vec![vec![0.0f64; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if s1[i - 1] == s2[j - 1] {
                dp[i - 1][j - 1] + 1.0
            } else {
                let substitution = dp[i - 1][j - 1] + pair_similarity(s1[i - 1], s2[j - 1]);
                dp[i - 1][j].max(dp[i][j - 1]).max(substitution)
            };
        }
    }

    dp[m][n] / m.max(n) as f64
}

/// Classic three-operation (insert/delete/substitute) Levenshtein edit
/// distance with unit costs.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let s1: Vec<char> = a.chars().collect();
    let s2: Vec<char> = b.chars().collect();

    if s1.is_empty() {
        return s2.len();
    }
    if s2.is_empty() {
        return s1.len();
    }

    let mut previous: Vec<usize> = (0..=s2.len()).collect();
    let mut current = vec![0usize; s2.len() + 1];

    for (i, c1) in s1.iter().enumerate() {
        current[0] = i + 1;

        for (j, c2) in s2.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[s2.len()]
}

/// Similarity derived from the Levenshtein distance, normalized by the
/// longer length. Two empty strings are identical and score `1.0`.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());

    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    (1.0 - distance as f64 / max_len as f64).max(0.0)
}

/// Jaro-Winkler similarity, which rewards strings sharing a common
/// prefix. Two empty strings score `1.0`; exactly one empty string
/// scores `0.0`.
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let s1: Vec<char> = a.chars().collect();
    let s2: Vec<char> = b.chars().collect();
    let (len1, len2) = (s1.len(), s2.len());

    let match_window = (len1.max(len2) / 2).saturating_sub(1);

    let mut matched1 = vec![false; len1];
    let mut matched2 = vec![false; len2];
    let mut matches = 0usize;

    for i in 0..len1 {
        let start = i.saturating_sub(match_window);
        let end = (i + match_window + 1).min(len2);

        for j in start..end {
            if matched2[j] || s1[i] != s2[j] {
                continue;
            }

            matched1[i] = true;
            matched2[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Transpositions are counted between matched characters taken in
    // their respective string orders.
    let mut transpositions = 0usize;
    let mut k = 0usize;

    for i in 0..len1 {
        if !matched1[i] {
            continue;
        }

        while !matched2[k] {
            k += 1;
        }

        if s1[i] != s2[k] {
            transpositions += 1;
        }

        k += 1;
    }

    let m = matches as f64;
    let jaro = (m / len1 as f64 + m / len2 as f64 + (m - transpositions as f64 / 2.0) / m) / 3.0;

    let prefix_len = s1
        .iter()
        .zip(&s2)
        .take(WINKLER_PREFIX_CAP)
        .take_while(|(c1, c2)| c1 == c2)
        .count();

    jaro + WINKLER_PREFIX_SCALE * prefix_len as f64 * (1.0 - jaro)
}

/// Total order over finite similarity scores. Scores produced by this
/// module are always finite, so incomparable values collapse to equal.
pub(crate) fn score_ordering(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance_kitten_sitting() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_levenshtein_distance_edges() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
    }

    #[test]
    fn test_levenshtein_distance_is_symmetric() {
        assert_eq!(
            levenshtein_distance("kitten", "sitting"),
            levenshtein_distance("sitting", "kitten")
        );
    }

    #[test]
    fn test_levenshtein_similarity() {
        assert_eq!(levenshtein_similarity("", ""), 1.0);
        assert_eq!(levenshtein_similarity("web", "web"), 1.0);
        assert_eq!(levenshtein_similarity("abc", "xyz"), 0.0);

        // 3 edits over max length 7.
        let sim = levenshtein_similarity("kitten", "sitting");
        assert!((sim - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
    }

    #[test]
    fn test_jaro_winkler_identical() {
        assert_eq!(jaro_winkler_similarity("test", "test"), 1.0);
    }

    #[test]
    fn test_jaro_winkler_empty() {
        assert_eq!(jaro_winkler_similarity("", ""), 1.0);
        assert_eq!(jaro_winkler_similarity("test", ""), 0.0);
        assert_eq!(jaro_winkler_similarity("", "test"), 0.0);
    }

    #[test]
    fn test_jaro_winkler_no_matches() {
        assert_eq!(jaro_winkler_similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_jaro_winkler_known_value() {
        // Canonical example: jaro = 0.9444..., prefix 3, jw = 0.9611...
        let sim = jaro_winkler_similarity("martha", "marhta");
        assert!((sim - 0.9611).abs() < 1e-3);
    }

    #[test]
    fn test_jaro_winkler_is_symmetric() {
        for (a, b) in [("martha", "marhta"), ("wen", "web"), ("dwayne", "duane")] {
            let lhs = jaro_winkler_similarity(a, b);
            let rhs = jaro_winkler_similarity(b, a);
            assert!((lhs - rhs).abs() < 1e-12);
        }
    }

    #[test]
    fn test_weighted_similarity_identical() {
        let sim = weighted_similarity("web", "web", |_, _| 0.0);
        assert_eq!(sim, 1.0);
    }

    #[test]
    fn test_weighted_similarity_empty_is_zero() {
        // Empty-vs-empty is 0.0 on the alignment path, unlike the
        // edit-distance path.
        assert_eq!(weighted_similarity("", "", |_, _| 1.0), 0.0);
        assert_eq!(weighted_similarity("web", "", |_, _| 1.0), 0.0);
        assert_eq!(weighted_similarity("", "web", |_, _| 1.0), 0.0);
    }

    #[test]
    fn test_weighted_similarity_zero_pair_function() {
        // With a zero pair function only exact matches contribute.
        let sim = weighted_similarity("abd", "abc", |_, _| 0.0);
        assert!((sim - 2.0 / 3.0).abs() < 1e-9);

        assert_eq!(weighted_similarity("ab", "cd", |_, _| 0.0), 0.0);
    }

    #[test]
    fn test_weighted_similarity_substitution_credit() {
        // A mismatch with pair similarity 0.9 should beat skipping.
        let sim = weighted_similarity("wen", "web", |x, y| {
            if (x, y) == ('n', 'b') || (x, y) == ('b', 'n') {
                0.9
            } else {
                0.0
            }
        });
        assert!((sim - 2.9 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_similarity_bounded() {
        let sim = weighted_similarity("short", "muchlongerstring", |_, _| 1.0);
        assert!((0.0..=1.0).contains(&sim));
    }
}
