//! The matching engine: weighted score aggregation over a corpus of
//! valid domain labels, plus ranking and redirect decisions.
//!
//! A [`DomainMatcher`] owns the corpus of valid identifiers, the
//! keyboard and phonetic models, and a pairwise score cache. Scores
//! combine three similarity signals and a length penalty:
//!
//! ```text
//! score = w_edit * edit + w_keyboard * keyboard + w_phonetic * phonetic
//!       - w_length_penalty * penalty
//! ```
//!
//! clamped to `[0, 1]`. The edit signal is Jaro-Winkler or Levenshtein
//! similarity depending on configuration; the keyboard and phonetic
//! signals come from the shared weighted alignment in [`crate::align`].
//!
//! Example:
//!
//! ```
//! use typomatch::matcher::DomainMatcher;
//!
//! let mut matcher = DomainMatcher::default();
//! matcher.add_domains(["web", "api", "mail"]);
//!
//! let results = matcher.matches("wen", 0.3, 10);
//! assert_eq!(results[0].domain, "web");
//! ```

use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::align;
use crate::error::Error;
use crate::keyboard::KeyboardLayout;
use crate::normalize::normalize;
use crate::phonetic::{PhoneticPattern, PhoneticSimilarity};

/// Default score threshold below which candidates are filtered out.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

/// Default score above which a query is confidently auto-resolved.
pub const DEFAULT_REDIRECT_THRESHOLD: f64 = 0.8;

/// Default bound on the number of returned matches.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Threshold used by [`DomainMatcher::analyze`] when listing matches.
const ANALYSIS_MATCH_THRESHOLD: f64 = 0.1;

/// Tolerance on the edit + keyboard + phonetic weight sum.
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Upper bound of the length-difference penalty.
const MAX_LENGTH_PENALTY: f64 = 0.3;

/// Key distance within which keys count as adjacent for typo variants.
const ADJACENT_KEY_DISTANCE: f64 = 1.5;

/// Weights of the aggregate similarity formula.
///
/// The edit, keyboard and phonetic weights must sum to `1.0` within a
/// tolerance of `0.01`; the length-penalty weight is independent of
/// that sum. All weights must be non-negative. Violations are rejected
/// with an error, never silently renormalized.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MatcherWeights {
    pub edit: f64,
    pub keyboard: f64,
    pub phonetic: f64,
    pub length_penalty: f64,
}

impl MatcherWeights {
    pub fn validate(&self) -> Result<(), Error> {
        for weight in [self.edit, self.keyboard, self.phonetic, self.length_penalty] {
            if weight < 0.0 {
                return Err(Error::NegativeWeight { weight });
            }
        }

        let sum = self.edit + self.keyboard + self.phonetic;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Error::InvalidWeights { sum });
        }

        Ok(())
    }
}

impl Default for MatcherWeights {
    fn default() -> Self {
        Self {
            edit: 0.4,
            keyboard: 0.4,
            phonetic: 0.2,
            length_penalty: 0.1,
        }
    }
}

/// One ranked candidate with its aggregate score.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Match {
    pub domain: String,
    pub score: f64,
}

/// Per-input result of a batch match.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BatchMatch {
    pub input: String,
    pub matches: Vec<Match>,
}

/// Diagnostic detail for the top candidate of an analysis.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisDetails {
    pub keyboard_similarity: f64,
    pub phonetic_similarity: f64,
    pub phonetic_pattern: PhoneticPattern,
}

/// Structured report produced by [`DomainMatcher::analyze`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InputAnalysis {
    pub original_input: String,
    pub normalized_input: String,
    pub input_length: usize,
    pub matches: Vec<Match>,
    pub best_match: Option<Match>,
    pub should_redirect: bool,
    pub redirect_target: Option<String>,
    pub details: Option<AnalysisDetails>,
}

/// Snapshot of the matcher's configuration and state.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MatcherStats {
    pub total_domains: usize,
    pub cache_size: usize,
    pub weights: MatcherWeights,
    pub use_jaro_winkler: bool,
    pub domains: Vec<String>,
}

/// Fuzzy matcher over a corpus of valid domain labels.
pub struct DomainMatcher {
    weights: MatcherWeights,
    use_jaro_winkler: bool,
    keyboard: KeyboardLayout,
    phonetic: PhoneticSimilarity,
    domains: Vec<String>,
    cache: HashMap<(String, String), f64>,
}

impl DomainMatcher {
    /// Create a matcher with the given weights. `use_jaro_winkler`
    /// selects Jaro-Winkler over plain Levenshtein similarity for the
    /// edit signal.
    pub fn new(weights: MatcherWeights, use_jaro_winkler: bool) -> Result<Self, Error> {
        weights.validate()?;
        Ok(Self::assemble(weights, use_jaro_winkler))
    }

    fn assemble(weights: MatcherWeights, use_jaro_winkler: bool) -> Self {
        Self {
            weights,
            use_jaro_winkler,
            keyboard: KeyboardLayout::new(),
            phonetic: PhoneticSimilarity::new(),
            domains: Vec::new(),
            cache: HashMap::new(),
        }
    }

    pub fn weights(&self) -> MatcherWeights {
        self.weights
    }

    pub fn uses_jaro_winkler(&self) -> bool {
        self.use_jaro_winkler
    }

    /// Add identifiers to the corpus. Each is normalized first; empty
    /// results and duplicates are silently dropped, first-insertion
    /// order is preserved. Invalidates the pairwise score cache.
    pub fn add_domains<I, S>(&mut self, domains: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for domain in domains {
            let normalized = normalize(domain.as_ref());

            if !normalized.is_empty() && !self.domains.contains(&normalized) {
                self.domains.push(normalized);
            }
        }

        self.cache.clear();
    }

    /// Remove an identifier from the corpus, returning whether it was
    /// present. Invalidates the pairwise score cache.
    pub fn remove_domain(&mut self, domain: &str) -> bool {
        let normalized = normalize(domain);

        match self.domains.iter().position(|d| *d == normalized) {
            Some(index) => {
                self.domains.remove(index);
                self.cache.clear();
                true
            }
            None => false,
        }
    }

    /// Empty the corpus and the pairwise score cache.
    pub fn clear_domains(&mut self) {
        self.domains.clear();
        self.cache.clear();
    }

    /// The corpus in insertion order, as a defensive copy.
    pub fn domains(&self) -> Vec<String> {
        self.domains.clone()
    }

    /// Aggregate similarity between an input and a candidate, in
    /// `[0, 1]`.
    ///
    /// Both strings are normalized first; if either normalizes to
    /// empty the score is `0.0`, and identical normalized strings
    /// score `1.0` without touching the cache or the weights.
    pub fn similarity(&mut self, input: &str, candidate: &str) -> f64 {
        let input_norm = normalize(input);
        let candidate_norm = normalize(candidate);

        if input_norm.is_empty() || candidate_norm.is_empty() {
            return 0.0;
        }

        if input_norm == candidate_norm {
            return 1.0;
        }

        let key = (input_norm.clone(), candidate_norm.clone());
        if let Some(&cached) = self.cache.get(&key) {
            return cached;
        }

        let edit = if self.use_jaro_winkler {
            align::jaro_winkler_similarity(&input_norm, &candidate_norm)
        } else {
            align::levenshtein_similarity(&input_norm, &candidate_norm)
        };

        let keyboard = align::weighted_similarity(&input_norm, &candidate_norm, |a, b| {
            self.keyboard.similarity(a, b)
        });

        let phonetic = align::weighted_similarity(&input_norm, &candidate_norm, |a, b| {
            self.phonetic.similarity(a, b)
        });

        let penalty = length_penalty(&input_norm, &candidate_norm);

        let score = (self.weights.edit * edit
            + self.weights.keyboard * keyboard
            + self.weights.phonetic * phonetic
            - self.weights.length_penalty * penalty)
            .clamp(0.0, 1.0);

        self.cache.insert(key, score);
        score
    }

    /// Rank corpus candidates against `input`.
    ///
    /// Candidates scoring below `threshold` are dropped; the rest are
    /// sorted descending by score with ties broken by corpus insertion
    /// order, then truncated to `max_results`. An input that
    /// normalizes to empty yields an empty result.
    pub fn matches(&mut self, input: &str, threshold: f64, max_results: usize) -> Vec<Match> {
        let input_norm = normalize(input);

        if input_norm.is_empty() || self.domains.is_empty() {
            return Vec::new();
        }

        // Snapshot so scoring can append to the cache while iterating.
        let candidates = self.domains.clone();
        let mut results = Vec::new();

        for domain in candidates {
            let score = self.similarity(&input_norm, &domain);

            if score >= threshold {
                results.push(Match { domain, score });
            }
        }

        // Stable sort keeps corpus insertion order for equal scores.
        results.sort_by(|a, b| align::score_ordering(b.score, a.score));
        results.truncate(max_results);
        results
    }

    /// The single best candidate at or above `threshold`, if any.
    pub fn best_match(&mut self, input: &str, threshold: f64) -> Option<Match> {
        self.matches(input, threshold, 1).into_iter().next()
    }

    /// Decide whether `input` should be auto-resolved to a corpus
    /// entry.
    ///
    /// The best candidate is always determined with an effective match
    /// threshold of `0.0`, independently of any caller-side match
    /// threshold; the redirect happens only if that candidate scores
    /// at or above `redirect_threshold`.
    pub fn should_redirect(&mut self, input: &str, redirect_threshold: f64) -> Option<String> {
        self.best_match(input, 0.0)
            .filter(|best| best.score >= redirect_threshold)
            .map(|best| best.domain)
    }

    /// Independently match each input against the corpus. Inputs only
    /// share the pairwise score cache.
    pub fn batch_match<I, S>(&mut self, inputs: I, threshold: f64) -> Vec<BatchMatch>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|input| BatchMatch {
                input: input.as_ref().to_string(),
                matches: self.matches(input.as_ref(), threshold, DEFAULT_MAX_RESULTS),
            })
            .collect()
    }

    /// Produce a structured diagnostic report for `input`: its
    /// matches (threshold `0.1`, at most `10`), the best match, the
    /// redirect decision at the default redirect threshold, and
    /// keyboard/phonetic detail for the top candidate only.
    ///
    /// This is a read-only projection for diagnostics and UIs; it does
    /// not affect ranking.
    pub fn analyze(&mut self, input: &str) -> InputAnalysis {
        let normalized_input = normalize(input);

        let mut analysis = InputAnalysis {
            original_input: input.to_string(),
            normalized_input: normalized_input.clone(),
            input_length: normalized_input.chars().count(),
            matches: Vec::new(),
            best_match: None,
            should_redirect: false,
            redirect_target: None,
            details: None,
        };

        if normalized_input.is_empty() {
            return analysis;
        }

        analysis.matches = self.matches(
            &normalized_input,
            ANALYSIS_MATCH_THRESHOLD,
            DEFAULT_MAX_RESULTS,
        );

        if let Some(best) = analysis.matches.first().cloned() {
            if let Some(target) =
                self.should_redirect(&normalized_input, DEFAULT_REDIRECT_THRESHOLD)
            {
                analysis.should_redirect = true;
                analysis.redirect_target = Some(target);
            }

            let keyboard_similarity =
                align::weighted_similarity(&normalized_input, &best.domain, |a, b| {
                    self.keyboard.similarity(a, b)
                });
            let phonetic_similarity =
                align::weighted_similarity(&normalized_input, &best.domain, |a, b| {
                    self.phonetic.similarity(a, b)
                });

            analysis.details = Some(AnalysisDetails {
                keyboard_similarity,
                phonetic_similarity,
                phonetic_pattern: self.phonetic.analyze_pattern(&normalized_input),
            });
            analysis.best_match = Some(best);
        }

        analysis
    }

    /// Update one or more weights, leaving the rest unchanged. The
    /// merged configuration is validated before any state changes; on
    /// success the pairwise score cache is invalidated so the new
    /// weights take effect on the next scoring call.
    pub fn update_weights(
        &mut self,
        edit: Option<f64>,
        keyboard: Option<f64>,
        phonetic: Option<f64>,
        length_penalty: Option<f64>,
    ) -> Result<(), Error> {
        let merged = MatcherWeights {
            edit: edit.unwrap_or(self.weights.edit),
            keyboard: keyboard.unwrap_or(self.weights.keyboard),
            phonetic: phonetic.unwrap_or(self.weights.phonetic),
            length_penalty: length_penalty.unwrap_or(self.weights.length_penalty),
        };
        merged.validate()?;

        self.weights = merged;
        self.cache.clear();
        Ok(())
    }

    /// Current configuration and state counters.
    pub fn statistics(&self) -> MatcherStats {
        MatcherStats {
            total_domains: self.domains.len(),
            cache_size: self.cache.len(),
            weights: self.weights,
            use_jaro_winkler: self.use_jaro_winkler,
            domains: self.domains.clone(),
        }
    }

    /// Generate common typo variants of `word`: single-character
    /// omissions, adjacent-key insertions and substitutions, and
    /// neighbouring transpositions. Deterministic order, deduplicated,
    /// bounded by `max_variants`.
    pub fn typo_variants(&self, word: &str, max_variants: usize) -> Vec<String> {
        let word = normalize(word);

        if word.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = word.chars().collect();
        let mut variants: Vec<String> = Vec::new();

        for i in 0..chars.len() {
            let variant: String = chars
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &c)| c)
                .collect();

            if !variant.is_empty() {
                variants.push(variant);
            }
        }

        for i in 0..chars.len() {
            for neighbour in self.keyboard.adjacent(chars[i], ADJACENT_KEY_DISTANCE) {
                // Normalized words are ASCII, so char and byte offsets
                // coincide.
                let mut inserted = word.clone();
                inserted.insert(i, neighbour);
                variants.push(inserted);

                let mut substituted = chars.clone();
                substituted[i] = neighbour;
                let substituted: String = substituted.iter().collect();
                if substituted != word {
                    variants.push(substituted);
                }
            }
        }

        for i in 0..chars.len().saturating_sub(1) {
            let mut swapped = chars.clone();
            swapped.swap(i, i + 1);
            let swapped: String = swapped.iter().collect();
            if swapped != word {
                variants.push(swapped);
            }
        }

        variants.into_iter().unique().take(max_variants).collect()
    }
}

impl Default for DomainMatcher {
    fn default() -> Self {
        Self::assemble(MatcherWeights::default(), true)
    }
}

/// Penalty in `[0, 0.3]` growing with the relative length difference
/// of the two strings. An empty string on either side takes the full
/// penalty.
fn length_penalty(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return MAX_LENGTH_PENALTY;
    }

    let len1 = a.chars().count();
    let len2 = b.chars().count();
    let max_len = len1.max(len2);

    let difference = len1.abs_diff(len2) as f64 / max_len as f64;
    difference.min(1.0) * MAX_LENGTH_PENALTY
}
