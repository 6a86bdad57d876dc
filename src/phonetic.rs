//! Phonetic similarity between domain-label characters.
//!
//! This module scores how easily two characters are confused for one
//! another by sound: curated confusable pairs (e.g. `b`/`p`, `l`/`r`)
//! score high, characters sharing a broader articulatory class
//! (plosive, fricative, nasal, liquid, glide, vowel) score a moderate
//! floor, and everything else scores zero. It also produces a
//! structured pattern report for a single word, used by the matcher's
//! diagnostics.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ALPHANUMERIC, CONFUSABLE_GROUPS, CONFUSABLE_SIMILARITY, FRICATIVES, GLIDES, LIQUIDS, NASALS,
    PHONEME_CLASS_SIMILARITY, PLOSIVES, VOWELS,
};

/// Minimum similarity for a character to count as a likely confusion
/// in pattern analysis.
const STRONG_CONFUSION_THRESHOLD: f64 = 0.6;

/// How many confusion candidates to report per position.
const CONFUSIONS_PER_POSITION: usize = 3;

/// Broad articulatory classes the similarity table is built from.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PhonemeClass {
    Plosive,
    Fricative,
    Nasal,
    Liquid,
    Glide,
    Vowel,
}

impl PhonemeClass {
    pub const ALL: [PhonemeClass; 6] = [
        PhonemeClass::Plosive,
        PhonemeClass::Fricative,
        PhonemeClass::Nasal,
        PhonemeClass::Liquid,
        PhonemeClass::Glide,
        PhonemeClass::Vowel,
    ];

    /// The characters belonging to this class.
    pub fn members(self) -> &'static [char] {
        match self {
            PhonemeClass::Plosive => &PLOSIVES,
            PhonemeClass::Fricative => &FRICATIVES,
            PhonemeClass::Nasal => &NASALS,
            PhonemeClass::Liquid => &LIQUIDS,
            PhonemeClass::Glide => &GLIDES,
            PhonemeClass::Vowel => &VOWELS,
        }
    }
}

/// A character together with its position in the analyzed word.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionedChar {
    pub ch: char,
    pub position: usize,
}

/// Occurrence count of one phoneme class within a word.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonemeCount {
    pub class: PhonemeClass,
    pub count: usize,
}

/// A position in a word together with the characters its character is
/// most easily confused with.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Confusion {
    pub position: usize,
    pub original: char,
    pub candidates: Vec<char>,
}

/// Structured phonetic profile of a single word.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhoneticPattern {
    pub length: usize,
    pub vowels: Vec<PositionedChar>,
    pub consonants: Vec<PositionedChar>,
    pub phoneme_distribution: Vec<PhonemeCount>,
    pub potential_confusions: Vec<Confusion>,
}

/// Pairwise phonetic similarity over `[a-z0-9]`.
///
/// The full pair table is materialized once at construction: self-pairs
/// at `1.0`, confusable groups at `0.8`, shared phoneme classes at a
/// floor of `0.4` (never downgrading a confusable pair), everything
/// else at `0.0`.
#[derive(Clone, Debug)]
pub struct PhoneticSimilarity {
    similarities: HashMap<(char, char), f64>,
}

impl PhoneticSimilarity {
    pub fn new() -> Self {
        let mut similarities = HashMap::new();

        for &a in &ALPHANUMERIC {
            for &b in &ALPHANUMERIC {
                similarities.insert((a, b), if a == b { 1.0 } else { 0.0 });
            }
        }

        for group in &CONFUSABLE_GROUPS {
            let [a, b] = *group;
            similarities.insert((a, b), CONFUSABLE_SIMILARITY);
            similarities.insert((b, a), CONFUSABLE_SIMILARITY);
        }

        for class in PhonemeClass::ALL {
            let members = class.members();

            for (i, &a) in members.iter().enumerate() {
                for &b in &members[i + 1..] {
                    let current = similarities.get(&(a, b)).copied().unwrap_or(0.0);

                    // Class membership is a floor, not a cap.
                    if current < PHONEME_CLASS_SIMILARITY {
                        similarities.insert((a, b), PHONEME_CLASS_SIMILARITY);
                        similarities.insert((b, a), PHONEME_CLASS_SIMILARITY);
                    }
                }
            }
        }

        Self { similarities }
    }

    /// Phonetic similarity between two characters in `[0, 1]`.
    /// Lookups are case-folded; characters outside `[a-z0-9]` score
    /// `0.0`.
    pub fn similarity(&self, a: char, b: char) -> f64 {
        let key = (a.to_ascii_lowercase(), b.to_ascii_lowercase());
        self.similarities.get(&key).copied().unwrap_or(0.0)
    }

    /// Characters phonetically similar to `c` at or above
    /// `min_similarity`, descending by similarity. Ties are broken by
    /// the `a..z0..9` alphabet order.
    pub fn confusables_of(&self, c: char, min_similarity: f64) -> Vec<char> {
        let c = c.to_ascii_lowercase();

        let mut confusables: Vec<(char, f64)> = ALPHANUMERIC
            .iter()
            .copied()
            .filter(|&other| other != c)
            .map(|other| (other, self.similarity(c, other)))
            .filter(|&(_, similarity)| similarity >= min_similarity)
            .collect();

        confusables.sort_by(|x, y| crate::align::score_ordering(y.1, x.1));
        confusables.into_iter().map(|(ch, _)| ch).collect()
    }

    /// Produce a structured phonetic profile of `word`: vowel and
    /// consonant positions, phoneme class counts, and the top
    /// confusion candidates per position.
    pub fn analyze_pattern(&self, word: &str) -> PhoneticPattern {
        let word = word.to_lowercase();

        let mut vowels = Vec::new();
        let mut consonants = Vec::new();

        for (position, ch) in word.chars().enumerate() {
            if VOWELS.contains(&ch) {
                vowels.push(PositionedChar { ch, position });
            } else if ch.is_ascii_alphabetic() {
                consonants.push(PositionedChar { ch, position });
            }
        }

        let mut phoneme_distribution = Vec::new();

        for class in PhonemeClass::ALL {
            let count = word.chars().filter(|c| class.members().contains(c)).count();

            if count > 0 {
                phoneme_distribution.push(PhonemeCount { class, count });
            }
        }

        let mut potential_confusions = Vec::new();

        for (position, ch) in word.chars().enumerate() {
            let mut candidates = self.confusables_of(ch, STRONG_CONFUSION_THRESHOLD);

            if !candidates.is_empty() {
                candidates.truncate(CONFUSIONS_PER_POSITION);
                potential_confusions.push(Confusion {
                    position,
                    original: ch,
                    candidates,
                });
            }
        }

        PhoneticPattern {
            length: word.chars().count(),
            vowels,
            consonants,
            phoneme_distribution,
            potential_confusions,
        }
    }
}

impl Default for PhoneticSimilarity {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_similarity_is_one() {
        let phonetic = PhoneticSimilarity::new();

        for c in ['a', 'z', '0', '9'] {
            assert_eq!(phonetic.similarity(c, c), 1.0);
        }
    }

    #[test]
    fn test_confusable_pairs() {
        let phonetic = PhoneticSimilarity::new();

        assert_eq!(phonetic.similarity('b', 'p'), 0.8);
        assert_eq!(phonetic.similarity('m', 'n'), 0.8);
        assert_eq!(phonetic.similarity('u', 'v'), 0.8);
    }

    #[test]
    fn test_confusable_not_downgraded_by_class_pass() {
        let phonetic = PhoneticSimilarity::new();

        // `f` and `v` are both fricatives but their confusable-group
        // similarity must survive.
        assert_eq!(phonetic.similarity('f', 'v'), 0.8);
        assert_eq!(phonetic.similarity('s', 'z'), 0.8);
    }

    #[test]
    fn test_shared_class_floor() {
        let phonetic = PhoneticSimilarity::new();

        assert_eq!(phonetic.similarity('p', 't'), 0.4);
        assert_eq!(phonetic.similarity('f', 'h'), 0.4);
        assert_eq!(phonetic.similarity('a', 'o'), 0.4);
    }

    #[test]
    fn test_unrelated_characters_score_zero() {
        let phonetic = PhoneticSimilarity::new();

        assert_eq!(phonetic.similarity('a', 'x'), 0.0);
        assert_eq!(phonetic.similarity('q', '7'), 0.0);
        assert_eq!(phonetic.similarity('!', 'a'), 0.0);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let phonetic = PhoneticSimilarity::new();

        for &[a, b] in &CONFUSABLE_GROUPS {
            assert_eq!(phonetic.similarity(a, b), phonetic.similarity(b, a));
        }
        assert_eq!(phonetic.similarity('p', 'k'), phonetic.similarity('k', 'p'));
    }

    #[test]
    fn test_confusables_of_order() {
        let phonetic = PhoneticSimilarity::new();

        // `p` first (0.8), then the remaining plosives (0.4) in
        // alphabet order.
        assert_eq!(
            phonetic.confusables_of('b', 0.4),
            vec!['p', 'd', 'g', 'k', 't']
        );
    }

    #[test]
    fn test_confusables_of_threshold() {
        let phonetic = PhoneticSimilarity::new();

        assert_eq!(phonetic.confusables_of('b', 0.6), vec!['p']);
        assert!(phonetic.confusables_of('x', 0.4).is_empty());
    }

    #[test]
    fn test_analyze_pattern_web() {
        let phonetic = PhoneticSimilarity::new();
        let pattern = phonetic.analyze_pattern("web");

        assert_eq!(pattern.length, 3);
        assert_eq!(
            pattern.vowels,
            vec![PositionedChar { ch: 'e', position: 1 }]
        );
        assert_eq!(
            pattern.consonants,
            vec![
                PositionedChar { ch: 'w', position: 0 },
                PositionedChar { ch: 'b', position: 2 },
            ]
        );

        let classes: Vec<PhonemeClass> =
            pattern.phoneme_distribution.iter().map(|p| p.class).collect();
        assert_eq!(
            classes,
            vec![PhonemeClass::Plosive, PhonemeClass::Glide, PhonemeClass::Vowel]
        );

        // Each position has at least one strong confusion candidate.
        assert_eq!(pattern.potential_confusions.len(), 3);
        assert_eq!(pattern.potential_confusions[0].candidates, vec!['v']);
        assert_eq!(pattern.potential_confusions[1].candidates, vec!['a', 'i']);
        assert_eq!(pattern.potential_confusions[2].candidates, vec!['p']);
    }

    #[test]
    fn test_pattern_serializes() {
        let phonetic = PhoneticSimilarity::new();
        let pattern = phonetic.analyze_pattern("wen");

        let json = serde_json::to_string(&pattern).unwrap();
        assert!(json.contains("phoneme_distribution"));
        assert!(json.contains("potential_confusions"));
    }
}
