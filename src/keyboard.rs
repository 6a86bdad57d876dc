//! Physical key proximity on a reference QWERTY layout.
//!
//! Typos frequently substitute a character with one of its physical
//! neighbours on the keyboard. This module scores that effect: the
//! closer two keys sit on the grid, the more similar they are
//! considered for matching purposes.

use std::collections::HashMap;

use crate::constants::{KEYBOARD_KEYS, MAX_KEY_DISTANCE, QWERTY_KEY_COORDS};

/// Key-distance model over the reference QWERTY layout.
///
/// Pairwise Euclidean distances over the full layout are precomputed at
/// construction and reused for every lookup.
#[derive(Clone, Debug)]
pub struct KeyboardLayout {
    distances: HashMap<(char, char), f64>,
}

impl KeyboardLayout {
    pub fn new() -> Self {
        let mut distances = HashMap::new();

        for (i, &a) in KEYBOARD_KEYS.iter().enumerate() {
            for &b in &KEYBOARD_KEYS[i..] {
                let distance = euclidean_distance(a, b);
                distances.insert((a, b), distance);
                distances.insert((b, a), distance);
            }
        }

        Self { distances }
    }

    /// Physical distance between two keys in grid units.
    ///
    /// Lookups are case-folded. The same character is always at
    /// distance `0.0`; characters outside the layout are at the
    /// sentinel distance of `10.0`.
    pub fn distance(&self, a: char, b: char) -> f64 {
        let a = a.to_ascii_lowercase();
        let b = b.to_ascii_lowercase();

        if a == b {
            return 0.0;
        }

        self.distances
            .get(&(a, b))
            .copied()
            .unwrap_or(MAX_KEY_DISTANCE)
    }

    /// Key similarity in `[0, 1]`, derived as `1 - distance / 10`.
    pub fn similarity(&self, a: char, b: char) -> f64 {
        (1.0 - self.distance(a, b) / MAX_KEY_DISTANCE).max(0.0)
    }

    /// All keys within `max_distance` of `c`, ascending by distance.
    /// Ties are broken by the layout's row-major key order.
    pub fn adjacent(&self, c: char, max_distance: f64) -> Vec<char> {
        let c = c.to_ascii_lowercase();

        let mut neighbours: Vec<(char, f64)> = KEYBOARD_KEYS
            .iter()
            .copied()
            .filter(|&other| other != c)
            .map(|other| (other, self.distance(c, other)))
            .filter(|&(_, distance)| distance <= max_distance)
            .collect();

        neighbours.sort_by(|x, y| crate::align::score_ordering(x.1, y.1));
        neighbours.into_iter().map(|(key, _)| key).collect()
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::new()
    }
}

fn euclidean_distance(a: char, b: char) -> f64 {
    if a == b {
        return 0.0;
    }

    match (QWERTY_KEY_COORDS.get(&a), QWERTY_KEY_COORDS.get(&b)) {
        (Some(&(row1, col1)), Some(&(row2, col2))) => {
            let row_diff = f64::from(row1) - f64::from(row2);
            let col_diff = f64::from(col1) - f64::from(col2);
            row_diff.hypot(col_diff)
        }
        _ => MAX_KEY_DISTANCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_distance_is_zero() {
        let layout = KeyboardLayout::new();

        assert_eq!(layout.distance('a', 'a'), 0.0);
        assert_eq!(layout.distance('Q', 'q'), 0.0);
        assert_eq!(layout.distance('!', '!'), 0.0);
    }

    #[test]
    fn test_neighbouring_keys() {
        let layout = KeyboardLayout::new();

        assert_eq!(layout.distance('q', 'w'), 1.0);
        assert_eq!(layout.distance('n', 'b'), 1.0);
        assert!((layout.distance('q', 'e') - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_characters_use_sentinel() {
        let layout = KeyboardLayout::new();

        assert_eq!(layout.distance('a', '!'), MAX_KEY_DISTANCE);
        assert_eq!(layout.similarity('a', '!'), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let layout = KeyboardLayout::new();

        for (a, b) in [('q', 'p'), ('1', 'm'), ('z', '0')] {
            assert_eq!(layout.distance(a, b), layout.distance(b, a));
            assert_eq!(layout.similarity(a, b), layout.similarity(b, a));
        }
    }

    #[test]
    fn test_similarity_of_neighbours() {
        let layout = KeyboardLayout::new();

        assert!((layout.similarity('q', 'w') - 0.9).abs() < 1e-9);
        assert_eq!(layout.similarity('g', 'g'), 1.0);
    }

    #[test]
    fn test_adjacent_order_is_deterministic() {
        let layout = KeyboardLayout::new();

        // Unit-distance neighbours of 's' in row-major tie-break order.
        assert_eq!(layout.adjacent('s', 1.0), vec!['w', 'a', 'd', 'x']);
    }

    #[test]
    fn test_adjacent_respects_max_distance() {
        let layout = KeyboardLayout::new();

        let near = layout.adjacent('s', 1.0);
        let wider = layout.adjacent('s', 1.5);

        assert!(wider.len() > near.len());
        assert!(wider.starts_with(&near));
        assert!(!layout.adjacent('s', 1.0).contains(&'p'));
    }
}
