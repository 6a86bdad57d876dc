use fancy_regex::Regex;
use phf::phf_map;

lazy_static! {

    /// Scheme prefix (`http://`/`https://`) stripped from raw user
    /// input during normalization.
    pub static ref PROTOCOL_PREFIX_REGEX: Regex = Regex::new(r"^https?://").unwrap();

    /// Leading `www.` label stripped from raw user input during
    /// normalization.
    pub static ref WWW_PREFIX_REGEX: Regex = Regex::new(r"^www\.").unwrap();
}

/// Static list of lowercase ASCII letters followed by digits. This is
/// the full alphabet the phonetic similarity table is defined over, and
/// its order is the tie-break order for confusable listings.
pub static ALPHANUMERIC: [char; 36] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Static list of vowels.
pub static VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Every key on the reference QWERTY layout in row-major order. This is
/// the tie-break order for adjacent-key listings.
pub static KEYBOARD_KEYS: [char; 36] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', 'q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o',
    'p', 'a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'z', 'x', 'c', 'v', 'b', 'n', 'm',
];

/// (row, column) grid coordinates for every key on the reference
/// QWERTY layout. Distances between keys are Euclidean distances in
/// this coordinate space.
pub static QWERTY_KEY_COORDS: phf::Map<char, (u8, u8)> = phf_map! {
    '1' => (0, 0),
    '2' => (0, 1),
    '3' => (0, 2),
    '4' => (0, 3),
    '5' => (0, 4),
    '6' => (0, 5),
    '7' => (0, 6),
    '8' => (0, 7),
    '9' => (0, 8),
    '0' => (0, 9),
    'q' => (1, 0),
    'w' => (1, 1),
    'e' => (1, 2),
    'r' => (1, 3),
    't' => (1, 4),
    'y' => (1, 5),
    'u' => (1, 6),
    'i' => (1, 7),
    'o' => (1, 8),
    'p' => (1, 9),
    'a' => (2, 0),
    's' => (2, 1),
    'd' => (2, 2),
    'f' => (2, 3),
    'g' => (2, 4),
    'h' => (2, 5),
    'j' => (2, 6),
    'k' => (2, 7),
    'l' => (2, 8),
    'z' => (3, 0),
    'x' => (3, 1),
    'c' => (3, 2),
    'v' => (3, 3),
    'b' => (3, 4),
    'n' => (3, 5),
    'm' => (3, 6),
};

/// Sentinel distance for characters outside the keyboard layout. Also
/// the normalization constant for key similarity.
pub const MAX_KEY_DISTANCE: f64 = 10.0;

pub static PLOSIVES: [char; 6] = ['p', 'b', 't', 'd', 'k', 'g'];
pub static FRICATIVES: [char; 5] = ['f', 'v', 's', 'z', 'h'];
pub static NASALS: [char; 2] = ['m', 'n'];
pub static LIQUIDS: [char; 2] = ['l', 'r'];
pub static GLIDES: [char; 2] = ['w', 'y'];

/// Curated letter pairs that are commonly confused for one another
/// when a domain label is typed from memory of how it sounds.
pub static CONFUSABLE_GROUPS: [[char; 2]; 14] = [
    ['b', 'p'],
    ['d', 't'],
    ['g', 'k'],
    ['v', 'w'],
    ['f', 'v'],
    ['s', 'z'],
    ['c', 's'],
    ['j', 'g'],
    ['l', 'r'],
    ['m', 'n'],
    ['a', 'e'],
    ['i', 'e'],
    ['o', 'u'],
    ['u', 'v'],
];

/// Similarity assigned to characters in the same confusable group.
pub const CONFUSABLE_SIMILARITY: f64 = 0.8;

/// Similarity floor for characters sharing a phoneme class.
pub const PHONEME_CLASS_SIMILARITY: f64 = 0.4;
