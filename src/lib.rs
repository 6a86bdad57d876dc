//! Typomatch is a fuzzy matching library that resolves misspelled or
//! mistyped domain labels to the closest entry in a curated set of
//! valid identifiers.
//!
//! Three independent notions of closeness are combined into one
//! normalized score: textual edit distance (Levenshtein or
//! Jaro-Winkler), physical key proximity on a reference QWERTY layout,
//! and phonetic/articulatory similarity. Candidates are ranked,
//! thresholded, and optionally auto-resolved when the best score is
//! confident enough.
//!
//! The primary type to look into is
//! [`DomainMatcher`](./matcher/struct.DomainMatcher.html); the
//! [keyboard](./keyboard/index.html), [phonetic](./phonetic/index.html)
//! and [alignment](./align/index.html) modules may also be used
//! independently.
//!
//! ### Example
//!
//! ```
//! use typomatch::matcher::DomainMatcher;
//!
//! let mut matcher = DomainMatcher::default();
//! matcher.add_domains(["web", "api", "chat", "admin", "mail"]);
//!
//! let results = matcher.matches("wen", 0.3, 10);
//! assert_eq!(results[0].domain, "web");
//!
//! if let Some(target) = matcher.should_redirect("wen", 0.8) {
//!     assert_eq!(target, "web");
//! }
//! ```

#![deny(
    future_incompatible,
    nonstandard_style,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_qualifications
)]
#![deny(
    clippy::cast_lossless,
    clippy::doc_markdown,
    clippy::empty_enum,
    clippy::explicit_into_iter_loop,
    clippy::explicit_iter_loop,
    clippy::manual_filter_map,
    clippy::filter_map_next,
    clippy::manual_find_map,
    clippy::get_unwrap,
    clippy::if_not_else,
    clippy::invalid_upcast_comparisons,
    clippy::map_flatten,
    clippy::match_same_arms,
    clippy::mem_forget,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::map_unwrap_or,
    clippy::redundant_closure_for_method_calls,
    clippy::string_add,
    clippy::string_add_assign,
    clippy::unicode_not_nfc,
    clippy::unseparated_literal_suffix,
    clippy::used_underscore_binding,
    clippy::wildcard_dependencies
)]

#[macro_use]
extern crate lazy_static;

pub mod align;
pub mod constants;
pub mod error;
pub mod keyboard;
pub mod matcher;
pub mod normalize;
pub mod phonetic;
