//! Normalization of raw user input into comparable identifiers.
//!
//! Every string entering the matching engine, whether a corpus entry or
//! a query, goes through [`normalize`] first. Two identifiers are
//! considered the same if and only if their normalized forms are
//! byte-equal.

use crate::constants::{PROTOCOL_PREFIX_REGEX, WWW_PREFIX_REGEX};

/// Normalize a raw domain-label string.
///
/// Lower-cases the input, strips a leading scheme and `www.` label,
/// drops every character outside `[a-z0-9-]` and trims leading and
/// trailing hyphens. Deterministic and idempotent.
///
/// ```
/// use typomatch::normalize::normalize;
///
/// assert_eq!(normalize("https://www.Test.com"), "testcom");
/// ```
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let without_protocol = PROTOCOL_PREFIX_REGEX.replace(&lowered, "");
    let without_www = WWW_PREFIX_REGEX.replace(&without_protocol, "");

    let filtered: String = without_www
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();

    filtered.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_protocol_and_www() {
        assert_eq!(normalize("https://www.Test.com"), "testcom");
        assert_eq!(normalize("http://example.org"), "exampleorg");
        assert_eq!(normalize("www.example"), "example");
    }

    #[test]
    fn test_normalize_lowercases_and_filters() {
        assert_eq!(normalize("  Hello-World!  "), "hello-world");
        assert_eq!(normalize("CHAT_01"), "chat01");
    }

    #[test]
    fn test_normalize_trims_hyphens() {
        assert_eq!(normalize("-web-"), "web");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["https://www.Test.com", "Hello-World", "wen", "api-v2"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_www_only_stripped_as_prefix() {
        assert_eq!(normalize("wwwweb"), "wwwweb");
        assert_eq!(normalize("web.www"), "webwww");
    }
}
