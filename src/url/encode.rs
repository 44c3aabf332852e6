//! Percent-encoding helpers.
//!
//! # Design Decisions
//! - RFC 3986 unreserved characters stay literal, everything else is
//!   escaped (via the `urlencoding` crate)
//! - Path position keeps `/` intact inside a value: chunks between slashes
//!   are encoded independently and rejoined

use std::borrow::Cow;

/// Encode a key or value for query position.
pub fn query_component(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

/// Encode a scalar for path position.
///
/// A slash inside the value survives as a segment separator; `?`, `#`,
/// space, and non-ASCII bytes are escaped.
pub fn path_component(raw: &str) -> String {
    raw.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_component_escapes_reserved() {
        assert_eq!(query_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(query_component("plain-value_1.2~3"), "plain-value_1.2~3");
    }

    #[test]
    fn test_path_component_keeps_slashes() {
        assert_eq!(path_component("a/b c"), "a/b%20c");
        assert_eq!(path_component("what?#"), "what%3F%23");
    }

    #[test]
    fn test_path_component_escapes_non_ascii() {
        assert_eq!(path_component("über"), "%C3%BCber");
    }
}
