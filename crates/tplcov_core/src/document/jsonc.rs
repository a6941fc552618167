//! Comment stripping for JSON-with-comments catalogs.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

// String literals are matched first so comment markers inside them survive.
static JSONC_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(?:[^"\\]|\\.)*"|//[^\n]*|/\*[\s\S]*?\*/"#).expect("valid jsonc token regex")
});

/// Removes `//` and `/* */` comments outside string literals.
///
/// Block comments are replaced by the newlines they contained, so parser
/// line numbers still point at the input text.
pub fn strip_comments(source: &str) -> Cow<'_, str> {
    JSONC_TOKEN_RE.replace_all(source, |caps: &Captures<'_>| {
        let token = &caps[0];
        if token.starts_with('"') {
            token.to_string()
        } else {
            token.chars().filter(|ch| *ch == '\n').collect()
        }
    })
}
