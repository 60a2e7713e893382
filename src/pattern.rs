use crate::cursor::Cursor;
use crate::error::Mismatch;
use crate::parser::{MatchResult, Parser};
use regex::Regex;

/// Compile a pattern anchored at the start of the haystack.
///
/// Panics on an invalid pattern: patterns are written at grammar-assembly
/// time, so a bad one is a programmer error, not an input error.
pub(crate) fn anchored(pat: &str) -> Regex {
    Regex::new(&format!(r"\A(?:{pat})"))
        .unwrap_or_else(|error| panic!("invalid pattern {pat:?}: {error}"))
}

/// Match an anchored regex at the cursor, advancing past the matched span.
pub(crate) fn regex_match(regex: &Regex, cursor: &mut Cursor<'_>) -> MatchResult<String> {
    match regex.find(cursor.rest()) {
        Some(found) => {
            debug_assert_eq!(found.start(), 0, "anchored pattern matched mid-input");
            cursor.advance(found.end());
            Ok(found.as_str().to_owned())
        }
        None => Err(Mismatch::Local),
    }
}

/// Parser that matches a regular expression at the cursor position.
///
/// The pattern is compiled once, at assembly time, and is anchored: it either
/// matches a prefix of the remaining input or signals mismatch. It never
/// scans forward, which would silently skip input. Yields the matched text.
pub fn pattern(pat: &str) -> Parser<String> {
    let regex = anchored(pat);
    Parser::from_fn("pattern", move |cursor| regex_match(&regex, cursor))
}

/// One or more ASCII letters.
pub fn alpha() -> Parser<String> {
    pattern("[a-zA-Z]+").name("alpha")
}

/// One or more word characters.
pub fn word() -> Parser<String> {
    pattern(r"\w+").name("word")
}

/// A possibly-empty run of whitespace.
pub fn space() -> Parser<String> {
    pattern(r"\s*").name("space")
}
