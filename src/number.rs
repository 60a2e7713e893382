use crate::error::Mismatch;
use crate::parser::Parser;
use crate::pattern::{anchored, regex_match};
use once_cell::sync::Lazy;
use regex::Regex;

// Grammars tend to rebuild numeric parsers freely, so the patterns are
// compiled once for the whole process.
static INTEGER: Lazy<Regex> = Lazy::new(|| anchored(r"[+-]?\d+"));
static FLOAT: Lazy<Regex> = Lazy::new(|| anchored(r"[+-]?\d+(\.\d+)?"));

/// Parser that matches a signed decimal integer and yields it as `i64`.
///
/// A lexically valid match that overflows `i64` is treated as a mismatch.
pub fn integer() -> Parser<i64> {
    Parser::from_fn("integer", |cursor| {
        let text = regex_match(&INTEGER, cursor)?;
        text.parse().map_err(|_| Mismatch::Local)
    })
}

/// Parser that matches a decimal number with an optional fraction and yields
/// it as `f64`. Integer-looking input parses as a whole-valued float.
pub fn float() -> Parser<f64> {
    Parser::from_fn("float", |cursor| {
        let text = regex_match(&FLOAT, cursor)?;
        text.parse().map_err(|_| Mismatch::Local)
    })
}
