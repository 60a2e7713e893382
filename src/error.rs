use thiserror::Error;

/// Routine did-not-match signal used for backtracking.
///
/// A mismatch is an expected outcome, not an exceptional one: `choice`,
/// `optional` and the repetition combinators recover from it by resetting the
/// cursor, so it travels as an ordinary `Err` value rather than a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// The match function itself gave up. Carries no payload; the owning
    /// [`Parser`](crate::Parser) attributes its name and the cursor offset
    /// when converting this into a [`ParseError`].
    Local,
    /// An already-attributed mismatch from an inner parser, propagating
    /// through combinators that do not backtrack (`chain`, `and`, the
    /// required positions of `repeat` and `separated_list`).
    Inner(ParseError),
}

/// A mismatch that no enclosing combinator recovered from.
///
/// Carries the name of the parser that gave up and the byte offset the
/// cursor had reached at that point. Returned by
/// [`Parser::parse`](crate::Parser::parse) when the top-level parse fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("mismatch {name}, at offset {offset}")]
pub struct ParseError {
    pub name: String,
    pub offset: usize,
}

impl ParseError {
    pub fn new(name: impl Into<String>, offset: usize) -> Self {
        ParseError {
            name: name.into(),
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = ParseError::new("literal(true)", 7);
        assert_eq!(error.to_string(), "mismatch literal(true), at offset 7");
    }

    #[test]
    fn test_mismatch_variants_compare() {
        assert_eq!(Mismatch::Local, Mismatch::Local);
        assert_ne!(
            Mismatch::Local,
            Mismatch::Inner(ParseError::new("eof", 0))
        );
    }
}
