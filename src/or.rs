use crate::error::Mismatch;
use crate::parser::Parser;

/// Ordered choice: try each parser from the same position, first success wins.
///
/// Before each attempt the entry offset is recorded; a failed branch resets
/// the cursor to it before the next branch runs. When every branch fails the
/// cursor is back at the entry offset and the choice itself mismatches.
/// There is no longest-match resolution: branch order decides.
pub fn choice<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<T> {
    let name = format!(
        "or({})",
        parsers
            .iter()
            .map(Parser::label)
            .collect::<Vec<_>>()
            .join(", ")
    );
    Parser::from_fn(name, move |cursor| {
        let entry = cursor.offset();
        for parser in &parsers {
            match parser.apply(cursor) {
                Ok(value) => return Ok(value),
                Err(_) => cursor.reset(entry),
            }
        }
        Err(Mismatch::Local)
    })
}

impl<T: 'static> Parser<T> {
    /// `self`, or `other` if `self` mismatches. See [`choice`].
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        choice(vec![self, other])
    }
}
