use crate::optional::try_apply;
use crate::parser::Parser;

/// Repetition with a required minimum.
///
/// The first `min_occurrences` invocations are unconditional: a failure among
/// them propagates with no rollback, exactly like a failure inside `chain`.
/// After that the parser is applied speculatively, appending each success and
/// stopping at the first mismatch with the cursor reset to just before that
/// failed attempt.
pub fn repeat<T: 'static>(parser: Parser<T>, min_occurrences: usize) -> Parser<Vec<T>> {
    Parser::from_fn(format!("many({min_occurrences})"), move |cursor| {
        let mut values = Vec::new();
        for _ in 0..min_occurrences {
            values.push(parser.apply(cursor)?);
        }
        while let Some(value) = try_apply(&parser, cursor) {
            values.push(value);
        }
        Ok(values)
    })
}

/// Zero or more occurrences. Never fails.
pub fn many<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    repeat(parser, 0)
}
