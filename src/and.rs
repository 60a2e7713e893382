use crate::parser::Parser;

/// Sequence two parsers and yield both values as a tuple.
///
/// Like [`chain`](crate::chain) this does not roll back: when the second
/// parser fails, whatever the first consumed stays consumed, and the caller
/// that needs atomic failure wraps the pair in `optional` or `choice`.
/// Chained `.and()` calls nest tuples, `((a, b), c)`; destructure in parsing
/// order.
pub fn and<A: 'static, B: 'static>(first: Parser<A>, second: Parser<B>) -> Parser<(A, B)> {
    Parser::from_fn("and", move |cursor| {
        let a = first.apply(cursor)?;
        let b = second.apply(cursor)?;
        Ok((a, b))
    })
}

impl<A: 'static> Parser<A> {
    /// Sequence with `other`, yielding `(self, other)`. See [`and`].
    pub fn and<B: 'static>(self, other: Parser<B>) -> Parser<(A, B)> {
        and(self, other)
    }
}
