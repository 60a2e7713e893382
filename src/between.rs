use crate::parser::Parser;

/// Content between opening and closing delimiters.
///
/// Sequences `open`, `content`, `close` and yields only the content value.
/// Like the other fixed sequences this does not roll back on failure.
pub fn between<O: 'static, T: 'static, C: 'static>(
    open: Parser<O>,
    content: Parser<T>,
    close: Parser<C>,
) -> Parser<T> {
    Parser::from_fn("between", move |cursor| {
        open.apply(cursor)?;
        let value = content.apply(cursor)?;
        close.apply(cursor)?;
        Ok(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::number::float;

    #[test]
    fn test_delimiters_discarded() {
        let parser = between(literal("("), float(), literal(")"));
        assert_eq!(parser.parse("(1.5)").unwrap(), 1.5);
    }

    #[test]
    fn test_whitespace_inside_delimiters() {
        let parser = between(literal("["), float(), literal("]"));
        assert_eq!(parser.parse("[ 2.5 ]").unwrap(), 2.5);
    }

    #[test]
    fn test_missing_close_fails() {
        let parser = between(literal("("), float(), literal(")"));
        let error = parser.parse("(1.5").unwrap_err();
        assert_eq!(error.name, "literal())");
    }

    #[test]
    fn test_missing_content_fails() {
        let parser = between(literal("("), float(), literal(")"));
        assert!(parser.parse("()").is_err());
    }
}
