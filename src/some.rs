use crate::many::repeat;
use crate::parser::Parser;

/// One or more occurrences: [`repeat`] with a minimum of one.
pub fn some<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    repeat(parser, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::number::integer;

    #[test]
    fn test_single_match() {
        assert_eq!(some(integer()).parse("7").unwrap(), vec![7]);
    }

    #[test]
    fn test_multiple_matches() {
        assert_eq!(some(integer()).parse("7 8 9").unwrap(), vec![7, 8, 9]);
    }

    #[test]
    fn test_zero_matches_fails() {
        let error = some(literal("a")).parse("xyz").unwrap_err();
        assert_eq!(error.name, "literal(a)");
        assert_eq!(error.offset, 0);
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(some(integer()).parse("").is_err());
    }
}
