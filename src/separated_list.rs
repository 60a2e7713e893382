use crate::optional::try_apply;
use crate::parser::Parser;

/// One or more occurrences of `parser` separated by `separator`.
///
/// The first element is required, so the yielded list is never empty. After
/// it, the separator is attempted speculatively: when it mismatches the list
/// ends there, with the cursor before the separator attempt. When it matches,
/// another element must follow: a separator with no element after it is a
/// hard mismatch that propagates without rollback.
///
/// Separator values are discarded.
pub fn separated_list<T: 'static, S: 'static>(
    parser: Parser<T>,
    separator: Parser<S>,
) -> Parser<Vec<T>> {
    Parser::from_fn("separated_list", move |cursor| {
        let mut values = vec![parser.apply(cursor)?];
        while try_apply(&separator, cursor).is_some() {
            values.push(parser.apply(cursor)?);
        }
        Ok(values)
    })
}
