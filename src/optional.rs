use crate::cursor::Cursor;
use crate::parser::Parser;

/// Speculatively run a parser: on mismatch, reset the cursor to where it was
/// and report `None` instead of failing.
///
/// This is the one rollback primitive in the crate; `choice`, the repetition
/// tail and `separated_list`'s separator check all recover through the same
/// record-apply-reset sequence.
pub(crate) fn try_apply<T: 'static>(parser: &Parser<T>, cursor: &mut Cursor<'_>) -> Option<T> {
    let mark = cursor.offset();
    match parser.apply(cursor) {
        Ok(value) => Some(value),
        Err(_) => {
            cursor.reset(mark);
            None
        }
    }
}

/// Parser that turns a mismatch into an absent value.
///
/// On success yields `Some(value)`; on mismatch resets the cursor to the
/// entry offset and yields `None`. It never fails itself.
pub fn optional<T: 'static>(parser: Parser<T>) -> Parser<Option<T>> {
    Parser::from_fn("optional", move |cursor| Ok(try_apply(&parser, cursor)))
}
