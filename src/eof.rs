use crate::error::Mismatch;
use crate::parser::Parser;

/// Parser that matches only at the end of the input.
///
/// Yields the unit end marker and never advances the cursor. Sequence a
/// grammar with `eof()` to require that the whole input is consumed.
pub fn eof() -> Parser<()> {
    Parser::from_fn("eof", |cursor| {
        if cursor.at_end() {
            Ok(())
        } else {
            Err(Mismatch::Local)
        }
    })
}
