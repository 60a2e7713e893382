use crate::error::Mismatch;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact piece of text.
///
/// Succeeds when the input at the cursor starts with `text`, advancing past
/// it and yielding the text; otherwise signals mismatch without advancing.
/// The empty literal always matches.
pub fn literal(text: impl Into<Cow<'static, str>>) -> Parser<Cow<'static, str>> {
    let text = text.into();
    let name = format!("literal({text})");
    Parser::from_fn(name, move |cursor| {
        if cursor.peek(text.len()) == Some(text.as_ref()) {
            cursor.advance(text.len());
            Ok(text.clone())
        } else {
            Err(Mismatch::Local)
        }
    })
}
