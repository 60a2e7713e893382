use crate::error::Mismatch;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches text delimited by a quote sequence.
///
/// Matches the opening quote, scans forward one character at a time until the
/// quote sequence reappears not immediately preceded by a backslash, and
/// matches that closing quote. Yields the raw contents between the quotes:
/// the scan respects `\"`-style escapes when looking for the boundary, but no
/// unescaping of the contents is performed.
///
/// Mismatches when the opening quote is absent, and also when no closing
/// quote exists before the end of the input (the scan is bounds-checked, an
/// unterminated quote cannot run off the buffer).
pub fn quoted_string(quote: impl Into<Cow<'static, str>>) -> Parser<String> {
    let quote = quote.into();
    let name = format!("quoted_string({quote})");
    Parser::from_fn(name, move |cursor| {
        let Some(contents) = cursor.rest().strip_prefix(quote.as_ref()) else {
            return Err(Mismatch::Local);
        };
        let bytes = contents.as_bytes();
        let mut idx = 0;
        loop {
            if idx + quote.len() > contents.len() {
                // ran out of input without an unescaped closing quote
                return Err(Mismatch::Local);
            }
            if contents[idx..].starts_with(quote.as_ref())
                && (idx == 0 || bytes[idx - 1] != b'\\')
            {
                break;
            }
            match contents[idx..].chars().next() {
                Some(c) => idx += c.len_utf8(),
                None => return Err(Mismatch::Local),
            }
        }
        cursor.advance(quote.len() + idx + quote.len());
        Ok(contents[..idx].to_owned())
    })
}

/// `'...'`
pub fn single_quoted_string() -> Parser<String> {
    quoted_string("'").name("single_quoted_string")
}

/// `"..."`
pub fn double_quoted_string() -> Parser<String> {
    quoted_string("\"").name("double_quoted_string")
}
