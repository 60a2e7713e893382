use crate::cursor::Cursor;
use crate::error::{Mismatch, ParseError};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Result of running a match function against a cursor.
pub type MatchResult<T> = Result<T, Mismatch>;

type MatchFn<T> = dyn for<'src> Fn(&mut Cursor<'src>) -> MatchResult<T> + Send + Sync;

/// A named, composable parser.
///
/// A parser wraps a match function from cursor to value-or-mismatch plus the
/// behavior shared by every parser in a grammar: a name for error reporting,
/// automatic trailing-whitespace skipping (on by default), and an optional
/// trailing skip parser whose value is discarded.
///
/// Parsers are assembled once, before any input is seen, and are immutable
/// thereafter: the builder methods ([`name`], [`map`], [`auto_skip_space`],
/// [`skip`]) consume `self` and return a new configured value. A built parser
/// is `Send + Sync` and cheap to clone, so it may be invoked repeatedly and
/// concurrently against independent cursors.
///
/// [`name`]: Parser::name
/// [`map`]: Parser::map
/// [`auto_skip_space`]: Parser::auto_skip_space
/// [`skip`]: Parser::skip
pub struct Parser<T> {
    name: Cow<'static, str>,
    matcher: Arc<MatchFn<T>>,
    skip_space: bool,
    trailing: Option<Box<Parser<()>>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            name: self.name.clone(),
            matcher: Arc::clone(&self.matcher),
            skip_space: self.skip_space,
            trailing: self.trailing.clone(),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("name", &self.name)
            .field("skip_space", &self.skip_space)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Parser<T> {
    /// Wrap a raw match function into a parser.
    ///
    /// The function receives the cursor and either advances it and returns a
    /// value, or returns a [`Mismatch`]. On `Mismatch::Local` the cursor
    /// state is whatever the function left behind; recovery is the calling
    /// combinator's job, not the match function's.
    pub fn from_fn<F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: for<'src> Fn(&mut Cursor<'src>) -> MatchResult<T> + Send + Sync + 'static,
    {
        Parser {
            name: name.into(),
            matcher: Arc::new(f),
            skip_space: true,
            trailing: None,
        }
    }

    /// The parser's name as used in error reports.
    pub fn label(&self) -> &str {
        &self.name
    }

    /// Rename the parser.
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Enable or disable trailing-whitespace skipping (enabled by default).
    pub fn auto_skip_space(mut self, skip: bool) -> Self {
        self.skip_space = skip;
        self
    }

    /// Attach a trailing parser that runs after a successful match; its value
    /// is discarded, its mismatch propagates.
    pub fn skip<U: 'static>(mut self, parser: Parser<U>) -> Self {
        self.trailing = Some(Box::new(parser.map(|_| ())));
        self
    }

    /// Transform the matched value. The transform applies to the raw match
    /// result, before whitespace skipping and the trailing skip parser.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + Send + Sync + 'static) -> Parser<U> {
        let matcher = self.matcher;
        Parser {
            name: self.name,
            matcher: Arc::new(move |cursor: &mut Cursor<'_>| matcher(cursor).map(&f)),
            skip_space: self.skip_space,
            trailing: self.trailing,
        }
    }

    /// Run this parser against a cursor.
    ///
    /// On success the cursor sits after the match (and after any skipped
    /// whitespace and trailing skip parser). On mismatch the cursor position
    /// is unspecified; a combinator that wants to continue must reset it to
    /// an offset it recorded before the attempt.
    pub fn apply(&self, cursor: &mut Cursor<'_>) -> MatchResult<T> {
        let value = match (self.matcher)(cursor) {
            Ok(value) => value,
            Err(Mismatch::Local) => {
                return Err(Mismatch::Inner(ParseError::new(
                    self.name.as_ref(),
                    cursor.offset(),
                )));
            }
            Err(inner) => return Err(inner),
        };
        if self.skip_space {
            cursor.skip_whitespace();
        }
        if let Some(trailing) = &self.trailing {
            trailing.apply(cursor)?;
        }
        Ok(value)
    }

    /// Parse an input string from the start.
    ///
    /// The input does not have to be consumed entirely; sequence with
    /// [`eof`](crate::eof) to require that.
    pub fn parse(&self, input: &str) -> Result<T, ParseError> {
        let mut cursor = Cursor::new(input);
        match self.apply(&mut cursor) {
            Ok(value) => Ok(value),
            Err(Mismatch::Inner(error)) => Err(error),
            Err(Mismatch::Local) => Err(ParseError::new(self.name.as_ref(), cursor.offset())),
        }
    }
}
