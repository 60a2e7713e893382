/// Scan position over an immutable input buffer.
///
/// A cursor borrows the full input for the lifetime of one parse and tracks a
/// single byte offset into it. Primitives advance the offset on a successful
/// match; backtracking combinators record the offset up front and [`reset`]
/// to it when a speculative match fails.
///
/// Offsets are byte offsets into the UTF-8 input. Every offset handed to
/// [`advance`] or [`reset`] must come from the length of a matched prefix or
/// a previous [`offset`] call, so the cursor always sits on a character
/// boundary.
///
/// [`advance`]: Cursor::advance
/// [`reset`]: Cursor::reset
/// [`offset`]: Cursor::offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor<'src> {
    src: &'src str,
    offset: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(src: &'src str) -> Self {
        Cursor { src, offset: 0 }
    }

    /// Current byte offset into the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The full input buffer, independent of the current offset.
    pub fn source(&self) -> &'src str {
        self.src
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'src str {
        &self.src[self.offset..]
    }

    /// The next `len` bytes without advancing, or `None` when fewer than
    /// `len` bytes remain or the slice would split a character.
    pub fn peek(&self, len: usize) -> Option<&'src str> {
        self.src.get(self.offset..self.offset + len)
    }

    /// Advance the offset by `n` bytes.
    ///
    /// Panics when this would move past the end of the input; primitives
    /// self-limit via match lengths, so reaching that panic is a bug in a
    /// match function, not an input error.
    pub fn advance(&mut self, n: usize) {
        assert!(
            self.offset + n <= self.src.len(),
            "cursor advanced past end of input"
        );
        self.offset += n;
    }

    /// Backtrack to an offset previously obtained from [`Cursor::offset`].
    pub fn reset(&mut self, offset: usize) {
        debug_assert!(offset <= self.offset, "reset may only move backwards");
        self.offset = offset;
    }

    pub fn at_end(&self) -> bool {
        self.offset == self.src.len()
    }

    /// Consume a maximal run of whitespace. Infallible and never rolled back.
    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.offset += rest.len() - rest.trim_start().len();
    }
}
