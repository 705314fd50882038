//! Forward-only byte cursor over a borrowed input buffer.
//!
//! The cursor never copies the input. It is `Copy`, so callers probe ahead
//! with a copy and commit by assigning the copy back.

/// Returns true for whitespace that does not end a line.
///
/// `\r` is included so CRLF line endings leave only trailing whitespace
/// behind, which is stripped like any other.
#[inline]
pub const fn is_horizontal_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0B | 0x0C | b'\r')
}

/// A cursor for byte-by-byte scanning.
///
/// # Example
/// ```
/// use rstscan::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"  Hello\nWorld");
///
/// assert_eq!(cursor.skip_whitespace(), 2);
/// assert_eq!(cursor.peek(), Some(b'H'));
/// assert_eq!(cursor.line_end(), 7);
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `input`.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Peek at byte n positions ahead.
    #[inline]
    pub fn peek_ahead(&self, n: usize) -> Option<u8> {
        self.input.get(self.pos + n).copied()
    }

    /// Advance by n bytes, stopping at end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Advance by 1 byte.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(!self.is_eof());
        self.advance(1);
    }

    /// Check if current position matches a byte.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Consume a specific byte if present.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.at(b) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Check whether the unconsumed input begins with `bytes`.
    #[inline]
    pub fn starts_with(&self, bytes: &[u8]) -> bool {
        self.remaining_slice().starts_with(bytes)
    }

    /// Skip while predicate is true, returning the number of bytes skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.bump();
        }
        self.pos - start
    }

    /// Skip horizontal whitespace. Never crosses a line terminator.
    #[inline]
    pub fn skip_whitespace(&mut self) -> usize {
        self.skip_while(is_horizontal_space)
    }

    /// Offset of the next `\n`, or the end of input if there is none.
    #[inline]
    pub fn line_end(&self) -> usize {
        match memchr::memchr(b'\n', self.remaining_slice()) {
            Some(pos) => self.pos + pos,
            None => self.input.len(),
        }
    }

    /// Get the remaining bytes as a slice.
    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}
