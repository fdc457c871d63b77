//! Byte cursor over pattern text.
//!
//! The cursor advances through the input byte-by-byte. Reading past the end
//! yields `0x00`, so lookahead never needs an explicit bounds check at the
//! call site. Pattern text is short; the only bulk scan is the body of a
//! quoted string, which goes through `memchr`.

/// Cursor over the bytes of a pattern string.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Cursor {
            buf: source.as_bytes(),
            pos: 0,
        }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Whether every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Byte at the cursor, or `0x00` past the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte after the cursor, or `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.buf.get(index).copied().unwrap_or(0)
    }

    /// Advance by one byte (no-op at EOF).
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Advance by `n` bytes, clamped to the end of input.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.buf.len());
    }

    /// Advance past a whole UTF-8 character.
    ///
    /// The width is taken from the leading byte; the input is a `&str`, so
    /// the continuation bytes are guaranteed to be there.
    pub fn advance_char(&mut self) {
        let width = match self.current() {
            0xF0..=0xFF => 4,
            0xE0..=0xEF => 3,
            0xC0..=0xDF => 2,
            _ => 1,
        };
        self.advance_n(width);
    }

    /// Advance while `pred` holds for the current byte.
    pub fn eat_while(&mut self, mut pred: impl FnMut(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Skip the body of a quoted string whose opening `quote` was already
    /// consumed.
    ///
    /// Backslash escapes the next byte. Returns `true` and leaves the cursor
    /// after the closing quote if one was found; otherwise moves to EOF and
    /// returns `false`.
    pub fn skip_string_body(&mut self, quote: u8) -> bool {
        loop {
            let rest = &self.buf[self.pos..];
            match memchr::memchr2(quote, b'\\', rest) {
                Some(offset) if rest[offset] == b'\\' => {
                    // Skip the backslash and whatever it escapes.
                    self.advance_n(offset + 1);
                    self.advance_char();
                }
                Some(offset) => {
                    self.advance_n(offset + 1);
                    return true;
                }
                None => {
                    self.pos = self.buf.len();
                    return false;
                }
            }
        }
    }
}
