//! Byte cursor over a single command line.
//!
//! The cursor reads `0x00` at and past the end of the line, so scan loops
//! terminate without explicit bounds checks in the common case (command
//! lines never contain interior nulls — the preprocessor builds them from
//! `&str` input). It is [`Copy`], enabling cheap snapshots for lookahead.

/// Byte cursor over a command line.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    /// The byte at the current position, or `0x00` at end of line.
    #[inline]
    pub fn current(&self) -> u8 {
        self.src.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// The byte one position ahead, or `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.src.as_bytes().get(self.pos + 1).copied().unwrap_or(0)
    }

    /// Advance by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Whether the cursor has consumed the whole line.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Extract a substring of the line.
    ///
    /// `start..end` must fall on character boundaries; token boundaries
    /// always do, since the scanner only splits at ASCII delimiters.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end && end <= self.src.len());
        &self.src[start..end]
    }

    /// Extract the substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos.min(self.src.len()))
    }

    /// The unconsumed remainder of the line.
    pub fn remainder(&self) -> &'a str {
        &self.src[self.pos.min(self.src.len())..]
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    ///
    /// Short runs dominate between tokens, so a simple byte loop wins over
    /// anything fancier.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        while matches!(self.current(), b' ' | b'\t') {
            self.pos += 1;
        }
    }

    /// Advance past whitespace *and* line endings.
    ///
    /// The skip rule for the start of a line; between tokens, line endings
    /// terminate instead (see [`at_line_end`](Self::at_line_end)).
    #[inline]
    pub fn eat_blanks(&mut self) {
        while matches!(self.current(), b' ' | b'\t' | b'\r' | b'\n') {
            self.pos += 1;
        }
    }

    /// Whether the cursor sits at end of line: EOF, `\r`, or `\n`.
    #[inline]
    pub fn at_line_end(&self) -> bool {
        matches!(self.current(), b'\r' | b'\n') || self.is_eof()
    }

    /// Advance past non-whitespace, non-line-ending bytes.
    ///
    /// This is the scan rule for command names and bare tokens.
    #[inline]
    pub fn eat_token(&mut self) {
        loop {
            match self.current() {
                0 | b' ' | b'\t' | b'\r' | b'\n' => break,
                _ => self.pos += 1,
            }
        }
    }

    /// Advance to the next occurrence of `byte`, or to end of line.
    ///
    /// Returns `true` if the byte was found (cursor on it), `false` if the
    /// cursor ran to end of line. SIMD-accelerated via memchr; quoted
    /// strings can span many bytes.
    pub fn skip_to(&mut self, byte: u8) -> bool {
        let remaining = &self.src.as_bytes()[self.pos.min(self.src.len())..];
        match memchr::memchr(byte, remaining) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.src.len();
                false
            }
        }
    }
}
