//! Scan position over an immutable input line.
//!
//! The cursor tracks three things: the byte offset (for slicing), the length
//! of the character about to be consumed, and the 1-based column (for
//! diagnostics). Columns count characters, so a multi-byte character moves
//! the offset by 2-4 but the column by exactly 1.
//!
//! All reads are bounds-checked against the line; nothing here can read past
//! its end.

use crate::unicode::UnicodeTable;
use crate::utf8;

/// Cursor over one line of input bytes.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for backtracking.
///
/// # Invariants
///
/// - `offset <= len`
/// - `column == 1 + number of consume() calls`
/// - `pending_char_len` is 1 after every consume, until a decode attempt
///   overrides it.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The input line.
    buf: &'a [u8],
    /// Length of the input line, saturated to `u32::MAX`.
    len: u32,
    /// Current read position (byte index into `buf`).
    offset: u32,
    /// Byte length of the character the next `consume()` steps over.
    pending_char_len: u32,
    /// 1-based character column of `offset`.
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `buf` (offset 0, column 1).
    ///
    /// Lines longer than `u32::MAX` bytes are scanned up to `u32::MAX`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            len: u32::try_from(buf.len()).unwrap_or(u32::MAX),
            offset: 0,
            pending_char_len: 1,
            column: 1,
        }
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.offset >= self.len
    }

    /// Returns the byte `n` positions ahead of the current one, or `None`
    /// past the end of the line.
    #[inline]
    pub fn peek(&self, n: u32) -> Option<u8> {
        self.offset
            .checked_add(n)
            .filter(|&pos| pos < self.len)
            .map(|pos| self.buf[pos as usize])
    }

    /// Returns the byte at the current position.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.peek(0)
    }

    /// Current byte offset in the line.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Current 1-based column.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte length the next [`consume()`](Self::consume) will step over.
    #[inline]
    pub fn pending_char_len(&self) -> u32 {
        self.pending_char_len
    }

    /// Override the pending character length.
    ///
    /// Used to discard a length left behind by a failed decode.
    #[inline]
    pub(crate) fn set_pending_char_len(&mut self, len: u32) {
        self.pending_char_len = len;
    }

    /// The unread remainder of the line.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.offset as usize..self.len as usize]
    }

    /// Bytes of the line in `start..end`.
    ///
    /// # Contract
    ///
    /// `start <= end <= len`. Offsets produced by this cursor satisfy it.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(end <= self.len, "slice end {end} exceeds line length {}", self.len);
        &self.buf[start as usize..end as usize]
    }

    /// Bytes of the line from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.offset)
    }

    /// Step over the pending character: the offset moves by
    /// `pending_char_len`, the column by 1.
    ///
    /// # Contract
    ///
    /// At least `pending_char_len` bytes must remain.
    #[inline]
    pub fn consume(&mut self) {
        debug_assert!(
            self.offset + self.pending_char_len <= self.len,
            "consume of {} bytes at {} overruns line of {} bytes",
            self.pending_char_len,
            self.offset,
            self.len
        );
        self.offset += self.pending_char_len;
        self.column += 1;
        self.pending_char_len = 1;
    }

    /// Consume one ASCII digit (`0-9`). No state change on mismatch.
    #[inline]
    pub fn try_consume_ascii_digit(&mut self) -> bool {
        self.try_consume_byte(|b| b.is_ascii_digit())
    }

    /// Consume one ASCII letter or `_`. No state change on mismatch.
    #[inline]
    pub fn try_consume_ascii_alpha_or_underscore(&mut self) -> bool {
        self.try_consume_byte(|b| b.is_ascii_alphabetic() || b == b'_')
    }

    #[inline]
    fn try_consume_byte(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        match self.current() {
            Some(b) if pred(b) => {
                self.pending_char_len = 1;
                self.consume();
                true
            }
            _ => false,
        }
    }

    /// Consume one non-ASCII character whose codepoint is in `table`.
    ///
    /// On success the pending length is the decoded length and the character
    /// is consumed. Otherwise the offset and column do not move, but the
    /// pending length is left at the decoded length (or the decode error's
    /// recovery length) so the bad-character path knows how much to claim.
    /// Decode errors are not reported here; the tokenizer reports them once,
    /// when it emits the bad-character token.
    pub fn try_consume_unicode_in(&mut self, table: &UnicodeTable) -> bool {
        match self.current() {
            Some(b) if !b.is_ascii() => {}
            _ => return false,
        }

        match utf8::decode(self.rest()) {
            Ok(ch) => {
                self.pending_char_len = ch.len;
                if table.contains(ch.code) {
                    self.consume();
                    true
                } else {
                    false
                }
            }
            Err(err) => {
                self.pending_char_len = err.recovery_len();
                false
            }
        }
    }
}
