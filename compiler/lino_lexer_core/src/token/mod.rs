//! Token model.
//!
//! A [`Token`] is a view into the input line plus scalar position metadata.
//! It owns nothing and cannot outlive the line it was scanned from.

use std::borrow::Cow;

use crate::Span;

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// One of `( ) + - * / =`.
    Punctuation,
    /// Digits, optionally followed by `.` and more digits.
    Number,
    /// Identifier: ASCII letter, `_`, or `ID_Start`, then letters, digits,
    /// `_`, or `ID_Continue`.
    Symbol,
    /// Terminal marker, returned once the line is exhausted.
    EndOfLine,
    /// A character (or malformed byte run) that matches no rule.
    BadCharacter,
}

impl TokenKind {
    /// Three-letter mnemonic used by the textual token rendering.
    pub fn mnemonic(self) -> &'static str {
        match self {
            TokenKind::Punctuation => "PCT",
            TokenKind::Number => "NUM",
            TokenKind::Symbol => "SYM",
            TokenKind::EndOfLine => "EOL",
            TokenKind::BadCharacter => "BAD",
        }
    }

    #[inline]
    pub fn is_eol(self) -> bool {
        self == TokenKind::EndOfLine
    }
}

/// One scanned lexeme, or the end-of-line marker.
///
/// `len` is in bytes, `column_len` in characters; they differ when the
/// lexeme contains multi-byte characters. The end-of-line token sits at the
/// line's length with `len == 1` and `column_len == 1` but views no bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    kind: TokenKind,
    offset: u32,
    len: u32,
    column: u32,
    column_len: u32,
    lexeme: &'a [u8],
}

impl<'a> Token<'a> {
    pub(crate) fn new(
        kind: TokenKind,
        offset: u32,
        column: u32,
        column_len: u32,
        lexeme: &'a [u8],
    ) -> Self {
        debug_assert!(!lexeme.is_empty(), "{kind:?} token must view at least one byte");
        Token {
            kind,
            offset,
            len: u32::try_from(lexeme.len()).unwrap_or(u32::MAX),
            column,
            column_len,
            lexeme,
        }
    }

    pub(crate) fn end_of_line(offset: u32, column: u32) -> Self {
        Token {
            kind: TokenKind::EndOfLine,
            offset,
            len: 1,
            column,
            column_len: 1,
            lexeme: &[],
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Byte offset of the first byte.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Always `false`: every token, including end-of-line, has length 1 or more.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 1-based column of the first character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Length in characters.
    #[inline]
    pub fn column_len(&self) -> u32 {
        self.column_len
    }

    /// The bytes of the lexeme (empty for end-of-line).
    #[inline]
    pub fn lexeme(&self) -> &'a [u8] {
        self.lexeme
    }

    /// The lexeme as text; malformed bytes render as U+FFFD.
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.lexeme)
    }

    /// Byte span `offset..offset + len`.
    pub fn span(&self) -> Span {
        Span::at(self.offset, self.len)
    }
}
