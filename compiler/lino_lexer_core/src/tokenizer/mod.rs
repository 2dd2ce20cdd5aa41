//! Scanner state machine producing one [`Token`] per call.
//!
//! # Design
//!
//! The machine is stateless between calls apart from the cursor position.
//! Each call skips blanks and then tries the token rules in order, returning
//! on the first match:
//!
//! 1. end of line
//! 2. single-byte punctuation `( ) + - * / =`
//! 3. number: `digit+ ('.' digit*)?`
//! 4. symbol: `(alpha | _ | ID_Start) (alpha | digit | _ | ID_Continue)*`
//! 5. bad character
//!
//! Punctuation is tried before numbers, so `-` is never a sign. A lexeme
//! starting with a digit is always a number; one starting with a letter is
//! always a symbol, even when digits follow.
//!
//! The bad-character rule always consumes at least one byte, so scanning
//! makes progress on any input.

use crate::cursor::Cursor;
use crate::issue::{LexIssue, LexIssueKind};
use crate::token::{Token, TokenKind};
use crate::unicode::{ID_CONTINUE, ID_START};
use crate::utf8;

/// Tokenizer over one line of input.
///
/// Lexical problems are encoded as [`TokenKind::BadCharacter`] tokens, not as
/// `Result::Err`. Each one also records a [`LexIssue`], readable through
/// [`issues()`](Self::issues).
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    issues: Vec<LexIssue>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer at the start of `line`.
    ///
    /// `line` is expected to hold no line terminator; a `\n` or `\r` byte is
    /// reported as a bad character.
    pub fn new(line: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(line),
            issues: Vec::new(),
        }
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::EndOfLine`] when the line is exhausted.
    /// Subsequent calls after end of line return an equal token.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_blanks();

        let start = self.cursor.offset();
        let column = self.cursor.column();
        if self.cursor.at_end() {
            return Token::end_of_line(start, column);
        }

        if self.cursor.current().is_some_and(is_punctuation) {
            self.cursor.consume();
            return self.finish(TokenKind::Punctuation, start, column);
        }

        if self.number() {
            return self.finish(TokenKind::Number, start, column);
        }

        if self.symbol() {
            return self.finish(TokenKind::Symbol, start, column);
        }

        self.bad_character(start, column)
    }

    /// Issues recorded so far, in scan order.
    pub fn issues(&self) -> &[LexIssue] {
        &self.issues
    }

    /// Take the recorded issues, leaving the list empty.
    pub fn take_issues(&mut self) -> Vec<LexIssue> {
        std::mem::take(&mut self.issues)
    }

    // ─── Blanks ─────────────────────────────────────────────────────────

    fn skip_blanks(&mut self) {
        while matches!(self.cursor.current(), Some(b' ' | b'\t')) {
            self.cursor.set_pending_char_len(1);
            self.cursor.consume();
        }
        // A failed decode on the previous call may have left a longer
        // pending length behind.
        self.cursor.set_pending_char_len(1);
    }

    // ─── Numbers ────────────────────────────────────────────────────────

    fn number(&mut self) -> bool {
        if !self.cursor.try_consume_ascii_digit() {
            return false;
        }
        while self.cursor.try_consume_ascii_digit() {}

        // Fractional part. `12.` is a complete number.
        if self.cursor.current() == Some(b'.') {
            self.cursor.consume();
            while self.cursor.try_consume_ascii_digit() {}
        }
        true
    }

    // ─── Symbols ────────────────────────────────────────────────────────

    fn symbol(&mut self) -> bool {
        let started = self.cursor.try_consume_ascii_alpha_or_underscore()
            || self.cursor.try_consume_unicode_in(&ID_START);
        if !started {
            return false;
        }
        while self.cursor.try_consume_ascii_alpha_or_underscore()
            || self.cursor.try_consume_ascii_digit()
            || self.cursor.try_consume_unicode_in(&ID_CONTINUE)
        {}
        true
    }

    // ─── Errors ─────────────────────────────────────────────────────────

    /// Claim one character, or the bytes of one malformed sequence, as a
    /// bad-character token and record the matching issue.
    ///
    /// The claimed length is the cursor's pending length: 1 for an ASCII
    /// byte, or whatever the failed identifier decode left behind.
    fn bad_character(&mut self, start: u32, column: u32) -> Token<'a> {
        let (decoded_len, kind) = match utf8::decode(self.cursor.rest()) {
            Ok(ch) => (ch.len, LexIssueKind::UnexpectedCharacter { code: ch.code }),
            Err(err) => (err.recovery_len(), LexIssueKind::Decode(err)),
        };
        let len = self.cursor.pending_char_len();
        debug_assert!(len > 0, "bad character at {start} must claim at least one byte");
        debug_assert_eq!(
            len, decoded_len,
            "pending length at {start} disagrees with the decoder"
        );

        self.cursor.consume();
        let token = self.finish(TokenKind::BadCharacter, start, column);
        self.issues.push(LexIssue {
            kind,
            span: token.span(),
            column,
        });
        token
    }

    /// Build a token spanning from `start`/`column` to the cursor.
    fn finish(&self, kind: TokenKind, start: u32, column: u32) -> Token<'a> {
        Token::new(
            kind,
            start,
            column,
            self.cursor.column() - column,
            self.cursor.slice_from(start),
        )
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    /// Yields tokens up to, but not including, the end-of-line marker.
    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.next_token();
        if token.kind().is_eol() {
            None
        } else {
            Some(token)
        }
    }
}

/// Returns `true` for the single-byte punctuation characters.
#[inline]
fn is_punctuation(byte: u8) -> bool {
    matches!(byte, b'(' | b')' | b'+' | b'-' | b'*' | b'/' | b'=')
}

/// Convenience function: tokenize a whole line.
///
/// Returns every token including the final end-of-line marker, and the
/// issues recorded along the way. For streaming access, construct a
/// [`Tokenizer`] directly.
pub fn tokenize(line: &[u8]) -> (Vec<Token<'_>>, Vec<LexIssue>) {
    let mut tokenizer = Tokenizer::new(line);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token();
        tokens.push(token);
        if token.kind().is_eol() {
            break;
        }
    }
    (tokens, tokenizer.take_issues())
}

#[cfg(test)]
mod tests;
