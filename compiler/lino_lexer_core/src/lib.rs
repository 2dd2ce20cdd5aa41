//! Single-line tokenizer for lino.
//!
//! Converts one line of raw UTF-8 bytes into classified [`Token`] values with
//! exact byte offsets (for slicing) and character columns (for diagnostics).
//!
//! # Architecture
//!
//! ```text
//! &[u8] line -> Cursor -> Tokenizer::next_token() -> Token { kind, offset, len, column, column_len }
//!                  |                |
//!             utf8::decode    unicode::{ID_START, ID_CONTINUE}
//! ```
//!
//! Lexical problems never abort scanning. A byte run that matches no rule
//! becomes a [`TokenKind::BadCharacter`] token, and a matching [`LexIssue`]
//! is recorded on the tokenizer's side channel for the caller to report.
//!
//! This crate prints nothing and has no `lino_*` dependencies; the REPL and
//! diagnostic rendering live in `linoc` and `lino_diagnostic`.

mod cursor;
mod issue;
mod span;
mod token;
mod tokenizer;
pub mod unicode;
pub mod utf8;

pub use cursor::Cursor;
pub use issue::{LexIssue, LexIssueKind};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};
pub use unicode::{UnicodeTable, ID_CONTINUE, ID_START};
pub use utf8::{DecodeError, Utf8Char};
