//! Lexical issues: the tokenizer's diagnostic side channel.
//!
//! Issues are recorded, never printed. The integration layer (`linoc`)
//! converts them to `lino_diagnostic::Diagnostic` values with error codes
//! and renders them.

use std::fmt;

use thiserror::Error;

use crate::{DecodeError, Span};

/// A problem found while scanning, located by byte span and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LexIssue {
    /// What went wrong.
    pub kind: LexIssueKind,
    /// Bytes of the bad-character token that carries this issue.
    pub span: Span,
    /// 1-based column of the first affected character.
    pub column: u32,
}

/// Kind of lexical issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexIssueKind {
    /// Malformed or truncated UTF-8 sequence.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// A well-formed character that no token rule accepts.
    #[error("unexpected character U+{code:04X}")]
    UnexpectedCharacter { code: u32 },
}

impl LexIssueKind {
    /// The rejected character, if the bytes decoded to one.
    pub fn character(&self) -> Option<char> {
        match *self {
            LexIssueKind::UnexpectedCharacter { code } => char::from_u32(code),
            LexIssueKind::Decode(_) => None,
        }
    }
}

impl fmt::Display for LexIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col:{}: {}", self.column, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_character_message() {
        let kind = LexIssueKind::UnexpectedCharacter { code: u32::from(b'$') };
        assert_eq!(kind.to_string(), "unexpected character U+0024");
        assert_eq!(kind.character(), Some('$'));
    }

    #[test]
    fn decode_message_is_transparent() {
        let kind = LexIssueKind::from(DecodeError::InvalidLeadingByte { byte: 0x80 });
        assert_eq!(kind.to_string(), "invalid leading byte 0x80");
        assert_eq!(kind.character(), None);
    }

    #[test]
    fn issue_display_includes_column() {
        let issue = LexIssue {
            kind: LexIssueKind::UnexpectedCharacter { code: 0x20AC },
            span: Span::new(4, 7),
            column: 5,
        };
        assert_eq!(issue.to_string(), "col:5: unexpected character U+20AC");
    }
}
