//! Diagnostic Rendering
//!
//! Converts [`LexIssue`] values recorded by the tokenizer into user-facing
//! [`Diagnostic`] messages with error codes, a column label, and notes.

use lino_diagnostic::{Diagnostic, ErrorCode};
use lino_lexer_core::{DecodeError, LexIssue, LexIssueKind};

/// Error code for a lexical issue.
pub fn error_code(kind: &LexIssueKind) -> ErrorCode {
    match kind {
        LexIssueKind::UnexpectedCharacter { .. } => ErrorCode::E0001,
        LexIssueKind::Decode(DecodeError::Truncated { .. }) => ErrorCode::E0002,
        LexIssueKind::Decode(DecodeError::InvalidLeadingByte { .. }) => ErrorCode::E0003,
    }
}

/// Build the diagnostic reported for `issue`.
pub fn issue_to_diagnostic(issue: &LexIssue) -> Diagnostic {
    let diag = Diagnostic::error(error_code(&issue.kind)).with_message(issue.kind.to_string());

    match issue.kind.character() {
        Some(c) => {
            let diag = diag
                .with_label(issue.span, issue.column, 1, "not part of any token")
                .with_note("tokens are punctuation `( ) + - * / =`, numbers, and identifiers");
            if c.is_control() {
                diag.with_suggestion("remove the control character")
            } else if c.is_whitespace() {
                diag.with_suggestion("only spaces and tabs separate tokens")
            } else {
                diag
            }
        }
        None => {
            let bytes = issue.span.len();
            diag.with_label(issue.span, issue.column, 1, "malformed UTF-8")
                .with_note(format!(
                    "skipped {bytes} byte{}; the line is not valid UTF-8",
                    if bytes == 1 { "" } else { "s" }
                ))
        }
    }
}
