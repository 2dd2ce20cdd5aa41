//! Error codes for all tokenizer diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E0002`) with the first digit
//! indicating the phase. Codes are stable so they can be searched for.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E9xxx: Internal / driver errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Character that no token rule accepts
    E0001,
    /// Truncated multi-byte UTF-8 sequence
    E0002,
    /// Invalid UTF-8 leading byte
    E0003,

    // Internal Errors (E9xxx)
    /// Too many errors on one line
    E9001,
}

impl ErrorCode {
    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E9001 => "E9001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
