//! Core diagnostic types for structured error reporting.
//!
//! Defines [`Diagnostic`] and [`Label`], the building blocks the REPL uses
//! to report lexical issues. Every diagnostic is an error; the tokenizer has
//! nothing to warn about.

use lino_lexer_core::Span;

use crate::ErrorCode;

/// A labeled location with a message.
///
/// Input is a single line, so a location is a byte span plus the 1-based
/// character column and width used to place the underline.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    /// The bytes to highlight.
    pub span: Span,
    /// 1-based column of the first highlighted character.
    pub column: u32,
    /// Number of highlighted characters (at least 1).
    pub width: u32,
    /// The label text explaining this location.
    pub message: String,
}

impl Label {
    /// Create a label; a zero `width` is widened to 1.
    pub fn new(span: Span, column: u32, width: u32, message: impl Into<String>) -> Self {
        Label {
            span,
            column,
            width: width.max(1),
            message: message.into(),
        }
    }
}

/// A rich diagnostic with all context needed for a useful message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    /// Labeled locations showing where the error occurred.
    pub labels: Vec<Label>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
    /// Text suggestions for fixing the error.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a label. The first one added is the primary location.
    pub fn with_label(
        mut self,
        span: Span,
        column: u32,
        width: u32,
        message: impl Into<String>,
    ) -> Self {
        self.labels.push(Label::new(span, column, width, message));
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// The primary label: the first one added, if any.
    pub fn primary_label(&self) -> Option<&Label> {
        self.labels.first()
    }

    /// Column of the primary label, or 1 when the diagnostic has none.
    pub fn primary_column(&self) -> u32 {
        self.primary_label().map_or(1, |l| l.column)
    }
}
