//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Error limits to keep a line full of garbage from flooding the terminal
//! - Deduplication of repeated errors at the same column
//! - Column ordering on flush

use lino_lexer_core::Span;

use crate::{Diagnostic, ErrorCode};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before stopping (0 = unlimited).
    pub error_limit: usize,
    /// Drop an error with the same code and column as the previous one.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

/// Queued diagnostic with its sort key.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    column: u32,
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::default());
/// queue.add(diagnostic);
/// // ... add more diagnostics
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
    /// Count of accepted errors.
    error_count: usize,
    /// Last (column, code) of an accepted error, for dedup.
    last_error: Option<(u32, ErrorCode)>,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            last_error: None,
            config,
        }
    }

    /// Add a diagnostic, positioned by its primary label's column.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            return false;
        }

        let column = diag.primary_column();
        if self.config.deduplicate && self.last_error == Some((column, diag.code)) {
            return false;
        }

        self.last_error = Some((column, diag.code));
        self.error_count += 1;
        self.diagnostics.push(QueuedDiagnostic {
            diagnostic: diag,
            column,
        });
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Sort diagnostics by column and return them.
    ///
    /// Clears the queue after flushing. Skips sorting if already in order,
    /// which is the usual case since the tokenizer reports left to right.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| w[0].column <= w[1].column);

        if !already_sorted {
            self.diagnostics.sort_by_key(|d| d.column);
        }

        let result: Vec<Diagnostic> = self.diagnostics.drain(..).map(|d| d.diagnostic).collect();

        self.error_count = 0;
        self.last_error = None;

        result
    }
}

/// Create a "too many errors" diagnostic.
#[cold]
pub fn too_many_errors(limit: usize, span: Span, column: u32) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9001)
        .with_message(format!("aborting line after {limit} errors"))
        .with_label(span, column, 1, "error limit reached here")
        .with_note("use --error-limit to increase the limit")
}

#[cfg(test)]
mod tests;
