//! Diagnostic Emitters
//!
//! Each emitter implements the `DiagnosticEmitter` trait. The terminal
//! emitter is the one the REPL uses; tests drive it through a `Vec<u8>`.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of the errors reported for one line.
    fn emit_summary(&mut self, error_count: usize);
}
