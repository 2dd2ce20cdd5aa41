//! Diagnostic system for tokenizer error reporting.
//!
//! Every diagnostic carries:
//! - An error code for searchability
//! - A clear message (what went wrong)
//! - A primary label (where it went wrong, by column)
//! - Notes and help lines (why, and how to fix)
//!
//! Diagnostics are collected in a [`queue::DiagnosticQueue`] and written by a
//! [`emitter::DiagnosticEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use lino_lexer_core::Span;
