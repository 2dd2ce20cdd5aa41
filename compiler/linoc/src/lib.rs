//! The lino REPL: reads lines, tokenizes them, prints the tokens.
//!
//! # Architecture
//!
//! ```text
//! stdin line ──► lino_lexer_core::Tokenizer ──► TokenDisplay ──► stdout
//!                        │
//!                        ▼ LexIssue
//!                reporting::issue_to_diagnostic
//!                        │
//!                        ▼
//!            DiagnosticQueue ──► TerminalEmitter ──► stderr
//! ```
//!
//! The binary is a thin wrapper over [`Repl`]; everything here is generic
//! over the reader and writers so it can be driven from tests.

use std::sync::Once;

pub mod config;
pub mod render;
pub mod reporting;
pub mod repl;

pub use config::{ConfigError, ReplConfig};
pub use render::TokenDisplay;
pub use repl::{run_repl, Repl, ReplSummary};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=linoc=trace`.
/// Events go to stderr as an indented tree so per-line spans group the
/// token and issue events under them. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
