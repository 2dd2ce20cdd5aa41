//! The read-tokenize-print loop.
//!
//! Tokens go to the output stream, diagnostics to the error stream. The
//! prompt is printed once up front and again after each processed line.

use std::io::{self, BufRead, Write};

use lino_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use lino_diagnostic::queue::{too_many_errors, DiagnosticConfig, DiagnosticQueue};
use lino_lexer_core::{LexIssue, TokenKind, Tokenizer};

use crate::reporting::issue_to_diagnostic;
use crate::{ReplConfig, TokenDisplay};

const SHORT_WELCOME: &str = "Welcome to the tokenizer.";
const LONG_WELCOME: &str = "Input a line of code, and the tokenizer will return the tokens. \
                            Exit by closing input stream e.g. ctrl+d (unix) or ctrl+z (win).";

/// Counts for a finished session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplSummary {
    /// Lines read.
    pub lines: usize,
    /// Tokens printed, not counting end-of-line markers.
    pub tokens: usize,
    /// How many of those tokens were bad characters.
    pub bad_characters: usize,
}

/// One REPL session over an output and an error stream.
pub struct Repl<W: Write, E: Write> {
    prompt: String,
    banner: bool,
    diagnostics: bool,
    output: W,
    emitter: TerminalEmitter<E>,
    queue: DiagnosticQueue,
    summary: ReplSummary,
}

impl<W: Write, E: Write> Repl<W, E> {
    /// `errors_are_tty` resolves [`ColorMode::Auto`](lino_diagnostic::emitter::ColorMode::Auto).
    pub fn new(config: &ReplConfig, output: W, errors: E, errors_are_tty: bool) -> Self {
        Repl {
            prompt: config.prompt.clone(),
            banner: config.banner,
            diagnostics: config.diagnostics,
            output,
            emitter: TerminalEmitter::with_color_mode(errors, config.color, errors_are_tty),
            queue: DiagnosticQueue::with_config(DiagnosticConfig {
                error_limit: config.error_limit,
                deduplicate: true,
            }),
            summary: ReplSummary::default(),
        }
    }

    /// Run until `input` is exhausted.
    pub fn run<R: BufRead>(mut self, mut input: R) -> io::Result<ReplSummary> {
        if self.banner {
            writeln!(self.output, "{SHORT_WELCOME}")?;
            writeln!(self.output, "{LONG_WELCOME}")?;
            writeln!(self.output)?;
        }
        self.write_prompt()?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            self.process_line(strip_line_terminator(&buf))?;
            self.write_prompt()?;
        }

        writeln!(self.output, "Exiting REPL...")?;
        self.output.flush()?;
        tracing::debug!(lines = self.summary.lines, "end of input");
        Ok(self.summary)
    }

    /// Tokenize one line (without its terminator) and print the result.
    pub fn process_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.summary.lines += 1;
        let span = tracing::debug_span!("line", number = self.summary.lines, bytes = line.len());
        let _enter = span.enter();

        let mut tokenizer = Tokenizer::new(line);
        loop {
            let token = tokenizer.next_token();
            tracing::trace!(
                kind = token.kind().mnemonic(),
                offset = token.offset(),
                column = token.column(),
                "token"
            );
            writeln!(self.output, "{}", TokenDisplay::new(token))?;

            match token.kind() {
                TokenKind::EndOfLine => break,
                TokenKind::BadCharacter => self.summary.bad_characters += 1,
                _ => {}
            }
            self.summary.tokens += 1;
        }

        // Tokens first, so diagnostics follow the line they describe.
        self.output.flush()?;
        self.report(line, &tokenizer.take_issues());
        Ok(())
    }

    /// Counts so far.
    pub fn summary(&self) -> ReplSummary {
        self.summary
    }

    fn write_prompt(&mut self) -> io::Result<()> {
        write!(self.output, "{}", self.prompt)?;
        self.output.flush()
    }

    fn report(&mut self, line: &[u8], issues: &[LexIssue]) {
        for issue in issues {
            tracing::debug!(column = issue.column, kind = %issue.kind, "lexical issue");
        }
        if !self.diagnostics || issues.is_empty() {
            return;
        }

        let mut overflow = None;
        for issue in issues {
            if !self.queue.add(issue_to_diagnostic(issue))
                && self.queue.limit_reached()
                && overflow.is_none()
            {
                overflow = Some(issue);
            }
        }

        let error_count = self.queue.error_count();
        let mut diagnostics = self.queue.flush();
        if let Some(issue) = overflow {
            diagnostics.push(too_many_errors(error_count, issue.span, issue.column));
        }

        self.emitter.set_source_line(line);
        self.emitter.emit_all(&diagnostics);
        self.emitter.emit_summary(error_count);
        self.emitter.clear_source_line();
        self.emitter.flush();
    }
}

/// Run a whole session with a fresh [`Repl`].
pub fn run_repl<R: BufRead, W: Write, E: Write>(
    config: &ReplConfig,
    input: R,
    output: W,
    errors: E,
    errors_are_tty: bool,
) -> io::Result<ReplSummary> {
    Repl::new(config, output, errors, errors_are_tty).run(input)
}

/// Drop a trailing `\n` or `\r\n`. A lone `\r` stays in the line.
fn strip_line_terminator(buf: &[u8]) -> &[u8] {
    match buf.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => buf,
    }
}
