//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! When the offending line is known, labels are drawn as carets under it.

use std::io::Write;

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    /// The line being reported on, decoded lossily.
    source_line: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source_line: None,
        }
    }

    /// Set the line that subsequent diagnostics point into.
    pub fn set_source_line(&mut self, line: &[u8]) {
        self.source_line = Some(String::from_utf8_lossy(line).into_owned());
    }

    /// Forget the current source line; labels fall back to `col:N` only.
    pub fn clear_source_line(&mut self) {
        self.source_line = None;
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_label(&mut self, label: &Label) {
        let _ = write!(self.writer, " --> col:{}", label.column);

        let Some(line) = self.source_line.take() else {
            let _ = write!(self.writer, ": ");
            self.write_colored(&label.message, colors::ERROR);
            let _ = writeln!(self.writer);
            return;
        };

        let _ = writeln!(self.writer);
        let _ = writeln!(self.writer, "  |");
        let _ = writeln!(self.writer, "  | {line}");
        let _ = write!(self.writer, "  | {}", caret_indent(&line, label.column));

        let width = usize::try_from(label.width).unwrap_or(1);
        let underline = "^".repeat(width);
        self.write_colored(&underline, colors::ERROR);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, colors::ERROR);
        }
        let _ = writeln!(self.writer);

        self.source_line = Some(line);
    }

    fn write_trailer(&mut self, kind: &str, color: &str, text: &str) {
        let _ = write!(self.writer, "  = ");
        self.write_colored(kind, color);
        let _ = writeln!(self.writer, ": {text}");
    }
}

/// Whitespace that places a caret under character `column` (1-based).
///
/// Tabs in the line are mirrored so the caret lines up in a terminal.
fn caret_indent(line: &str, column: u32) -> String {
    let skip = usize::try_from(column.saturating_sub(1)).unwrap_or(usize::MAX);
    let mut indent: String = line
        .chars()
        .take(skip)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    // End-of-line points one past the last character.
    let missing = skip.saturating_sub(indent.chars().count());
    indent.push_str(&" ".repeat(missing));
    indent
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            self.write_trailer("note", colors::BOLD, note);
        }

        for suggestion in &diagnostic.suggestions {
            self.write_trailer("help", colors::HELP, suggestion);
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        let _ = writeln!(
            self.writer,
            ": {error_count} error{} on this line",
            plural_s(error_count)
        );
    }
}
