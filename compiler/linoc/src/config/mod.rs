//! REPL configuration parsed from command-line flags.
//!
//! Flags use the `--name=value` form. There are no positional arguments;
//! input always comes from stdin.

use lino_diagnostic::emitter::ColorMode;
use lino_diagnostic::queue::DiagnosticConfig;
use thiserror::Error;

/// Usage text printed for `--help` and after a flag error.
pub const USAGE: &str = "\
Usage: lino [options]

Reads lines from stdin and prints one token per output line.

Options:
  --prompt=<text>        Prompt printed before each line (default: \"tokenizer> \")
  --quiet                Do not print the welcome banner
  --color=<mode>         Diagnostic colors: auto, always, never (default: auto)
  --no-diagnostics       Do not report bad characters on stderr
  --error-limit=<n>      Stop reporting after n errors per line, 0 = no limit (default: 10)
  -h, --help             Print this help

Set RUST_LOG (e.g. RUST_LOG=linoc=trace) to enable tracing output on stderr.";

/// Default prompt, matching the banner text.
pub const DEFAULT_PROMPT: &str = "tokenizer> ";

/// Settings for one REPL session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Printed before each input line.
    pub prompt: String,
    /// Print the welcome banner on startup.
    pub banner: bool,
    /// Color mode for diagnostics on the error stream.
    pub color: ColorMode,
    /// Report lexical issues as diagnostics.
    pub diagnostics: bool,
    /// Maximum errors reported per line (0 = unlimited).
    pub error_limit: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: true,
            color: ColorMode::Auto,
            diagnostics: true,
            error_limit: DiagnosticConfig::default().error_limit,
        }
    }
}

/// Why the command line could not be turned into a [`ReplConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `-h` or `--help` was given. Not a failure; the caller prints usage.
    #[error("help requested")]
    HelpRequested,
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("unexpected argument `{0}`: input is read from stdin")]
    UnexpectedArgument(String),
    #[error("option `{0}` requires a value (use `{0}=<value>`)")]
    MissingValue(&'static str),
    #[error("invalid color mode `{0}` (expected auto, always, or never)")]
    InvalidColor(String),
    #[error("invalid error limit `{0}` (expected a non-negative integer)")]
    InvalidErrorLimit(String),
}

impl ReplConfig {
    /// Parse flags (without the program name).
    ///
    /// Later flags override earlier ones.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut config = ReplConfig::default();

        for arg in args {
            let arg = arg.as_str();
            if arg == "-h" || arg == "--help" {
                return Err(ConfigError::HelpRequested);
            } else if arg == "--quiet" || arg == "-q" {
                config.banner = false;
            } else if arg == "--no-diagnostics" {
                config.diagnostics = false;
            } else if let Some(prompt) = arg.strip_prefix("--prompt=") {
                config.prompt = prompt.to_string();
            } else if let Some(mode) = arg.strip_prefix("--color=") {
                config.color = ColorMode::parse(mode)
                    .ok_or_else(|| ConfigError::InvalidColor(mode.to_string()))?;
            } else if let Some(limit) = arg.strip_prefix("--error-limit=") {
                config.error_limit = limit
                    .parse()
                    .map_err(|_| ConfigError::InvalidErrorLimit(limit.to_string()))?;
            } else if let Some(flag) = value_flag(arg) {
                return Err(ConfigError::MissingValue(flag));
            } else if arg.starts_with('-') {
                return Err(ConfigError::UnknownOption(arg.to_string()));
            } else {
                return Err(ConfigError::UnexpectedArgument(arg.to_string()));
            }
        }

        Ok(config)
    }
}

/// The flag name if `arg` is a value-taking flag given without `=`.
fn value_flag(arg: &str) -> Option<&'static str> {
    ["--prompt", "--color", "--error-limit"]
        .into_iter()
        .find(|flag| *flag == arg)
}
