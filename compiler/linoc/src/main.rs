//! lino CLI
//!
//! Interactive tokenizer: one line in, one token per line out.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use linoc::config::USAGE;
use linoc::{ConfigError, Repl, ReplConfig};

fn main() -> ExitCode {
    linoc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match ReplConfig::from_args(&args) {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let stderr = io::stderr();
    let errors_are_tty = stderr.is_terminal();
    let repl = Repl::new(&config, io::stdout().lock(), stderr.lock(), errors_are_tty);

    match repl.run(io::stdin().lock()) {
        Ok(summary) => {
            tracing::debug!(
                lines = summary.lines,
                tokens = summary.tokens,
                bad_characters = summary.bad_characters,
                "session finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
