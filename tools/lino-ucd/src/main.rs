//! lino-ucd CLI
//!
//! `lino-ucd <DerivedCoreProperties.txt> [output.rs]`
//!
//! Writes the generated module to `output.rs`, or stdout when omitted.

use std::process::ExitCode;

use lino_ucd::{parse_derived_core_properties, render_tables};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let (input, output) = match args.as_slice() {
        [_, input] => (input, None),
        [_, input, output] => (input, Some(output)),
        _ => {
            eprintln!("Usage: lino-ucd <DerivedCoreProperties.txt> [output.rs]");
            return ExitCode::from(2);
        }
    };

    let text = match std::fs::read_to_string(input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: cannot read {input}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let tables = match parse_derived_core_properties(&text) {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("error: {input}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rendered = render_tables(&tables);
    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, rendered) {
                eprintln!("error: cannot write {path}: {e}");
                return ExitCode::FAILURE;
            }
            eprintln!(
                "wrote {} ID_Start and {} ID_Continue ranges to {path}",
                tables.id_start.len(),
                tables.id_continue.len()
            );
        }
        None => print!("{rendered}"),
    }

    ExitCode::SUCCESS
}
