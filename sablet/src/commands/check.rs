//! Check command implementation.
//!
//! Lexes the whole input and reports every diagnostic with source
//! context. Unlike `tokens`, this reads the input into memory up front so
//! the line map can render snippets.

use std::io::Read;

use sablec_lex::Lexer;
use sablec_util::{Handler, SourceMap};
use tracing::info;

use crate::error::{Result, SabletError};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Input path, `-` for standard input.
    pub path: String,
    /// Disable source snippets in the report.
    pub no_snippets: bool,
}

/// Lex the input and report diagnostics; fails if any error was found.
pub fn run_check(args: &CheckArgs) -> Result<()> {
    let text = read_input(&args.path)?;

    let handler = Handler::new();
    let map = SourceMap::new();
    let lexer = Lexer::from_string(args.path.clone(), &text, &handler, &map);

    let token_count = lexer.count();

    for diag in handler.diagnostics() {
        let code = diag
            .code
            .map(|c| format!("[{}]", c.as_str()))
            .unwrap_or_default();
        eprintln!("{}{}: {}", diag.level, code, diag.message);
        if !args.no_snippets {
            if let Some(rendered) = map.format_span(diag.span) {
                eprintln!("{rendered}");
            }
        }
        for note in &diag.notes {
            eprintln!("  note: {note}");
        }
        for help in &diag.helps {
            eprintln!("  help: {help}");
        }
    }

    let errors = handler.error_count();
    info!(tokens = token_count, errors, "checked {}", args.path);

    if errors > 0 {
        Err(SabletError::LexFailed(errors))
    } else {
        println!("{}: {token_count} token(s), no lexical errors", args.path);
        Ok(())
    }
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
