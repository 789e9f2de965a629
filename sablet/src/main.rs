//! Sablet CLI - command-line front end for the Sable lexer.
//!
//! This is the main entry point for the sablet application. It uses clap
//! for argument parsing and dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::SabletError;

/// Sablet - token-level tooling for Sable source files
#[derive(Parser, Debug)]
#[command(name = "sablet")]
#[command(author = "Sable Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lex Sable source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SABLET_VERBOSE")]
    verbose: bool,

    /// Path to configuration file (default: ./sable.toml if present)
    #[arg(short, long, global = true, env = "SABLET_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the sablet CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Dump the token stream of a source file
    ///
    /// Reads the given path (or standard input with `-`) and prints one
    /// line per token, or a JSON array with `--format json`.
    Tokens(TokensCommand),

    /// Lex a source file and report diagnostics
    ///
    /// Exits non-zero if the input contains lexical errors.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input path, or `-` for standard input
    path: String,

    /// Output format: text or json
    #[arg(short, long)]
    format: Option<String>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input path, or `-` for standard input
    path: String,

    /// Do not render source snippets under diagnostics
    #[arg(long)]
    no_snippets: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SABLET_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::discover(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Commands::Tokens(cmd) => {
            let args = TokensArgs {
                path: cmd.path,
                format: cmd.format,
            };
            run_tokens(&args, &config)?;
        }
        Commands::Check(cmd) => {
            let args = CheckArgs {
                path: cmd.path,
                no_snippets: cmd.no_snippets,
            };
            run_check(&args)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // A failed check already printed its diagnostics; everything
            // else gets the error chain.
            match err.downcast_ref::<SabletError>() {
                Some(SabletError::LexFailed(_)) => eprintln!("{err}"),
                _ => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
