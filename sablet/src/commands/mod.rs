//! Command modules for the sablet CLI.
//!
//! Each subcommand is implemented in its own file with an args struct and
//! a `run_*` entry point.

pub mod check;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};
