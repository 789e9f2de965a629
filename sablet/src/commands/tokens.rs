//! Tokens command implementation.
//!
//! Streams the token stream of one input to standard output, either as
//! readable text lines or as a JSON array.

use sablec_lex::{Lexer, Token, TokenKind};
use sablec_util::{Handler, SourceMap};
use serde_json::json;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, SabletError};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Input path, `-` for standard input.
    pub path: String,
    /// Output format override ("text" or "json").
    pub format: Option<String>,
}

/// Dump the token stream of the input.
pub fn run_tokens(args: &TokensArgs, config: &Config) -> Result<()> {
    let format = args
        .format
        .clone()
        .unwrap_or_else(|| config.tokens.format.clone());

    let handler = Handler::new();
    let map = SourceMap::new();
    let lexer = Lexer::open(&args.path, &handler, &map)?;

    match format.as_str() {
        "text" => print_text(lexer, config.tokens.spans),
        "json" => print_json(lexer)?,
        other => {
            return Err(SabletError::Validation(format!(
                "unknown output format `{other}` (expected `text` or `json`)"
            )));
        }
    }

    debug!(
        errors = handler.error_count(),
        "finished lexing {}", args.path
    );
    Ok(())
}

fn print_text(lexer: Lexer<'_>, spans: bool) {
    for token in lexer {
        if spans {
            println!(
                "{:>4}:{:<3} {:<22} {}",
                token.span.line,
                token.span.column,
                token.kind.category(),
                token.lexeme
            );
        } else {
            println!("{:<22} {}", token.kind.category(), token.lexeme);
        }
    }
}

fn print_json(lexer: Lexer<'_>) -> Result<()> {
    let tokens: Vec<_> = lexer.map(|token| token_to_json(&token)).collect();
    println!("{}", serde_json::to_string_pretty(&tokens)?);
    Ok(())
}

fn token_to_json(token: &Token) -> serde_json::Value {
    let mut value = json!({
        "kind": token.kind.category(),
        "lexeme": token.lexeme.as_str(),
        "span": {
            "start": token.span.start,
            "end": token.span.end,
            "line": token.span.line,
            "column": token.span.column,
        },
    });

    let payload = match &token.kind {
        TokenKind::Ident(sym) | TokenKind::RawIdent(sym) | TokenKind::Lifetime(sym) => {
            Some(json!(sym.as_str()))
        }
        TokenKind::Integer {
            value,
            base,
            suffix,
        } => Some(json!({
            "value": value.to_string(),
            "base": base.radix(),
            "suffix": suffix.map(|s| s.as_str()),
        })),
        TokenKind::Float { value, suffix } => Some(json!({
            "value": value,
            "suffix": suffix.map(|s| s.as_str()),
        })),
        TokenKind::Char(c) => Some(json!(c.to_string())),
        TokenKind::ByteChar(b) => Some(json!(b)),
        TokenKind::Str(sym) | TokenKind::RawStr(sym) => Some(json!(sym.as_str())),
        TokenKind::ByteStr(bytes) | TokenKind::RawByteStr(bytes) => Some(json!(bytes)),
        TokenKind::Error(kind) => Some(json!(kind.to_string())),
        _ => None,
    };
    if let Some(payload) = payload {
        value["payload"] = payload;
    }
    value
}
