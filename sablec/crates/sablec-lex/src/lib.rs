//! sablec-lex - Lexical Analyzer for the Sable Programming Language
//!
//! This crate turns a stream of source bytes into a stream of tokens with
//! arbitrary-depth lookahead for the parser. It is the first phase of the
//! Sable compiler.
//!
//! # Overview
//!
//! Lexing is organized as two buffered queues over lazy producers:
//!
//! - a char-level queue: the [`reader`] decodes UTF-8 one codepoint at a
//!   time from a file, standard input, or an in-memory buffer;
//! - a token-level queue: the [`builder`] pulls codepoints through the
//!   char queue and synthesizes one token per call.
//!
//! Both queues are instances of the same generic buffer in [`queue`]. The
//! [`lexer`] composes them and exposes `peek`/`skip` plus the two narrow
//! queue-front mutations the parser needs: replacing the current token
//! (contextual keywords) and splitting a merged punctuation token (`>>`
//! closing two nested generic argument lists).
//!
//! # Example
//!
//! ```
//! use sablec_util::{Handler, SourceMap};
//! use sablec_lex::{Lexer, TokenKind};
//!
//! let handler = Handler::new();
//! let map = SourceMap::new();
//! let mut lexer = Lexer::from_string("demo.sb", "let x = 1_000u32;", &handler, &map);
//!
//! assert_eq!(lexer.peek_token().kind, TokenKind::Let);
//! lexer.skip_token();
//! assert!(matches!(lexer.peek_token().kind, TokenKind::Ident(_)));
//! ```
//!
//! # Error recovery
//!
//! Malformed input never aborts the pass: every malformed literal
//! degrades to an ERROR token with an exact span and a diagnostic in the
//! shared [`Handler`](sablec_util::Handler), and lexing continues to
//! end-of-input. Only misuse of the lookahead API itself (a caller
//! contract violation) panics.
//!
//! # Token Categories
//!
//! Keywords, identifiers (plain and `r#raw`), lifetimes (`'a`), integer
//! literals (decimal, `0x`/`0o`/`0b`, `_` separators, typed suffixes),
//! float literals (fraction, exponent, `f32`/`f64` suffixes), character
//! and string literals with escape processing, raw strings (`r#"..."#`),
//! byte variants (`b'..'`, `b"..."`, `br"..."`), punctuation by maximal
//! munch, and one end-of-input token.

pub mod builder;
pub mod error;
pub mod lexer;
pub mod queue;
pub mod reader;
pub mod token;
pub mod unicode;

mod edge_cases;

pub use builder::TokenBuilder;
pub use error::LexErrorKind;
pub use lexer::Lexer;
pub use queue::{BufferedQueue, Produce};
pub use reader::{Codepoint, SourceInput, SourceReader};
pub use token::{keyword_from_ident, Base, Suffix, Token, TokenKind};
