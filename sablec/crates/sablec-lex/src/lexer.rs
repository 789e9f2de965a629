//! The parser-facing lexer.
//!
//! [`Lexer`] composes a token-level [`BufferedQueue`] (backed by
//! [`TokenBuilder`]) over the char-level queue inside the reader. It has
//! no state machine of its own: peeking realizes tokens lazily, skipping
//! discards them, and the two narrow mutations (`replace`, `split`) act
//! only on the token at queue offset 0.
//!
//! A lexer exclusively owns its input for its lifetime; dropping it (or
//! moving it and dropping the new owner) releases the underlying file
//! handle exactly once.

use std::io;

use sablec_util::{FileId, Handler, SourceMap, Span, Symbol};

use crate::builder::TokenBuilder;
use crate::queue::BufferedQueue;
use crate::reader::{SourceInput, SourceReader};
use crate::token::{Token, TokenKind};

/// Arbitrary-lookahead token stream over one compilation unit's source.
pub struct Lexer<'h> {
    tokens: BufferedQueue<TokenBuilder<'h>>,
    filename: String,
}

impl<'h> Lexer<'h> {
    /// Create a lexer over an arbitrary byte source.
    ///
    /// The file is registered with `map` without content; line starts are
    /// recorded as lexing proceeds.
    pub fn new(
        filename: impl Into<String>,
        input: SourceInput,
        handler: &'h Handler,
        map: &'h SourceMap,
    ) -> Self {
        let filename = filename.into();
        let file = map.add_file(filename.clone(), None);
        let reader = SourceReader::new(input, file, handler, map);
        Self {
            tokens: BufferedQueue::new(TokenBuilder::new(reader, handler)),
            filename,
        }
    }

    /// Open a path for lexing; `-` selects standard input.
    pub fn open(path: &str, handler: &'h Handler, map: &'h SourceMap) -> io::Result<Self> {
        let input = SourceInput::open(path)?;
        Ok(Self::new(path, input, handler, map))
    }

    /// Lex the contents of a string.
    ///
    /// The text is copied into the lexer and also retained by the line
    /// map, so diagnostics can render source snippets.
    pub fn from_string(
        filename: impl Into<String>,
        text: &str,
        handler: &'h Handler,
        map: &'h SourceMap,
    ) -> Self {
        let filename = filename.into();
        let file = map.add_file(filename.clone(), Some(text.to_string()));
        let reader = SourceReader::new(SourceInput::from_string(text), file, handler, map);
        Self {
            tokens: BufferedQueue::new(TokenBuilder::new(reader, handler)),
            filename,
        }
    }

    /// The current token, without consuming it.
    pub fn peek_token(&mut self) -> &Token {
        self.peek_nth(0)
    }

    /// The token `n` positions ahead of the current one.
    ///
    /// Idempotent; realizes tokens lazily. Once end-of-input is reached,
    /// every deeper offset holds the end-of-input token.
    pub fn peek_nth(&mut self, n: usize) -> &Token {
        self.tokens.peek(n)
    }

    /// Consume the current token.
    pub fn skip_token(&mut self) {
        self.tokens.skip(0);
    }

    /// Consume `n + 1` tokens (the current one and `n` more).
    pub fn skip_tokens(&mut self, n: usize) {
        self.tokens.skip(n);
    }

    /// Replace the current token.
    ///
    /// This is the parser's tool for reinterpreting a contextual keyword
    /// as a plain identifier in a position where it is not reserved. Raw
    /// identifiers are never reinterpreted.
    pub fn replace_current_token(&mut self, replacement: Token) {
        assert!(
            !matches!(self.peek_token().kind, TokenKind::RawIdent(_)),
            "raw identifiers must not be reinterpreted"
        );
        self.tokens.replace_front(replacement);
    }

    /// Split the current token into two adjacent shorter tokens.
    ///
    /// Intended for merged punctuation the grammar needs apart, e.g. the
    /// `>>` closing two nested generic argument lists becoming `>` `>`.
    /// The two new kinds must have fixed spellings that exactly cover the
    /// original token's span; anything else is a caller bug.
    ///
    /// # Panics
    ///
    /// Panics if either kind has no fixed spelling, or if the spellings
    /// do not sum to the original token's length.
    pub fn split_current_token(&mut self, left: TokenKind, right: TokenKind) {
        let current = self.peek_token().clone();
        let left_text = left
            .spelling()
            .expect("split requires a fixed-spelling token kind");
        let right_text = right
            .spelling()
            .expect("split requires a fixed-spelling token kind");
        assert_eq!(
            left_text.len() + right_text.len(),
            current.span.len(),
            "split pieces `{left_text}` + `{right_text}` must cover `{}`",
            current.lexeme
        );

        let span = current.span;
        let mid = span.start + left_text.len();
        let left_span = Span::with_file(span.start, mid, span.file_id, span.line, span.column);
        // Punctuation spellings are ASCII, so columns advance per byte.
        let right_span = Span::with_file(
            mid,
            span.end,
            span.file_id,
            span.line,
            span.column + left_text.len() as u32,
        );

        let left_token = Token::new(left, Symbol::intern(left_text), left_span);
        let right_token = Token::new(right, Symbol::intern(right_text), right_span);
        self.tokens.split_front(left_token, right_token);
    }

    /// The name of the source being lexed.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The file id of the source being lexed.
    pub fn file_id(&self) -> FileId {
        self.tokens.source().file()
    }

    /// The line map used to resolve this lexer's spans.
    pub fn source_map(&self) -> &'h SourceMap {
        self.tokens.source().source_map()
    }
}

/// Iterates the remaining tokens, ending before the end-of-input token.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.peek_token().clone();
        if token.is_eof() {
            None
        } else {
            self.skip_token();
            Some(token)
        }
    }
}
