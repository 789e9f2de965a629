//! Token builder - the lexical grammar engine.
//!
//! [`TokenBuilder`] synthesizes exactly one token per invocation of
//! [`build_token`], pulling codepoints through the reader's lookahead
//! queue. It has no state of its own between calls beyond the shared
//! character cursor (plus a one-shot BOM check), so correctness of the
//! composed lexer follows from queue-cursor discipline alone.
//!
//! The implementation is organized into focused submodules:
//! - `identifier` - identifiers, keywords, raw identifiers
//! - `number` - integer and float literals, suffixes
//! - `string` - string/char/byte literals, lifetimes, escapes
//! - `operator` - punctuation by maximal munch
//! - `comment` - trivia: whitespace, BOM, comments
//!
//! [`build_token`]: TokenBuilder::build_token

mod comment;
mod identifier;
mod number;
mod operator;
mod string;

use sablec_util::{DiagnosticBuilder, DiagnosticCode, FileId, Handler, SourceMap, Span, Symbol};

use crate::error::LexErrorKind;
use crate::queue::Produce;
use crate::reader::SourceReader;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_start;

/// A recorded source position, for spans that do not start at the current
/// token's start (escape sequences, comment openers).
#[derive(Clone, Copy)]
pub(crate) struct Mark {
    offset: usize,
    line: u32,
    column: u32,
}

/// Builds one token per call from the character stream.
pub struct TokenBuilder<'h> {
    reader: SourceReader<'h>,
    handler: &'h Handler,
    /// Source text consumed for the token being built.
    lexeme: String,
    start_offset: usize,
    start_line: u32,
    start_column: u32,
    /// Whether the byte-order mark has been checked for.
    bom_checked: bool,
}

impl<'h> TokenBuilder<'h> {
    /// Create a builder over a codepoint reader.
    pub fn new(reader: SourceReader<'h>, handler: &'h Handler) -> Self {
        Self {
            reader,
            handler,
            lexeme: String::new(),
            start_offset: 0,
            start_line: 1,
            start_column: 1,
            bom_checked: false,
        }
    }

    /// Build the next token from the input queue.
    pub fn build_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.begin_token();

        let Some(c) = self.peek(0) else {
            return self.finish(TokenKind::Eof);
        };

        match c {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '@' => self.single(TokenKind::At),
            '#' => self.single(TokenKind::Pound),
            '?' => self.single(TokenKind::Question),
            '$' => self.single(TokenKind::Dollar),
            '~' => self.single(TokenKind::Tilde),
            '+' => self.lex_plus(),
            '-' => self.lex_minus(),
            '*' => self.lex_star(),
            '/' => self.lex_slash(),
            '%' => self.lex_percent(),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_pipe(),
            '^' => self.lex_caret(),
            ':' => self.lex_colon(),
            '.' => self.lex_dot(),
            '"' => self.lex_string(),
            '\'' => self.lex_char_or_lifetime(),
            'b' if self.starts_byte_literal() => self.lex_byte_literal(),
            'r' if self.starts_raw_prefix() => self.lex_raw_string(false),
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => {
                self.bump();
                self.error_token(
                    LexErrorKind::UnrecognizedCharacter,
                    format!("unrecognized character `{}`", c.escape_default()),
                )
            }
        }
    }

    /// True if the cursor sits on a `b'`, `b"`, `br"` or `br#` prefix.
    fn starts_byte_literal(&mut self) -> bool {
        match self.peek(1) {
            Some('\'') | Some('"') => true,
            Some('r') => matches!(self.peek(2), Some('"') | Some('#')),
            _ => false,
        }
    }

    /// True if the cursor sits on an `r"` or `r#` prefix (raw string or
    /// raw identifier).
    fn starts_raw_prefix(&mut self) -> bool {
        matches!(self.peek(1), Some('"') | Some('#'))
    }

    // === cursor helpers shared by the submodules ===

    /// The character `n` positions ahead of the cursor.
    pub(crate) fn peek(&mut self, n: usize) -> Option<char> {
        self.reader.peek_char(n)
    }

    /// Consume one codepoint into the current lexeme.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.reader.peek_char(0)?;
        self.lexeme.push(c);
        self.reader.skip();
        Some(c)
    }

    /// Consume the expected character if it is next.
    pub(crate) fn match_char(&mut self, expected: char) -> bool {
        if self.peek(0) == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Start a fresh token at the cursor.
    fn begin_token(&mut self) {
        self.lexeme.clear();
        self.start_offset = self.reader.offset();
        self.start_line = self.reader.line();
        self.start_column = self.reader.column();
    }

    /// Record the cursor position for a later sub-token span.
    pub(crate) fn mark(&self) -> Mark {
        Mark {
            offset: self.reader.offset(),
            line: self.reader.line(),
            column: self.reader.column(),
        }
    }

    /// The span from a mark to the cursor.
    pub(crate) fn span_from(&self, mark: Mark) -> Span {
        Span::with_file(
            mark.offset,
            self.reader.offset(),
            self.reader.file(),
            mark.line,
            mark.column,
        )
    }

    /// The span of the token being built.
    pub(crate) fn span(&self) -> Span {
        Span::with_file(
            self.start_offset,
            self.reader.offset(),
            self.reader.file(),
            self.start_line,
            self.start_column,
        )
    }

    /// Finish the current token with the given kind.
    pub(crate) fn finish(&mut self, kind: TokenKind) -> Token {
        Token::new(kind, Symbol::intern(&self.lexeme), self.span())
    }

    /// Consume a single-character token.
    fn single(&mut self, kind: TokenKind) -> Token {
        self.bump();
        self.finish(kind)
    }

    /// Report a diagnostic and finish the current token as an ERROR token.
    pub(crate) fn error_token(&mut self, kind: LexErrorKind, message: impl Into<String>) -> Token {
        let span = self.span();
        DiagnosticBuilder::error(message)
            .code(kind.code())
            .span(span)
            .emit(self.handler);
        Token::new(TokenKind::Error(kind), Symbol::intern(&self.lexeme), span)
    }

    /// Report a diagnostic that does not turn the current token into an
    /// ERROR token (escape failures inside literals, comment problems).
    pub(crate) fn report(&self, code: DiagnosticCode, span: Span, message: impl Into<String>) {
        DiagnosticBuilder::error(message)
            .code(code)
            .span(span)
            .emit(self.handler);
    }

    /// The file being lexed.
    pub(crate) fn file(&self) -> FileId {
        self.reader.file()
    }

    /// The line map the reader registers lines with.
    pub(crate) fn source_map(&self) -> &'h SourceMap {
        self.reader.source_map()
    }

    pub(crate) fn reader(&mut self) -> &mut SourceReader<'h> {
        &mut self.reader
    }
}

impl Produce for TokenBuilder<'_> {
    type Item = Token;

    fn produce(&mut self) -> Token {
        self.build_token()
    }
}
