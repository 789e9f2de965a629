//! String, character and byte literal lexing.
//!
//! Covers `"..."` strings, `r"..."`/`r#"..."#` raw strings, `'x'` chars,
//! `'lifetime` annotations, and the `b`-prefixed byte variants, plus the
//! escape processing they share. Escape failures are local: the enclosing
//! literal is still produced and the failure is reported with the escape's
//! exact span. Unterminated literals degrade to a single ERROR token
//! spanning from the opening quote to wherever scanning stopped.

use sablec_util::Symbol;

use super::{Mark, TokenBuilder};
use crate::error::LexErrorKind;
use crate::token::{Token, TokenKind};
use crate::unicode::{hex_digit_to_value, is_ident_continue, is_ident_start, is_valid_scalar};

impl TokenBuilder<'_> {
    /// Lexes a string literal, processing escapes inline.
    pub(crate) fn lex_string(&mut self) -> Token {
        self.bump();

        let mut value = String::new();
        loop {
            match self.peek(0) {
                None => {
                    return self.error_token(
                        LexErrorKind::UnterminatedLiteral,
                        "unterminated string literal",
                    );
                }
                Some('"') => {
                    self.bump();
                    break;
                }
                Some('\\') => {
                    if let Some(c) = self.parse_escape(false) {
                        value.push(c);
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.bump();
                }
            }
        }

        let sym = Symbol::intern(&value);
        self.finish(TokenKind::Str(sym))
    }

    /// Lexes a raw (or raw byte) string literal, `r` under the cursor.
    ///
    /// Counts leading `#` characters; the body is taken verbatim until a
    /// `"` immediately followed by exactly that many `#`. A lone `r#`
    /// followed by an identifier start is a raw identifier instead.
    pub(crate) fn lex_raw_string(&mut self, byte: bool) -> Token {
        self.bump();

        let mut hashes: usize = 0;
        while self.peek(0) == Some('#') {
            hashes += 1;
            self.bump();
        }
        if hashes > 255 {
            return self.error_token(
                LexErrorKind::MismatchedRawStringDelimiters,
                format!("raw string delimiter uses {hashes} `#` characters, at most 255 allowed"),
            );
        }

        match self.peek(0) {
            Some('"') => {
                self.bump();
            }
            Some(c) if !byte && hashes == 1 && is_ident_start(c) => {
                return self.lex_raw_identifier();
            }
            _ => {
                return self.error_token(
                    LexErrorKind::MismatchedRawStringDelimiters,
                    "expected `\"` after raw string prefix",
                );
            }
        }

        let mut value = String::new();
        loop {
            match self.peek(0) {
                None => {
                    let message = if hashes == 0 {
                        "unterminated raw string literal".to_string()
                    } else {
                        format!("unterminated raw string: expected `\"` followed by {hashes} `#`")
                    };
                    return self
                        .error_token(LexErrorKind::MismatchedRawStringDelimiters, message);
                }
                Some('"') if self.closes_raw(hashes) => {
                    self.bump();
                    for _ in 0..hashes {
                        self.bump();
                    }
                    break;
                }
                Some(c) => {
                    value.push(c);
                    self.bump();
                }
            }
        }

        if byte {
            if let Some(bad) = value.chars().find(|c| !c.is_ascii()) {
                return self.error_token(
                    LexErrorKind::InvalidByteValue,
                    format!(
                        "non-ASCII character `{}` in raw byte string literal",
                        bad.escape_default()
                    ),
                );
            }
            self.finish(TokenKind::RawByteStr(value.into_bytes()))
        } else {
            let sym = Symbol::intern(&value);
            self.finish(TokenKind::RawStr(sym))
        }
    }

    /// True if the `"` under the cursor is followed by exactly the
    /// required hash count (checked by lookahead, never consuming).
    fn closes_raw(&mut self, hashes: usize) -> bool {
        (1..=hashes).all(|i| self.peek(i) == Some('#'))
    }

    /// Lexes the `'`-introduced forms: a character literal or a lifetime.
    ///
    /// The two are disambiguated by bounded lookahead: a body codepoint
    /// followed by a closing `'` is a character literal; an identifier
    /// start that does not complete a one-codepoint literal begins a
    /// lifetime, which requires no closing quote.
    pub(crate) fn lex_char_or_lifetime(&mut self) -> Token {
        self.bump();

        match self.peek(0) {
            None => self.error_token(
                LexErrorKind::UnterminatedLiteral,
                "unterminated character literal",
            ),
            Some('\\') => {
                let c = self.parse_escape(false).unwrap_or('\u{FFFD}');
                if self.match_char('\'') {
                    self.finish(TokenKind::Char(c))
                } else {
                    self.recover_unterminated_char()
                }
            }
            Some('\'') => {
                self.bump();
                self.error_token(LexErrorKind::EmptyCharLiteral, "empty character literal")
            }
            Some(c) if self.peek(1) == Some('\'') => {
                self.bump();
                self.bump();
                self.finish(TokenKind::Char(c))
            }
            Some(c) if is_ident_start(c) => {
                let mut name = String::new();
                while let Some(c) = self.peek(0) {
                    if !is_ident_continue(c) {
                        break;
                    }
                    name.push(c);
                    self.bump();
                }
                self.finish(TokenKind::Lifetime(Symbol::intern(&name)))
            }
            Some(_) => {
                self.bump();
                self.recover_unterminated_char()
            }
        }
    }

    /// Lexes the `b`-prefixed literal forms, `b` under the cursor.
    pub(crate) fn lex_byte_literal(&mut self) -> Token {
        self.bump();
        match self.peek(0) {
            Some('\'') => self.lex_byte_char(),
            Some('"') => self.lex_byte_string(),
            // Dispatch guarantees `br"` / `br#` here.
            _ => self.lex_raw_string(true),
        }
    }

    /// Lexes `b'...'`, restricting the decoded value to one byte.
    fn lex_byte_char(&mut self) -> Token {
        self.bump();

        match self.peek(0) {
            None => self.error_token(
                LexErrorKind::UnterminatedLiteral,
                "unterminated byte literal",
            ),
            Some('\'') => {
                self.bump();
                self.error_token(LexErrorKind::EmptyCharLiteral, "empty byte literal")
            }
            Some('\\') => {
                // Byte-context escapes never decode past 0xFF.
                let c = self.parse_escape(true).unwrap_or('\0');
                if self.match_char('\'') {
                    self.finish(TokenKind::ByteChar(c as u8))
                } else {
                    self.recover_unterminated_char()
                }
            }
            Some(c) => {
                self.bump();
                if !self.match_char('\'') {
                    return self.recover_unterminated_char();
                }
                if c.is_ascii() {
                    self.finish(TokenKind::ByteChar(c as u8))
                } else {
                    self.error_token(
                        LexErrorKind::InvalidByteValue,
                        format!(
                            "non-ASCII character `{}` in byte literal",
                            c.escape_default()
                        ),
                    )
                }
            }
        }
    }

    /// Lexes `b"..."`, restricting content and escapes to single bytes.
    fn lex_byte_string(&mut self) -> Token {
        self.bump();

        let mut value = Vec::new();
        loop {
            match self.peek(0) {
                None => {
                    return self.error_token(
                        LexErrorKind::UnterminatedLiteral,
                        "unterminated byte string literal",
                    );
                }
                Some('"') => {
                    self.bump();
                    break;
                }
                Some('\\') => {
                    if let Some(c) = self.parse_escape(true) {
                        value.push(c as u8);
                    }
                }
                Some(c) if c.is_ascii() => {
                    value.push(c as u8);
                    self.bump();
                }
                Some(c) => {
                    let at = self.mark();
                    self.bump();
                    self.report(
                        LexErrorKind::InvalidByteValue.code(),
                        self.span_from(at),
                        format!(
                            "non-ASCII character `{}` in byte string literal",
                            c.escape_default()
                        ),
                    );
                }
            }
        }

        self.finish(TokenKind::ByteStr(value))
    }

    /// Skips to the end of a broken character literal: past the closing
    /// quote if one appears on this line, otherwise up to the newline or
    /// end of input.
    fn recover_unterminated_char(&mut self) -> Token {
        while let Some(c) = self.peek(0) {
            if c == '\n' {
                break;
            }
            self.bump();
            if c == '\'' {
                break;
            }
        }
        self.error_token(
            LexErrorKind::UnterminatedLiteral,
            "unterminated character literal",
        )
    }

    /// Parses one escape sequence, backslash under the cursor.
    ///
    /// Returns the decoded codepoint, or `None` when the escape is
    /// malformed (already reported) or the input ended. In byte context
    /// (`b'...'`, `b"..."`) the result is always <= 0xFF and `\u` escapes
    /// are rejected.
    pub(crate) fn parse_escape(&mut self, byte_context: bool) -> Option<char> {
        let start = self.mark();
        self.bump();

        let c = self.peek(0)?;
        match c {
            'n' => {
                self.bump();
                Some('\n')
            }
            't' => {
                self.bump();
                Some('\t')
            }
            'r' => {
                self.bump();
                Some('\r')
            }
            '\\' => {
                self.bump();
                Some('\\')
            }
            '\'' => {
                self.bump();
                Some('\'')
            }
            '"' => {
                self.bump();
                Some('"')
            }
            '0' => {
                self.bump();
                Some('\0')
            }
            'x' => {
                self.bump();
                self.parse_hex_escape(start)
            }
            'u' => {
                self.bump();
                self.parse_unicode_escape(start, byte_context)
            }
            _ => {
                self.bump();
                self.report(
                    LexErrorKind::InvalidEscape.code(),
                    self.span_from(start),
                    format!("unknown escape sequence `\\{}`", c.escape_default()),
                );
                None
            }
        }
    }

    /// Parses the two hex digits of a `\x` escape.
    fn parse_hex_escape(&mut self, start: Mark) -> Option<char> {
        let mut value: u32 = 0;
        for _ in 0..2 {
            let digit = self.peek(0).and_then(hex_digit_to_value);
            let Some(digit) = digit else {
                self.report(
                    LexErrorKind::InvalidEscape.code(),
                    self.span_from(start),
                    "`\\x` escape expects exactly two hex digits",
                );
                return None;
            };
            self.bump();
            value = value * 16 + u32::from(digit);
        }
        char::from_u32(value)
    }

    /// Parses the `{...}` body of a `\u` escape.
    ///
    /// Out-of-range and surrogate values are reported and decode to
    /// U+FFFD so scanning continues past the malformed escape.
    fn parse_unicode_escape(&mut self, start: Mark, byte_context: bool) -> Option<char> {
        if !self.match_char('{') {
            self.report(
                LexErrorKind::InvalidUnicodeEscape.code(),
                self.span_from(start),
                "`\\u` escape expects `{` followed by 1-6 hex digits",
            );
            return None;
        }

        let mut digits = 0usize;
        let mut value: u32 = 0;
        while let Some(c) = self.peek(0) {
            let Some(digit) = hex_digit_to_value(c) else {
                break;
            };
            self.bump();
            digits += 1;
            if digits <= 6 {
                value = value * 16 + u32::from(digit);
            }
        }

        if !self.match_char('}') {
            self.report(
                LexErrorKind::InvalidUnicodeEscape.code(),
                self.span_from(start),
                "unterminated `\\u` escape",
            );
            return None;
        }
        if digits == 0 {
            self.report(
                LexErrorKind::InvalidUnicodeEscape.code(),
                self.span_from(start),
                "`\\u` escape has no hex digits",
            );
            return None;
        }
        if byte_context {
            self.report(
                LexErrorKind::InvalidByteValue.code(),
                self.span_from(start),
                "`\\u` escapes are not allowed in byte literals",
            );
            return None;
        }
        if digits > 6 || !is_valid_scalar(value) {
            self.report(
                LexErrorKind::InvalidUnicodeEscape.code(),
                self.span_from(start),
                format!("invalid unicode escape value U+{value:X}"),
            );
            return Some('\u{FFFD}');
        }

        char::from_u32(value)
    }
}
