//! Number literal lexing.
//!
//! Decimal, hexadecimal (`0x`), octal (`0o`) and binary (`0b`) integers,
//! floats with fraction and exponent, interior `_` separators, and the
//! fixed suffix set. Suffix parsing is maximal munch: the whole
//! identifier-like run after the digits is the suffix candidate, and an
//! unknown candidate makes the entire literal an error token without
//! stopping the lex pass.

use sablec_util::DiagnosticCode;

use super::TokenBuilder;
use crate::error::LexErrorKind;
use crate::token::{Base, Suffix, Token, TokenKind};
use crate::unicode::{is_digit_in_base, is_ident_continue, is_ident_start};

impl TokenBuilder<'_> {
    /// Lexes a numeric literal.
    pub(crate) fn lex_number(&mut self) -> Token {
        if self.peek(0) == Some('0') {
            let base = match self.peek(1) {
                Some('x') | Some('X') => Some(Base::Hexadecimal),
                Some('o') | Some('O') => Some(Base::Octal),
                Some('b') | Some('B') => Some(Base::Binary),
                _ => None,
            };
            if let Some(base) = base {
                self.bump();
                self.bump();
                return self.lex_radix_integer(base);
            }
        }

        // Digits of the integer part, underscores stripped.
        let mut text = String::new();
        self.eat_digits(&mut text, 10);

        let mut is_float = false;

        // A `.` only joins the literal when a digit follows; `1.foo` must
        // stay integer-dot-identifier for method calls.
        if self.peek(0) == Some('.') && self.peek(1).is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.bump();
            text.push('.');
            self.eat_digits(&mut text, 10);
        }

        // The exponent marker only joins when digits follow the optional
        // sign; otherwise it begins a suffix candidate (`1e` is a literal
        // with the invalid suffix `e`).
        if matches!(self.peek(0), Some('e') | Some('E')) {
            let has_sign = matches!(self.peek(1), Some('+') | Some('-'));
            let digit_at = if has_sign { 2 } else { 1 };
            if self.peek(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                is_float = true;
                if let Some(marker) = self.bump() {
                    text.push(marker);
                }
                if has_sign {
                    if let Some(sign) = self.bump() {
                        text.push(sign);
                    }
                }
                self.eat_digits(&mut text, 10);
            }
        }

        let suffix = match self.parse_suffix() {
            Ok(suffix) => suffix,
            Err(token) => return token,
        };

        if is_float || suffix.is_some_and(Suffix::is_float) {
            if is_float {
                if let Some(s) = suffix {
                    if !s.is_float() {
                        return self.error_token(
                            LexErrorKind::InvalidNumericSuffix,
                            format!("integer suffix `{}` on a float literal", s.as_str()),
                        );
                    }
                }
            }
            let value = self.parse_float_text(&text);
            self.finish(TokenKind::Float { value, suffix })
        } else {
            let value = self.parse_int_text(&text, Base::Decimal);
            self.finish(TokenKind::Integer {
                value,
                base: Base::Decimal,
                suffix,
            })
        }
    }

    /// Lexes the digits of a `0x`/`0o`/`0b` literal, prefix already
    /// consumed, then the common suffix stage.
    fn lex_radix_integer(&mut self, base: Base) -> Token {
        let mut digits = String::new();
        self.eat_digits(&mut digits, base.radix());

        if digits.is_empty() {
            self.report(
                DiagnosticCode::E_LEX_NO_DIGITS,
                self.span(),
                format!("no digits after base-{} prefix", base.radix()),
            );
        }

        let suffix = match self.parse_suffix() {
            Ok(suffix) => suffix,
            Err(token) => return token,
        };
        if let Some(s) = suffix {
            if s.is_float() {
                return self.error_token(
                    LexErrorKind::InvalidNumericSuffix,
                    format!(
                        "float suffix `{}` on a base-{} integer literal",
                        s.as_str(),
                        base.radix()
                    ),
                );
            }
        }

        let value = self.parse_int_text(&digits, base);
        self.finish(TokenKind::Integer {
            value,
            base,
            suffix,
        })
    }

    /// Consumes digits of the given base plus `_` separators, pushing the
    /// digits (separators stripped) onto `out`.
    fn eat_digits(&mut self, out: &mut String, radix: u32) {
        while let Some(c) = self.peek(0) {
            if c == '_' {
                self.bump();
            } else if is_digit_in_base(c, radix) {
                self.bump();
                out.push(c);
            } else {
                break;
            }
        }
    }

    /// Parses the suffix stage by maximal munch.
    ///
    /// Consumes the whole identifier-like run after the digits; if it is
    /// not one of the known suffix spellings, the literal degrades to an
    /// `InvalidNumericSuffix` error token whose span still covers the
    /// consumed suffix.
    fn parse_suffix(&mut self) -> Result<Option<Suffix>, Token> {
        let Some(c) = self.peek(0) else {
            return Ok(None);
        };
        if !is_ident_start(c) {
            return Ok(None);
        }

        let mut candidate = String::new();
        while let Some(c) = self.peek(0) {
            if !is_ident_continue(c) {
                break;
            }
            candidate.push(c);
            self.bump();
        }

        match Suffix::from_str(&candidate) {
            Some(suffix) => Ok(Some(suffix)),
            None => Err(self.error_token(
                LexErrorKind::InvalidNumericSuffix,
                format!("invalid suffix `{candidate}` on numeric literal"),
            )),
        }
    }

    fn parse_int_text(&mut self, digits: &str, base: Base) -> u128 {
        if digits.is_empty() {
            return 0;
        }
        match u128::from_str_radix(digits, base.radix()) {
            Ok(value) => value,
            Err(_) => {
                self.report(
                    DiagnosticCode::E_LEX_NUMERIC_OVERFLOW,
                    self.span(),
                    "integer literal too large",
                );
                0
            }
        }
    }

    fn parse_float_text(&mut self, text: &str) -> f64 {
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                self.report(
                    DiagnosticCode::E_LEX_NUMERIC_OVERFLOW,
                    self.span(),
                    format!("float literal `{text}` is not representable"),
                );
                0.0
            }
        }
    }
}
