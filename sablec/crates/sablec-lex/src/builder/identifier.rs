//! Identifier and keyword lexing.

use sablec_util::Symbol;

use super::TokenBuilder;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::unicode::is_ident_continue;

impl TokenBuilder<'_> {
    /// Lexes a maximal identifier run, then classifies it against the
    /// reserved-word table.
    ///
    /// A lone `_` is the wildcard token, not an identifier.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while self.peek(0).is_some_and(is_ident_continue) {
            self.bump();
        }

        if self.lexeme == "_" {
            return self.finish(TokenKind::Underscore);
        }

        match keyword_from_ident(&self.lexeme) {
            Some(kind) => self.finish(kind),
            None => {
                let sym = Symbol::intern(&self.lexeme);
                self.finish(TokenKind::Ident(sym))
            }
        }
    }

    /// Lexes the identifier part of `r#ident`, with `r#` already consumed.
    ///
    /// Raw identifiers bypass keyword classification entirely: `r#type` is
    /// an identifier named `type`, never the keyword.
    pub(crate) fn lex_raw_identifier(&mut self) -> Token {
        let mut name = String::new();
        while let Some(c) = self.peek(0) {
            if !is_ident_continue(c) {
                break;
            }
            name.push(c);
            self.bump();
        }
        let sym = Symbol::intern(&name);
        self.finish(TokenKind::RawIdent(sym))
    }
}
