//! Operator and punctuation lexing.
//!
//! Maximal munch over the fixed 1-3 character spellings: the longest match
//! always wins, so `>>=` is one token and `>>` is one token even when the
//! parser will later want it split while closing nested generics. That
//! split is the Lexer's `split_current_token`, not a concern here.

use super::TokenBuilder;
use crate::token::{Token, TokenKind};

impl TokenBuilder<'_> {
    /// Handles: `+`, `+=`
    pub(crate) fn lex_plus(&mut self) -> Token {
        self.bump();
        if self.match_char('=') {
            self.finish(TokenKind::PlusEq)
        } else {
            self.finish(TokenKind::Plus)
        }
    }

    /// Handles: `-`, `->`, `-=`
    pub(crate) fn lex_minus(&mut self) -> Token {
        self.bump();
        if self.match_char('>') {
            self.finish(TokenKind::Arrow)
        } else if self.match_char('=') {
            self.finish(TokenKind::MinusEq)
        } else {
            self.finish(TokenKind::Minus)
        }
    }

    /// Handles: `*`, `*=`
    pub(crate) fn lex_star(&mut self) -> Token {
        self.bump();
        if self.match_char('=') {
            self.finish(TokenKind::StarEq)
        } else {
            self.finish(TokenKind::Star)
        }
    }

    /// Handles: `/`, `/=`
    ///
    /// Comments never reach this point; they are consumed as trivia before
    /// dispatch.
    pub(crate) fn lex_slash(&mut self) -> Token {
        self.bump();
        if self.match_char('=') {
            self.finish(TokenKind::SlashEq)
        } else {
            self.finish(TokenKind::Slash)
        }
    }

    /// Handles: `%`, `%=`
    pub(crate) fn lex_percent(&mut self) -> Token {
        self.bump();
        if self.match_char('=') {
            self.finish(TokenKind::PercentEq)
        } else {
            self.finish(TokenKind::Percent)
        }
    }

    /// Handles: `=`, `==`, `=>`
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.bump();
        if self.match_char('=') {
            self.finish(TokenKind::EqEq)
        } else if self.match_char('>') {
            self.finish(TokenKind::FatArrow)
        } else {
            self.finish(TokenKind::Eq)
        }
    }

    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.bump();
        if self.match_char('=') {
            self.finish(TokenKind::NotEq)
        } else {
            self.finish(TokenKind::Bang)
        }
    }

    /// Handles: `<`, `<=`, `<<`, `<<=`
    pub(crate) fn lex_less(&mut self) -> Token {
        self.bump();
        if self.match_char('=') {
            self.finish(TokenKind::LtEq)
        } else if self.match_char('<') {
            if self.match_char('=') {
                self.finish(TokenKind::ShlEq)
            } else {
                self.finish(TokenKind::Shl)
            }
        } else {
            self.finish(TokenKind::Lt)
        }
    }

    /// Handles: `>`, `>=`, `>>`, `>>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.bump();
        if self.match_char('=') {
            self.finish(TokenKind::GtEq)
        } else if self.match_char('>') {
            if self.match_char('=') {
                self.finish(TokenKind::ShrEq)
            } else {
                self.finish(TokenKind::Shr)
            }
        } else {
            self.finish(TokenKind::Gt)
        }
    }

    /// Handles: `&`, `&&`, `&=`
    pub(crate) fn lex_ampersand(&mut self) -> Token {
        self.bump();
        if self.match_char('&') {
            self.finish(TokenKind::AndAnd)
        } else if self.match_char('=') {
            self.finish(TokenKind::AmpersandEq)
        } else {
            self.finish(TokenKind::Ampersand)
        }
    }

    /// Handles: `|`, `||`, `|=`
    pub(crate) fn lex_pipe(&mut self) -> Token {
        self.bump();
        if self.match_char('|') {
            self.finish(TokenKind::OrOr)
        } else if self.match_char('=') {
            self.finish(TokenKind::PipeEq)
        } else {
            self.finish(TokenKind::Pipe)
        }
    }

    /// Handles: `^`, `^=`
    pub(crate) fn lex_caret(&mut self) -> Token {
        self.bump();
        if self.match_char('=') {
            self.finish(TokenKind::CaretEq)
        } else {
            self.finish(TokenKind::Caret)
        }
    }

    /// Handles: `:`, `::`
    pub(crate) fn lex_colon(&mut self) -> Token {
        self.bump();
        if self.match_char(':') {
            self.finish(TokenKind::ColonColon)
        } else {
            self.finish(TokenKind::Colon)
        }
    }

    /// Handles: `.`, `..`, `..=`, `...`
    pub(crate) fn lex_dot(&mut self) -> Token {
        self.bump();
        if self.match_char('.') {
            if self.match_char('=') {
                self.finish(TokenKind::DotDotEq)
            } else if self.match_char('.') {
                self.finish(TokenKind::DotDotDot)
            } else {
                self.finish(TokenKind::DotDot)
            }
        } else {
            self.finish(TokenKind::Dot)
        }
    }
}
