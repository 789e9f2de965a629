//! Lexical error taxonomy.
//!
//! Every malformed-input condition the lexer can hit degrades to a
//! recoverable ERROR token carrying one of these kinds; the lex pass always
//! reaches end-of-input. The kinds map one-to-one onto diagnostic codes in
//! the `E11xx` range.

use sablec_util::DiagnosticCode;
use thiserror::Error;

/// The kind of a lexical error token.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A string, character or byte literal ran into end-of-input (or, for
    /// character literals, the closing quote never appeared).
    #[error("unterminated literal")]
    UnterminatedLiteral,

    /// A backslash escape with an unrecognized escape character.
    #[error("unknown escape sequence")]
    InvalidEscape,

    /// A `\u{...}` escape that is out of range, a surrogate, or malformed.
    #[error("invalid unicode escape")]
    InvalidUnicodeEscape,

    /// An identifier-like suffix on a numeric literal that is not one of
    /// the known suffix spellings.
    #[error("invalid numeric literal suffix")]
    InvalidNumericSuffix,

    /// A raw string whose closing quote was never followed by the required
    /// number of `#` characters before end-of-input.
    #[error("mismatched raw string delimiters")]
    MismatchedRawStringDelimiters,

    /// A character no token rule recognizes.
    #[error("unrecognized character")]
    UnrecognizedCharacter,

    /// Non-ASCII content or a non-byte escape in a byte literal.
    #[error("byte literal out of range")]
    InvalidByteValue,

    /// The empty character literal `''`.
    #[error("empty character literal")]
    EmptyCharLiteral,
}

impl LexErrorKind {
    /// The diagnostic code this error kind reports under.
    pub fn code(self) -> DiagnosticCode {
        match self {
            LexErrorKind::UnterminatedLiteral => DiagnosticCode::E_LEX_UNTERMINATED_LITERAL,
            LexErrorKind::InvalidEscape => DiagnosticCode::E_LEX_INVALID_ESCAPE,
            LexErrorKind::InvalidUnicodeEscape => DiagnosticCode::E_LEX_INVALID_UNICODE_ESCAPE,
            LexErrorKind::InvalidNumericSuffix => DiagnosticCode::E_LEX_INVALID_NUMERIC_SUFFIX,
            LexErrorKind::MismatchedRawStringDelimiters => {
                DiagnosticCode::E_LEX_MISMATCHED_RAW_DELIMITERS
            }
            LexErrorKind::UnrecognizedCharacter => DiagnosticCode::E_LEX_UNRECOGNIZED_CHARACTER,
            LexErrorKind::InvalidByteValue => DiagnosticCode::E_LEX_INVALID_BYTE_VALUE,
            LexErrorKind::EmptyCharLiteral => DiagnosticCode::E_LEX_EMPTY_CHAR_LITERAL,
        }
    }
}
