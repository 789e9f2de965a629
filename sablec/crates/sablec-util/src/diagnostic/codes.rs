//! Diagnostic codes for categorizing compiler errors and warnings.
//!
//! Codes follow the format `{prefix}{number}` (`E` for errors, `W` for
//! warnings, 4-digit zero-padded number). The `E11xx` range is reserved for
//! lexical errors.

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// # Examples
///
/// ```
/// use sablec_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::E_LEX_UNTERMINATED_LITERAL;
/// assert_eq!(code.prefix(), "E");
/// assert_eq!(code.as_str(), "E1101");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1101")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXICAL ERROR CODES (E1100-E1199)
    // =========================================================================

    /// E1101: Unterminated string, character or byte literal
    pub const E_LEX_UNTERMINATED_LITERAL: Self = Self::new("E", 1101);
    /// E1102: Unknown escape sequence in a literal
    pub const E_LEX_INVALID_ESCAPE: Self = Self::new("E", 1102);
    /// E1103: Unicode escape out of range or a surrogate
    pub const E_LEX_INVALID_UNICODE_ESCAPE: Self = Self::new("E", 1103);
    /// E1104: Unrecognized suffix on a numeric literal
    pub const E_LEX_INVALID_NUMERIC_SUFFIX: Self = Self::new("E", 1104);
    /// E1105: Raw string delimiter hash counts don't match
    pub const E_LEX_MISMATCHED_RAW_DELIMITERS: Self = Self::new("E", 1105);
    /// E1106: Character not recognized by any token rule
    pub const E_LEX_UNRECOGNIZED_CHARACTER: Self = Self::new("E", 1106);
    /// E1107: Non-ASCII content or escape in a byte literal
    pub const E_LEX_INVALID_BYTE_VALUE: Self = Self::new("E", 1107);
    /// E1108: Empty character literal
    pub const E_LEX_EMPTY_CHAR_LITERAL: Self = Self::new("E", 1108);
    /// E1109: Invalid UTF-8 byte sequence in the input
    pub const E_LEX_INVALID_UTF8: Self = Self::new("E", 1109);
    /// E1110: Numeric literal out of representable range
    pub const E_LEX_NUMERIC_OVERFLOW: Self = Self::new("E", 1110);
    /// E1111: Unterminated block comment
    pub const E_LEX_UNTERMINATED_COMMENT: Self = Self::new("E", 1111);
    /// E1112: I/O failure while reading the input
    pub const E_LEX_READ_FAILED: Self = Self::new("E", 1112);
    /// E1113: Numeric literal with a base prefix but no digits
    pub const E_LEX_NO_DIGITS: Self = Self::new("E", 1113);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_padding() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("W", 42).as_str(), "W0042");
        assert_eq!(DiagnosticCode::E_LEX_UNTERMINATED_LITERAL.as_str(), "E1101");
    }

    #[test]
    fn test_accessors() {
        let code = DiagnosticCode::E_LEX_INVALID_UTF8;
        assert_eq!(code.prefix(), "E");
        assert_eq!(code.number(), 1109);
    }

    #[test]
    fn test_lexical_codes_distinct() {
        let codes = [
            DiagnosticCode::E_LEX_UNTERMINATED_LITERAL,
            DiagnosticCode::E_LEX_INVALID_ESCAPE,
            DiagnosticCode::E_LEX_INVALID_UNICODE_ESCAPE,
            DiagnosticCode::E_LEX_INVALID_NUMERIC_SUFFIX,
            DiagnosticCode::E_LEX_MISMATCHED_RAW_DELIMITERS,
            DiagnosticCode::E_LEX_UNRECOGNIZED_CHARACTER,
            DiagnosticCode::E_LEX_INVALID_BYTE_VALUE,
            DiagnosticCode::E_LEX_EMPTY_CHAR_LITERAL,
            DiagnosticCode::E_LEX_INVALID_UTF8,
            DiagnosticCode::E_LEX_NUMERIC_OVERFLOW,
            DiagnosticCode::E_LEX_UNTERMINATED_COMMENT,
            DiagnosticCode::E_LEX_READ_FAILED,
            DiagnosticCode::E_LEX_NO_DIGITS,
        ];
        for i in 0..codes.len() {
            for j in (i + 1)..codes.len() {
                assert_ne!(codes[i], codes[j]);
            }
        }
    }

    #[test]
    fn test_display_matches_debug() {
        let code = DiagnosticCode::E_LEX_INVALID_ESCAPE;
        assert_eq!(format!("{}", code), format!("{:?}", code));
    }
}
