//! Symbol module - String interning for efficient identifier handling.
//!
//! This module provides the [`Symbol`] type, a compact (4-byte) handle to a
//! string stored in a global table. Interning gives O(1) equality and hash
//! for identifiers, keywords and lexemes that repeat throughout a source
//! file, at the cost of never deallocating the stored strings (bounded by
//! the amount of distinct text in the compiled sources).
//!
//! # Thread Safety
//!
//! The interner is `Send + Sync`: lookups go through a lock-free `DashMap`
//! and the reverse table is guarded by a `parking_lot::RwLock`. Independent
//! lexer instances on different threads can intern concurrently.
//!
//! # Examples
//!
//! ```
//! use sablec_util::symbol::Symbol;
//!
//! let a = Symbol::intern("hello");
//! let b = Symbol::intern("hello");
//! let c = Symbol::intern("world");
//!
//! assert_eq!(a, b);
//! assert_ne!(a, c);
//! assert_eq!(a.as_str(), "hello");
//! ```

mod interner;

pub use interner::STRING_TABLE;

use std::fmt;

use static_assertions::assert_eq_size;

/// A 4-byte handle to an interned string
///
/// Comparison and hashing operate on the index only. The string itself is
/// recovered with [`Symbol::as_str`], an O(1) table lookup.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    /// Index into the global string table
    index: u32,
}

assert_eq_size!(Symbol, u32);

impl Symbol {
    /// Intern a string, returning its symbol
    ///
    /// Interning the same string twice returns the same symbol.
    pub fn intern(string: &str) -> Self {
        STRING_TABLE.intern(string)
    }

    /// The interned empty string
    pub fn empty() -> Self {
        Self::intern("")
    }

    /// Get the string this symbol stands for
    ///
    /// # Panics
    ///
    /// Panics if the symbol was forged with an out-of-range index; symbols
    /// obtained from [`Symbol::intern`] always resolve.
    pub fn as_str(&self) -> &'static str {
        STRING_TABLE
            .get(*self)
            .unwrap_or_else(|| panic!("invalid symbol index {}", self.index))
    }

    /// Get the raw index value
    pub fn as_u32(&self) -> u32 {
        self.index
    }

    pub(crate) fn from_index(index: u32) -> Self {
        Self { index }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_string_same_symbol() {
        assert_eq!(Symbol::intern("abc"), Symbol::intern("abc"));
    }

    #[test]
    fn test_different_strings_different_symbols() {
        assert_ne!(Symbol::intern("abc"), Symbol::intern("abd"));
    }

    #[test]
    fn test_as_str_roundtrip() {
        let sym = Symbol::intern("roundtrip_test");
        assert_eq!(sym.as_str(), "roundtrip_test");
    }

    #[test]
    fn test_empty() {
        assert_eq!(Symbol::empty().as_str(), "");
    }

    #[test]
    fn test_display() {
        let sym = Symbol::intern("displayed");
        assert_eq!(format!("{}", sym), "displayed");
    }

    #[test]
    fn test_debug() {
        let sym = Symbol::intern("debugged");
        assert_eq!(format!("{:?}", sym), "Symbol(\"debugged\")");
    }

    #[test]
    fn test_unicode() {
        for s in ["日本語", "🦀", "ärger"] {
            assert_eq!(Symbol::intern(s).as_str(), s);
        }
    }
}
