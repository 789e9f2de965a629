//! String interner implementation.
//!
//! The table maps strings to dense `u32` indices. Forward lookup (string →
//! index) goes through a `DashMap` keyed by the interned `&'static str`, so
//! concurrent interning never blocks on a global lock in the hit path.
//! Reverse lookup (index → string) reads a `parking_lot::RwLock<Vec>`,
//! giving O(1) `Symbol::as_str`.
//!
//! Interned strings are boxed and leaked to obtain `'static` lifetime.
//! They are never removed; the table lives for the program duration.

use std::sync::LazyLock;

use dashmap::DashMap;
use parking_lot::RwLock;

use super::Symbol;

/// Keywords and literal suffixes pre-interned at startup so the lexer's hot
/// path never allocates for them.
const KNOWN_STRINGS: &[&str] = &[
    "",
    // Keywords
    "as", "async", "await", "break", "const", "continue", "crate", "dyn",
    "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Numeric literal suffixes
    "i8", "i16", "i32", "i64", "i128", "isize",
    "u8", "u16", "u32", "u64", "u128", "usize",
    "f32", "f64",
];

/// Global string table instance
///
/// Initialized on first use; all known keywords and suffixes are interned
/// during initialization so they have stable, low indices.
pub static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(|| {
    let table = StringTable::new();
    for s in KNOWN_STRINGS {
        table.intern(s);
    }
    table
});

/// Thread-safe string table
pub struct StringTable {
    /// Forward map: interned string → index
    map: DashMap<&'static str, u32>,

    /// Reverse table: index → interned string
    strings: RwLock<Vec<&'static str>>,
}

impl StringTable {
    fn new() -> Self {
        Self {
            map: DashMap::with_capacity(256),
            strings: RwLock::new(Vec::with_capacity(256)),
        }
    }

    /// Intern a string, returning its symbol
    ///
    /// Fast path: a read of the forward map. Slow path: takes the reverse
    /// table's write lock, re-checks (another thread may have inserted the
    /// same string in between), then allocates.
    pub fn intern(&self, string: &str) -> Symbol {
        if let Some(index) = self.map.get(string) {
            return Symbol::from_index(*index);
        }

        let mut strings = self.strings.write();
        // Re-check under the lock: the insert may have raced.
        if let Some(index) = self.map.get(string) {
            return Symbol::from_index(*index);
        }

        let interned: &'static str = Box::leak(string.to_string().into_boxed_str());
        let index = u32::try_from(strings.len()).expect("string table overflow");
        strings.push(interned);
        self.map.insert(interned, index);
        Symbol::from_index(index)
    }

    /// Get the string for a symbol
    pub fn get(&self, symbol: Symbol) -> Option<&'static str> {
        self.strings.read().get(symbol.as_u32() as usize).copied()
    }

    /// Number of distinct interned strings
    pub fn len(&self) -> usize {
        self.strings.read().len()
    }

    /// Returns true if nothing has been interned (never the case once the
    /// known strings are initialized)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_known_strings_preinterned() {
        // Pre-interned strings occupy the low, stable indices.
        for s in ["", "fn", "u32", "while", "f64"] {
            let sym = STRING_TABLE.intern(s);
            assert!((sym.as_u32() as usize) < KNOWN_STRINGS.len());
        }
    }

    #[test]
    fn test_intern_roundtrip() {
        let sym = STRING_TABLE.intern("interner_roundtrip");
        assert_eq!(STRING_TABLE.get(sym), Some("interner_roundtrip"));
    }

    #[test]
    fn test_intern_is_idempotent() {
        let a = STRING_TABLE.intern("idempotent_string");
        let b = STRING_TABLE.intern("idempotent_string");
        assert_eq!(a, b);
        assert_eq!(STRING_TABLE.get(a), STRING_TABLE.get(b));
    }

    #[test]
    fn test_concurrent_same_string() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| STRING_TABLE.intern("concurrent_same")))
            .collect();
        let symbols: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for sym in &symbols[1..] {
            assert_eq!(symbols[0], *sym);
        }
    }

    #[test]
    fn test_concurrent_distinct_strings() {
        let handles: Vec<_> = (0..8)
            .map(|i| thread::spawn(move || STRING_TABLE.intern(&format!("concurrent_{i}"))))
            .collect();
        let symbols: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for i in 0..symbols.len() {
            for j in (i + 1)..symbols.len() {
                assert_ne!(symbols[i], symbols[j]);
            }
        }
    }

    #[test]
    fn test_long_string() {
        let long = "x".repeat(10_000);
        let sym = STRING_TABLE.intern(&long);
        assert_eq!(STRING_TABLE.get(sym), Some(long.as_str()));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StringTable>();
    }
}
