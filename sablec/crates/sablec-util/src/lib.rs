//! sablec-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by every phase of the
//! Sable compiler: source spans and the line map, string interning,
//! diagnostics, and typed index vectors.
//!
//! # Module Overview
//!
//! - [`span`] - [`Span`], [`FileId`] and the [`SourceMap`] (line map) used
//!   to attribute byte ranges to files, lines and columns
//! - [`symbol`] - [`Symbol`], a 4-byte handle to a globally interned string
//! - [`diagnostic`] - [`Handler`], [`Diagnostic`] and the fluent
//!   [`DiagnosticBuilder`] for structured error reporting
//! - [`index_vec`] - [`IndexVec`], a vector indexed by a typed id
//! - [`error`] - `thiserror` error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use sablec_util::{Handler, DiagnosticBuilder, SourceMap, Span};
//!
//! let map = SourceMap::new();
//! let file = map.add_file("main.sb", Some("let x = 42;".to_string()));
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("something went wrong")
//!     .span(Span::with_file(4, 5, file, 1, 5))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;

// Re-export commonly used hash collections
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
