//! Source map for managing source files and computing source locations.
//!
//! The [`SourceMap`] is the line map consulted by diagnostics: it records
//! the byte offset at which every line of every file starts and resolves a
//! byte offset back to `(line, column)`.
//!
//! Files come in two flavors:
//!
//! - files created from an in-memory buffer carry their full content, so
//!   line starts are precomputed and diagnostic snippets can be rendered;
//! - files lexed from a stream (a file handle or standard input) carry no
//!   content; the lexer registers line starts through [`SourceMap::start_line`]
//!   as it consumes newlines, and snippet rendering is unavailable.
//!
//! The map uses interior mutability (the same pattern as
//! [`Handler`](crate::diagnostic::Handler)) so that the lexer can register
//! lines while diagnostics hold a shared reference. A lexing pass is
//! single-threaded, so a `RefCell` suffices.

use std::cell::RefCell;

use super::{FileId, Span};
use crate::error::{SourceMapError, SourceMapResult};
use crate::index_vec::IndexVec;

/// A source file entry in the line map
#[derive(Debug)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name; "-" for standard input)
    name: String,
    /// Full content, present only for in-memory input
    content: Option<String>,
    /// Byte offsets at which each line starts; always begins with 0 and is
    /// strictly increasing
    line_starts: Vec<usize>,
    /// Widest column observed so far, used to size rendering buffers
    max_column: u32,
}

impl SourceFile {
    fn new(id: FileId, name: String, content: Option<String>) -> Self {
        let line_starts = match &content {
            Some(text) => Self::compute_line_starts(text),
            None => vec![0],
        };
        Self {
            id,
            name,
            content,
            line_starts,
            max_column: 0,
        }
    }

    /// Compute line start offsets from full content
    fn compute_line_starts(content: &str) -> Vec<usize> {
        let mut line_starts = vec![0];
        for (i, byte) in content.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        line_starts
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content, if this file was created from a buffer
    #[inline]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Number of lines recorded so far
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to 1-based (line, column) coordinates
    ///
    /// Column is measured in bytes from the start of the line. Offsets past
    /// the last recorded line start resolve into that last line.
    pub fn line_col(&self, offset: usize) -> (u32, u32) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let col = offset - self.line_starts[line] + 1;
        (line as u32 + 1, col as u32)
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// Returns `None` for streamed files and out-of-range lines.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let content = self.content.as_deref()?;
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line as usize - 1)?;
        let end = self
            .line_starts
            .get(line as usize)
            .copied()
            .unwrap_or(content.len());
        Some(content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        let content = self
            .content
            .as_deref()
            .ok_or_else(|| SourceMapError::NoContent(self.name.clone()))?;
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: content.len(),
                span_start: start,
                span_end: end,
            });
        }
        if !content.is_char_boundary(start) || !content.is_char_boundary(end) {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        Ok(&content[start..end])
    }
}

/// The line map: manages source files and resolves byte offsets
///
/// # Examples
///
/// ```
/// use sablec_util::span::SourceMap;
///
/// let map = SourceMap::new();
/// let file = map.add_file("main.sb", Some("let x = 1;\nlet y = 2;".to_string()));
/// assert_eq!(map.line_col(file, 11), Some((2, 1)));
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: RefCell<IndexVec<FileId, SourceFile>>,
}

impl SourceMap {
    /// Create a new empty source map
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new source file
    ///
    /// Pass `Some(content)` for in-memory input (line starts precomputed,
    /// snippets available) and `None` for streamed input (line starts are
    /// registered by the lexer via [`SourceMap::start_line`]).
    pub fn add_file(&self, name: impl Into<String>, content: Option<String>) -> FileId {
        let mut files = self.files.borrow_mut();
        let id = FileId(files.len());
        files.push(SourceFile::new(id, name.into(), content));
        id
    }

    /// Register the start of a new line at `offset`
    ///
    /// Called by the lexer each time it consumes a newline. Offsets at or
    /// before the last recorded line start are ignored, so files with
    /// precomputed line tables are unaffected.
    pub fn start_line(&self, file: FileId, offset: usize) {
        let mut files = self.files.borrow_mut();
        let Some(entry) = files.get_mut(file) else {
            return;
        };
        let last = *entry.line_starts.last().unwrap_or(&0);
        if offset > last {
            entry.line_starts.push(offset);
        }
    }

    /// Record that a column beyond the current widest was observed
    ///
    /// Purely an allocation hint: the widest column sizes the buffers used
    /// when rendering caret lines in [`SourceMap::format_span`].
    pub fn note_column(&self, file: FileId, column: u32) {
        let mut files = self.files.borrow_mut();
        if let Some(entry) = files.get_mut(file) {
            if column > entry.max_column {
                entry.max_column = column;
            }
        }
    }

    /// Get the name of a file
    pub fn file_name(&self, file: FileId) -> Option<String> {
        let files = self.files.borrow();
        files.get(file).map(|f| f.name().to_string())
    }

    /// Number of files in the map
    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.borrow().len()
    }

    /// Number of lines recorded for a file
    pub fn line_count(&self, file: FileId) -> Option<usize> {
        let files = self.files.borrow();
        files.get(file).map(SourceFile::line_count)
    }

    /// Resolve a byte offset to 1-based (line, column)
    pub fn line_col(&self, file: FileId, offset: usize) -> Option<(u32, u32)> {
        let files = self.files.borrow();
        files.get(file).map(|f| f.line_col(offset))
    }

    /// Run a closure against a file entry
    ///
    /// This is the borrow-friendly accessor: the `RefCell` borrow is held
    /// only for the duration of the closure.
    pub fn with_file<R>(&self, file: FileId, f: impl FnOnce(&SourceFile) -> R) -> Option<R> {
        let files = self.files.borrow();
        files.get(file).map(f)
    }

    /// Convert a span to a human-readable string with source context
    ///
    /// Returns `None` if the span's file is unknown or carries no content.
    pub fn format_span(&self, span: Span) -> Option<String> {
        self.with_file(span.file_id, |file| {
            let line = file.line_text(span.line)?;
            let line_num_width = file.line_count().to_string().len().max(3);

            let mut result = String::with_capacity(
                file.name.len() + line.len() + file.max_column as usize + 64,
            );
            result.push_str(&format!(
                "--> {}:{}:{}\n",
                file.name(),
                span.line,
                span.column
            ));
            result.push_str(&format!(
                "{:>width$} | {}\n",
                span.line,
                line,
                width = line_num_width
            ));
            result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

            let underline_start = (span.column as usize).saturating_sub(1);
            let underline_len = span.len().max(1);
            for _ in 0..underline_start {
                result.push(' ');
            }
            for _ in 0..underline_len {
                result.push('^');
            }
            Some(result)
        })?
    }
}
