//! Fluent builder API for diagnostics.
//!
//! [`DiagnosticBuilder`] assembles a [`Diagnostic`] step by step and either
//! returns it (`build`) or hands it straight to a [`Handler`] (`emit`).

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::Span;

/// A rendered source line attached to a diagnostic
///
/// # Examples
///
/// ```
/// use sablec_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("let x = 42;", 1, 5, 1).with_label("declared here");
/// let text = snippet.format();
/// assert!(text.contains("let x = 42;"));
/// assert!(text.contains("^"));
/// ```
#[derive(Clone, Debug)]
pub struct SourceSnippet {
    /// The source line text
    pub line: String,
    /// 1-based line number
    pub line_number: u32,
    /// 1-based column where the underline starts
    pub column: u32,
    /// Width of the underline in characters (at least 1 when rendered)
    pub width: usize,
    /// Optional label printed after the underline
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new snippet underlining `width` characters at `column`
    pub fn new(line: impl Into<String>, line_number: u32, column: u32, width: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            column,
            width,
            label: None,
        }
    }

    /// Create a snippet pointing at a single column
    pub fn point(line: impl Into<String>, line_number: u32, column: u32) -> Self {
        Self::new(line, line_number, column, 1)
    }

    /// Attach a label to the underline
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Render the snippet as gutter + line + caret line
    pub fn format(&self) -> String {
        let gutter = self.line_number.to_string();
        let width = gutter.len().max(3);

        let mut out = String::new();
        out.push_str(&format!("{:>width$} | {}\n", gutter, self.line, width = width));
        out.push_str(&format!("{:>width$} | ", "", width = width));
        for _ in 0..(self.column as usize).saturating_sub(1) {
            out.push(' ');
        }
        for _ in 0..self.width.max(1) {
            out.push('^');
        }
        if let Some(label) = &self.label {
            out.push(' ');
            out.push_str(label);
        }
        out
    }
}

/// Fluent builder for [`Diagnostic`]s
///
/// # Examples
///
/// ```
/// use sablec_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use sablec_util::span::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unknown escape sequence")
///     .code(DiagnosticCode::E_LEX_INVALID_ESCAPE)
///     .span(Span::new(3, 5, 1, 4))
///     .note("recognized escapes are \\n, \\t, \\r, \\\\, \\', \\\", \\0")
///     .emit(&handler);
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Start building a diagnostic at the given level
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Start building an error
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start building a warning
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the primary span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Attach a source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Finish building, returning the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Finish building and emit to a handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_error() {
        let diag = DiagnosticBuilder::error("msg").build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "msg");
        assert_eq!(diag.span, Span::DUMMY);
    }

    #[test]
    fn test_builder_warning() {
        let diag = DiagnosticBuilder::warning("msg").build();
        assert_eq!(diag.level, Level::Warning);
    }

    #[test]
    fn test_builder_full() {
        let diag = DiagnosticBuilder::error("bad token")
            .code(DiagnosticCode::E_LEX_UNRECOGNIZED_CHARACTER)
            .span(Span::new(1, 2, 1, 2))
            .note("a note")
            .help("a help")
            .snippet(SourceSnippet::point("x ` y", 1, 3))
            .build();
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEX_UNRECOGNIZED_CHARACTER));
        assert_eq!(diag.span.start, 1);
        assert_eq!(diag.notes, vec!["a note"]);
        assert_eq!(diag.helps, vec!["a help"]);
        assert_eq!(diag.snippets.len(), 1);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("emitted").emit(&handler);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_snippet_format_underline() {
        let snippet = SourceSnippet::new("let x = \"abc", 2, 9, 4);
        let text = snippet.format();
        assert!(text.contains("let x = \"abc"));
        assert!(text.contains("^^^^"));
        // Underline is positioned under column 9.
        let caret_line = text.lines().nth(1).unwrap();
        assert_eq!(caret_line.find('^'), caret_line.rfind('^').map(|i| i - 3));
    }

    #[test]
    fn test_snippet_point_and_label() {
        let snippet = SourceSnippet::point("abc", 1, 2).with_label("here");
        let text = snippet.format();
        assert!(text.ends_with("^ here"));
    }
}
