//! Trivia handling: whitespace, the byte-order mark, and comments.

use sablec_util::DiagnosticCode;

use super::TokenBuilder;

const MAX_COMMENT_DEPTH: u32 = 100;

impl TokenBuilder<'_> {
    /// Skips whitespace and comments ahead of the next token.
    ///
    /// On the very first call this also skips a UTF-8 byte-order mark at
    /// the start of the input.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.reader().peek_char(0) == Some('\u{FEFF}') {
                self.reader().skip();
            }
        }

        loop {
            match self.peek(0) {
                Some(c) if c.is_whitespace() => {
                    self.reader().skip();
                }
                Some('/') if self.peek(1) == Some('/') => {
                    self.skip_line_comment();
                }
                Some('/') if self.peek(1) == Some('*') => {
                    self.skip_block_comment();
                }
                _ => return,
            }
        }
    }

    /// Skips a line comment (from `//` to end of line).
    fn skip_line_comment(&mut self) {
        self.reader().skip();
        self.reader().skip();
        while let Some(c) = self.reader().peek_char(0) {
            if c == '\n' {
                break;
            }
            self.reader().skip();
        }
    }

    /// Skips a block comment, honoring nesting up to a fixed depth.
    fn skip_block_comment(&mut self) {
        let start = self.mark();
        self.reader().skip();
        self.reader().skip();
        let mut depth: u32 = 1;

        loop {
            if depth > MAX_COMMENT_DEPTH {
                self.report(
                    DiagnosticCode::E_LEX_UNTERMINATED_COMMENT,
                    self.span_from(start),
                    format!("block comment nesting exceeds {MAX_COMMENT_DEPTH} levels"),
                );
                return;
            }
            match (self.peek(0), self.peek(1)) {
                (Some('/'), Some('*')) => {
                    self.reader().skip();
                    self.reader().skip();
                    depth += 1;
                }
                (Some('*'), Some('/')) => {
                    self.reader().skip();
                    self.reader().skip();
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                (Some(_), _) => {
                    self.reader().skip();
                }
                (None, _) => {
                    self.report(
                        DiagnosticCode::E_LEX_UNTERMINATED_COMMENT,
                        self.span_from(start),
                        "unterminated block comment",
                    );
                    return;
                }
            }
        }
    }
}
