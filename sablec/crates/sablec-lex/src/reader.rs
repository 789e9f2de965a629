//! Source input and codepoint-level reading.
//!
//! [`SourceInput`] owns the byte source (a file handle, standard input, or
//! an in-memory buffer). [`Utf8Decoder`] decodes it lazily, one codepoint
//! at a time, recovering from invalid byte sequences without aborting the
//! stream. [`SourceReader`] buffers decoded codepoints in a
//! [`BufferedQueue`] for arbitrary-depth lookahead and tracks the
//! line/column of the consumption cursor, registering line starts with the
//! line map as it goes.
//!
//! # Resource ownership
//!
//! The byte source is exclusively owned: moving a `SourceInput` (or the
//! reader or lexer that owns it) transfers the handle, and `Drop` releases
//! it exactly once on every exit path. In-memory input is copied into the
//! reader, so it has no lifetime relationship with the caller's buffer.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};

use sablec_util::{DiagnosticBuilder, DiagnosticCode, FileId, Handler, SourceMap, Span};

use crate::queue::{BufferedQueue, Produce};

/// Column width assumed per line when sizing line-map storage. Lines wider
/// than the current hint report their width to the line map and double the
/// hint, so the hint is crossed O(log width) times per pathological line.
const DEFAULT_COLUMN_HINT: u32 = 80;

/// A decoded Unicode scalar value and the number of source bytes it
/// consumed.
///
/// Invalid byte sequences decode to U+FFFD with the length of the invalid
/// unit, so byte offsets stay exact even through malformed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Codepoint {
    /// The decoded scalar value.
    pub ch: char,
    /// How many input bytes this codepoint consumed (1..=4).
    pub len: u8,
}

/// An exclusively-owned byte source for the lexer.
pub enum SourceInput {
    /// A buffered file handle.
    File(BufReader<File>),
    /// Standard input (selected by the path `-`).
    Stdin(io::Stdin),
    /// An in-memory buffer (copied from the caller).
    Buffer(Cursor<Vec<u8>>),
}

impl SourceInput {
    /// Open a path for lexing; `-` selects standard input.
    pub fn open(path: &str) -> io::Result<Self> {
        if path == "-" {
            Ok(SourceInput::Stdin(io::stdin()))
        } else {
            Ok(SourceInput::File(BufReader::new(File::open(path)?)))
        }
    }

    /// Lex the contents of a string.
    ///
    /// The text is copied into the reader, so the input may be dropped
    /// freely afterwards.
    pub fn from_string(text: impl Into<String>) -> Self {
        SourceInput::Buffer(Cursor::new(text.into().into_bytes()))
    }

    /// Lex raw bytes (not necessarily valid UTF-8).
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        SourceInput::Buffer(Cursor::new(bytes))
    }

    /// Read the next byte, or `None` at end of input.
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        let reader: &mut dyn Read = match self {
            SourceInput::File(f) => f,
            SourceInput::Stdin(s) => s,
            SourceInput::Buffer(b) => b,
        };
        loop {
            match reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Lazy UTF-8 decoder over a [`SourceInput`].
///
/// Implements [`Produce`] so a [`BufferedQueue`] can realize codepoints on
/// demand. The decoder's position runs ahead of the reader's consumption
/// cursor by however far the queue has been peeked; it keeps its own
/// line/column counters purely for decode diagnostics.
pub struct Utf8Decoder<'h> {
    input: SourceInput,
    handler: &'h Handler,
    file: FileId,
    /// Byte offset of the next byte to decode (read-ahead position).
    offset: usize,
    /// One byte of pushback for sequences that end early.
    pending: Option<u8>,
    /// Set after end of input or an unrecoverable read error; the decoder
    /// is fused from then on.
    done: bool,
    /// Decode-position line/column, used only for diagnostics.
    line: u32,
    column: u32,
}

impl<'h> Utf8Decoder<'h> {
    fn new(input: SourceInput, file: FileId, handler: &'h Handler) -> Self {
        Self {
            input,
            handler,
            file,
            offset: 0,
            pending: None,
            done: false,
            line: 1,
            column: 1,
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.pending.take() {
            return Some(byte);
        }
        if self.done {
            return None;
        }
        match self.input.read_byte() {
            Ok(Some(byte)) => Some(byte),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                DiagnosticBuilder::error(format!("failed to read input: {e}"))
                    .code(DiagnosticCode::E_LEX_READ_FAILED)
                    .span(Span::with_file(
                        self.offset,
                        self.offset,
                        self.file,
                        self.line,
                        self.column,
                    ))
                    .emit(self.handler);
                None
            }
        }
    }

    /// The range a continuation byte must fall in, given the lead byte and
    /// the index of the continuation within the sequence.
    ///
    /// The second byte carries the tightened bounds that exclude overlong
    /// encodings, surrogates, and values above U+10FFFF; later bytes are
    /// plain continuations.
    fn continuation_range(lead: u8, index: u8) -> (u8, u8) {
        if index > 1 {
            return (0x80, 0xBF);
        }
        match lead {
            0xE0 => (0xA0, 0xBF),
            0xED => (0x80, 0x9F),
            0xF0 => (0x90, 0xBF),
            0xF4 => (0x80, 0x8F),
            _ => (0x80, 0xBF),
        }
    }

    /// Report an invalid sequence of `len` bytes and produce the
    /// replacement pseudo-codepoint covering exactly that unit.
    fn invalid_unit(&mut self, len: u8) -> Codepoint {
        DiagnosticBuilder::error("invalid UTF-8 byte sequence")
            .code(DiagnosticCode::E_LEX_INVALID_UTF8)
            .span(Span::with_file(
                self.offset,
                self.offset + len as usize,
                self.file,
                self.line,
                self.column,
            ))
            .emit(self.handler);
        Codepoint {
            ch: char::REPLACEMENT_CHARACTER,
            len,
        }
    }

    fn advance_position(&mut self, cp: Codepoint) {
        self.offset += cp.len as usize;
        if cp.ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Produce for Utf8Decoder<'_> {
    type Item = Option<Codepoint>;

    fn produce(&mut self) -> Option<Codepoint> {
        let lead = self.next_byte()?;

        // ASCII fast path.
        if lead < 0x80 {
            let cp = Codepoint {
                ch: lead as char,
                len: 1,
            };
            self.advance_position(cp);
            return Some(cp);
        }

        // Stray continuation bytes and invalid lead bytes (0xC0, 0xC1
        // encode overlong sequences; 0xF5.. encode values past U+10FFFF)
        // are each a one-byte invalid unit.
        let width = match lead {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => {
                let cp = self.invalid_unit(1);
                self.advance_position(cp);
                return Some(cp);
            }
        };

        let mut value = u32::from(lead & (0x7F >> width));
        for index in 1..width {
            let (lo, hi) = Self::continuation_range(lead, index);
            match self.next_byte() {
                Some(byte) if (lo..=hi).contains(&byte) => {
                    value = (value << 6) | u32::from(byte & 0x3F);
                }
                Some(byte) => {
                    // The sequence ends early; the offending byte may begin
                    // the next codepoint, so push it back. The invalid unit
                    // is the bytes consumed so far.
                    self.pending = Some(byte);
                    let cp = self.invalid_unit(index);
                    self.advance_position(cp);
                    return Some(cp);
                }
                None => {
                    let cp = self.invalid_unit(index);
                    self.advance_position(cp);
                    return Some(cp);
                }
            }
        }

        // The continuation ranges above exclude every invalid scalar.
        let ch = char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER);
        let cp = Codepoint { ch, len: width };
        self.advance_position(cp);
        Some(cp)
    }
}

/// Codepoint-level reader with arbitrary-depth lookahead.
///
/// Tracks the line and column of the *consumption* cursor (the decoder's
/// read-ahead position may be further along) and registers each consumed
/// newline with the line map so spans can be resolved later.
pub struct SourceReader<'h> {
    chars: BufferedQueue<Utf8Decoder<'h>>,
    map: &'h SourceMap,
    file: FileId,
    offset: usize,
    line: u32,
    column: u32,
    column_hint: u32,
}

impl<'h> SourceReader<'h> {
    /// Create a reader over a byte source.
    ///
    /// `file` must already be registered with `map`.
    pub fn new(input: SourceInput, file: FileId, handler: &'h Handler, map: &'h SourceMap) -> Self {
        Self {
            chars: BufferedQueue::new(Utf8Decoder::new(input, file, handler)),
            map,
            file,
            offset: 0,
            line: 1,
            column: 1,
            column_hint: DEFAULT_COLUMN_HINT,
        }
    }

    /// The codepoint `n` positions ahead of the cursor, or `None` at or
    /// past end of input.
    pub fn peek(&mut self, n: usize) -> Option<Codepoint> {
        *self.chars.peek(n)
    }

    /// The character `n` positions ahead of the cursor.
    pub fn peek_char(&mut self, n: usize) -> Option<char> {
        self.peek(n).map(|cp| cp.ch)
    }

    /// True once the cursor is at end of input.
    pub fn is_eof(&mut self) -> bool {
        self.peek(0).is_none()
    }

    /// Consume one codepoint, advancing offset, line and column.
    ///
    /// Does nothing at end of input.
    pub fn skip(&mut self) {
        let Some(cp) = self.peek(0) else {
            return;
        };
        self.offset += cp.len as usize;
        if cp.ch == '\n' {
            self.line += 1;
            self.column = 1;
            self.map.start_line(self.file, self.offset);
        } else {
            self.column += 1;
            if self.column > self.column_hint {
                // Line wider than expected: tell the line map so rendering
                // buffers are sized up, and back off the hint.
                self.map.note_column(self.file, self.column);
                self.column_hint = self.column * 2;
            }
        }
        self.chars.skip(0);
    }

    /// Byte offset of the cursor.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of the cursor.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the cursor, in codepoints.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The file being read.
    pub fn file(&self) -> FileId {
        self.file
    }

    /// The line map this reader registers lines with.
    pub fn source_map(&self) -> &'h SourceMap {
        self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn reader<'h>(
        text: &str,
        handler: &'h Handler,
        map: &'h SourceMap,
    ) -> SourceReader<'h> {
        let file = map.add_file("test.sb", Some(text.to_string()));
        SourceReader::new(SourceInput::from_string(text), file, handler, map)
    }

    #[test]
    fn test_peek_ascii() {
        let handler = Handler::new();
        let map = SourceMap::new();
        let mut r = reader("abc", &handler, &map);
        assert_eq!(r.peek_char(0), Some('a'));
        assert_eq!(r.peek_char(1), Some('b'));
        assert_eq!(r.peek_char(2), Some('c'));
        assert_eq!(r.peek_char(3), None);
        assert_eq!(r.peek_char(100), None);
    }

    #[test]
    fn test_peek_is_idempotent() {
        let handler = Handler::new();
        let map = SourceMap::new();
        let mut r = reader("xy", &handler, &map);
        assert_eq!(r.peek_char(1), Some('y'));
        assert_eq!(r.peek_char(1), Some('y'));
        assert_eq!(r.peek_char(0), Some('x'));
    }

    #[test]
    fn test_skip_advances_offset_by_byte_length() {
        let handler = Handler::new();
        let map = SourceMap::new();
        let mut r = reader("aé中😀", &handler, &map);
        assert_eq!(r.offset(), 0);
        r.skip();
        assert_eq!(r.offset(), 1);
        r.skip();
        assert_eq!(r.offset(), 3);
        r.skip();
        assert_eq!(r.offset(), 6);
        r.skip();
        assert_eq!(r.offset(), 10);
        assert!(r.is_eof());
    }

    #[test]
    fn test_multibyte_codepoint_lengths() {
        let handler = Handler::new();
        let map = SourceMap::new();
        let mut r = reader("é中😀", &handler, &map);
        assert_eq!(r.peek(0), Some(Codepoint { ch: 'é', len: 2 }));
        assert_eq!(r.peek(1), Some(Codepoint { ch: '中', len: 3 }));
        assert_eq!(r.peek(2), Some(Codepoint { ch: '😀', len: 4 }));
    }

    #[test]
    fn test_line_column_tracking() {
        let handler = Handler::new();
        let map = SourceMap::new();
        let mut r = reader("ab\ncd", &handler, &map);
        assert_eq!((r.line(), r.column()), (1, 1));
        r.skip();
        assert_eq!((r.line(), r.column()), (1, 2));
        r.skip();
        r.skip(); // the newline
        assert_eq!((r.line(), r.column()), (2, 1));
        r.skip();
        assert_eq!((r.line(), r.column()), (2, 2));
    }

    #[test]
    fn test_newlines_registered_with_line_map() {
        let handler = Handler::new();
        let map = SourceMap::new();
        let file = map.add_file("-", None); // streamed: no precomputed lines
        let mut r = SourceReader::new(SourceInput::from_string("a\nb\nc"), file, &handler, &map);
        while !r.is_eof() {
            r.skip();
        }
        assert_eq!(map.line_count(file), Some(3));
        assert_eq!(map.line_col(file, 4), Some((3, 1)));
    }

    #[test]
    fn test_invalid_utf8_recovers_with_replacement() {
        let handler = Handler::new();
        let map = SourceMap::new();
        let file = map.add_file("bad.sb", None);
        // 'a', stray continuation byte, 'b'
        let mut r = SourceReader::new(SourceInput::from_bytes(vec![b'a', 0x80, b'b']), file, &handler, &map);
        assert_eq!(r.peek_char(0), Some('a'));
        assert_eq!(r.peek(1), Some(Codepoint { ch: '\u{FFFD}', len: 1 }));
        assert_eq!(r.peek_char(2), Some('b'));
        assert_eq!(r.peek_char(3), None);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_truncated_sequence_pushes_back_next_byte() {
        let handler = Handler::new();
        let map = SourceMap::new();
        let file = map.add_file("bad.sb", None);
        // 0xE4 expects two continuations but hits 'x': one invalid unit of
        // one byte, then 'x' must still come through.
        let mut r = SourceReader::new(SourceInput::from_bytes(vec![0xE4, b'x']), file, &handler, &map);
        assert_eq!(r.peek(0), Some(Codepoint { ch: '\u{FFFD}', len: 1 }));
        assert_eq!(r.peek_char(1), Some('x'));
        assert_eq!(r.peek_char(2), None);
    }

    #[test]
    fn test_truncated_sequence_at_eof() {
        let handler = Handler::new();
        let map = SourceMap::new();
        let file = map.add_file("bad.sb", None);
        // Lead of a 4-byte sequence with only one continuation, then EOF.
        let mut r = SourceReader::new(SourceInput::from_bytes(vec![0xF0, 0x90]), file, &handler, &map);
        assert_eq!(r.peek(0), Some(Codepoint { ch: '\u{FFFD}', len: 2 }));
        assert_eq!(r.peek_char(1), None);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_surrogate_encoding_rejected() {
        let handler = Handler::new();
        let map = SourceMap::new();
        let file = map.add_file("bad.sb", None);
        // 0xED 0xA0 0x80 would encode U+D800. The 0xA0 is outside 0xED's
        // continuation range, so the unit is one byte.
        let mut r = SourceReader::new(SourceInput::from_bytes(vec![0xED, 0xA0, 0x80]), file, &handler, &map);
        assert_eq!(r.peek(0), Some(Codepoint { ch: '\u{FFFD}', len: 1 }));
        assert!(handler.error_count() >= 1);
    }

    #[test]
    fn test_overlong_encoding_rejected() {
        let handler = Handler::new();
        let map = SourceMap::new();
        let file = map.add_file("bad.sb", None);
        // 0xC0 0x80 is an overlong encoding of NUL.
        let mut r = SourceReader::new(SourceInput::from_bytes(vec![0xC0, 0x80, b'z']), file, &handler, &map);
        assert_eq!(r.peek(0), Some(Codepoint { ch: '\u{FFFD}', len: 1 }));
        assert_eq!(r.peek(1), Some(Codepoint { ch: '\u{FFFD}', len: 1 }));
        assert_eq!(r.peek_char(2), Some('z'));
    }

    #[test]
    fn test_open_file() {
        let handler = Handler::new();
        let map = SourceMap::new();
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "let x").unwrap();

        let path = tmp.path().to_str().unwrap().to_string();
        let input = SourceInput::open(&path).unwrap();
        let file = map.add_file(path, None);
        let mut r = SourceReader::new(input, file, &handler, &map);
        let mut text = String::new();
        while let Some(c) = r.peek_char(0) {
            text.push(c);
            r.skip();
        }
        assert_eq!(text, "let x");
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        assert!(SourceInput::open("/definitely/not/a/file.sb").is_err());
    }

    #[test]
    fn test_empty_input() {
        let handler = Handler::new();
        let map = SourceMap::new();
        let mut r = reader("", &handler, &map);
        assert!(r.is_eof());
        r.skip(); // no-op at EOF
        assert_eq!(r.offset(), 0);
    }
}
