use std::fmt;

/// Diagnostic location of a cursor within its buffer
///
/// `line` and `column` are 1-based. Columns count bytes, not code points:
/// a line containing `"é"` advances the column by two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position<'code> {
    /// Offset from the start of the buffer, in bytes
    pub byte_offset: usize,
    pub line: usize,
    pub column: usize,
    /// Optional name of the input, e.g. a file name
    pub label: Option<&'code str>,
}

impl<'code> Position<'code> {
    /// Position at the very start of a buffer
    pub fn start(label: Option<&'code str>) -> Self {
        Position {
            byte_offset: 0,
            line: 1,
            column: 1,
            label,
        }
    }

    /// Position after stepping over `byte`
    ///
    /// `'\r'` leaves the column untouched so that a CRLF pair is counted once,
    /// on the `'\n'`.
    pub(crate) fn advance(self, byte: u8) -> Self {
        let (line, column) = match byte {
            b'\n' => (self.line + 1, 1),
            b'\r' => (self.line, self.column),
            _ => (self.line, self.column + 1),
        };

        Position {
            byte_offset: self.byte_offset + 1,
            line,
            column,
            label: self.label,
        }
    }
}

impl fmt::Display for Position<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Some(label) => write!(f, "{}:{}:{}", label, self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}
