use crate::position::Position;

/// Immutable view into the unconsumed remainder of a byte buffer
///
/// A cursor never owns or mutates its buffer. Every advancing operation returns
/// a new cursor, so any earlier cursor stays valid as a backtracking point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'code> {
    buffer: &'code [u8],
    position: Position<'code>,
}

impl<'code> Cursor<'code> {
    /// Create a cursor at the start of `buffer`
    pub fn new(buffer: &'code [u8], label: Option<&'code str>) -> Self {
        Cursor {
            buffer,
            position: Position::start(label),
        }
    }

    /// Number of bytes left to consume
    pub fn len(&self) -> usize {
        self.buffer.len() - self.position.byte_offset
    }

    /// Check if the cursor is at the end of the buffer
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look at up to `max` upcoming bytes without advancing
    ///
    /// `None` returns everything that remains.
    pub fn peek(&self, max: Option<usize>) -> &'code [u8] {
        let rest = &self.buffer[self.position.byte_offset..];
        match max {
            Some(max) => &rest[..max.min(rest.len())],
            None => rest,
        }
    }

    /// Advance by `n` bytes, clamped to the end of the buffer
    pub fn take(self, n: usize) -> Self {
        let position = self
            .peek(Some(n))
            .iter()
            .fold(self.position, |position, &byte| position.advance(byte));

        Cursor {
            buffer: self.buffer,
            position,
        }
    }

    /// Bytes between this cursor and a cursor derived from it
    ///
    /// `other` must have been reached from `self` by advancing over the same
    /// buffer. This is not checked; a cursor that lies behind `self` yields an
    /// empty slice.
    pub fn diff(&self, other: &Cursor<'code>) -> &'code [u8] {
        self.buffer
            .get(self.position.byte_offset..other.position.byte_offset)
            .unwrap_or_default()
    }

    pub fn position(&self) -> Position<'code> {
        self.position
    }

    /// The whole buffer this cursor walks over
    pub fn source(&self) -> &'code [u8] {
        self.buffer
    }
}
