use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::utf8::decode::decode;

/// Decode one code point at the cursor, or fail on malformed input
fn next_code_point<'code>(cursor: Cursor<'code>) -> Option<(char, Cursor<'code>)> {
    match decode(cursor.peek(Some(4))) {
        Ok((ch, len)) => Some((ch, cursor.take(len))),
        Err(error) => {
            tracing::trace!(at = %cursor.position(), %error, "no code point");
            None
        }
    }
}

/// Parser that consumes and returns any single code point
pub struct AnyCodePoint;

impl<'code> Parser<'code> for AnyCodePoint {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match next_code_point(cursor) {
            Some((ch, tail)) => Outcome::success(ch, tail),
            None => Outcome::failure(),
        }
    }
}

/// Convenience function to create an AnyCodePoint parser
pub fn any_code_point() -> AnyCodePoint {
    AnyCodePoint
}

/// Parser that matches one code point within an inclusive range
///
/// The value is the matched bytes, so the parser composes with
/// [`SliceExt`](crate::SliceExt) repetition.
#[derive(Debug, Clone, Copy)]
pub struct CodePointRange {
    low: char,
    high: char,
}

impl CodePointRange {
    pub fn new(low: char, high: char) -> Self {
        CodePointRange { low, high }
    }
}

impl<'code> Parser<'code> for CodePointRange {
    type Output = &'code [u8];

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match next_code_point(cursor) {
            Some((ch, tail)) if (self.low..=self.high).contains(&ch) => {
                Outcome::success(cursor.diff(&tail), tail)
            }
            _ => Outcome::failure(),
        }
    }
}

/// Parser that matches a code point in `low..=high`
pub fn code_point_range(low: char, high: char) -> CodePointRange {
    CodePointRange::new(low, high)
}

/// Parser that matches exactly one given code point
pub fn code_point(expected: char) -> CodePointRange {
    CodePointRange::new(expected, expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_ascii() {
        let cursor = Cursor::new(b"hello", None);
        let parser = any_code_point();

        let outcome = parser.parse(cursor);
        assert_eq!(outcome.value(), Some(&'h'));

        let outcome = parser.parse(outcome.tail().unwrap());
        assert_eq!(outcome.value(), Some(&'e'));
    }

    #[test]
    fn test_any_mixed() {
        let data = "café🦀".as_bytes();
        let mut cursor = Cursor::new(data, None);
        let mut chars = Vec::new();

        while let Outcome::Success { value, tail } = any_code_point().parse(cursor) {
            chars.push(value);
            cursor = tail;
        }

        assert_eq!(chars, vec!['c', 'a', 'f', 'é', '🦀']);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_any_invalid_utf8() {
        let cursor = Cursor::new(&[0xFF, 0xFE], None);
        assert!(any_code_point().parse(cursor).is_failure());
    }

    #[test]
    fn test_code_point_match() {
        let data = "åb".as_bytes();
        let cursor = Cursor::new(data, None);

        let outcome = code_point('å').parse(cursor);
        assert_eq!(outcome.value(), Some(&"å".as_bytes()));

        // Consumed exactly the two bytes of 'å'
        let tail = outcome.tail().unwrap();
        assert_eq!(tail.position().byte_offset, 2);
        assert_eq!(tail.peek(None), b"b");
    }

    #[test]
    fn test_code_point_mismatch() {
        let cursor = Cursor::new(b"b", None);
        assert!(code_point('a').parse(cursor).is_failure());
    }

    #[test]
    fn test_code_point_same_lead_byte() {
        // 'é' (C3 A9) and 'è' (C3 A8) share a lead byte
        let cursor = Cursor::new("è".as_bytes(), None);
        assert!(code_point('é').parse(cursor).is_failure());
        assert!(code_point('è').parse(cursor).is_success());
    }

    #[test]
    fn test_code_point_four_bytes() {
        let cursor = Cursor::new("🦀!".as_bytes(), None);

        let outcome = code_point('🦀').parse(cursor);
        assert_eq!(outcome.tail().unwrap().position().byte_offset, 4);
    }

    #[test]
    fn test_code_point_truncated_input() {
        // First two bytes of '🦀'
        let cursor = Cursor::new(&[0xF0, 0x9F], None);
        assert!(code_point('🦀').parse(cursor).is_failure());
    }

    #[test]
    fn test_code_point_empty_input() {
        let cursor = Cursor::new(b"", None);
        assert!(code_point('a').parse(cursor).is_failure());
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let digit = code_point_range('0', '9');

        for input in [&b"0"[..], b"5", b"9"] {
            let outcome = digit.parse(Cursor::new(input, None));
            assert_eq!(outcome.value(), Some(&input));
        }

        assert!(digit.parse(Cursor::new(b"/", None)).is_failure());
        assert!(digit.parse(Cursor::new(b":", None)).is_failure());
    }

    #[test]
    fn test_range_unicode() {
        let greek = code_point_range('α', 'ω');
        let cursor = Cursor::new("λx".as_bytes(), None);

        let outcome = greek.parse(cursor);
        assert_eq!(outcome.value(), Some(&"λ".as_bytes()));
        assert_eq!(outcome.tail().unwrap().peek(None), b"x");
    }

    #[test]
    fn test_range_empty_when_inverted() {
        let cursor = Cursor::new(b"m", None);
        assert!(code_point_range('z', 'a').parse(cursor).is_failure());
    }
}
