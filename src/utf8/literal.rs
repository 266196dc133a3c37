use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string
///
/// The comparison is byte-wise. Since the expected text is a `str`, a match
/// is always well-formed UTF-8 and ends on a code point boundary.
#[derive(Debug, Clone)]
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = &'code [u8];

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let expected = self.expected.as_bytes();
        let found = cursor.peek(Some(expected.len()));

        if found == expected {
            Outcome::success(found, cursor.take(expected.len()))
        } else {
            Outcome::failure()
        }
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
