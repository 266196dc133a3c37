//! Combinators for parsers whose value is a slice of the input
//!
//! Every primitive in [`utf8`](crate::utf8) produces the bytes it matched.
//! Composing such parsers with [`SliceExt`] keeps producing slices of the same
//! buffer, computed from the start and end cursors instead of being collected
//! and joined.

use crate::concat::Concat;
use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::repeat::Repeat;

/// Parser combinator that replaces a parser's value with the bytes it consumed
pub struct Recognize<P> {
    parser: P,
}

impl<P> Recognize<P> {
    pub fn new(parser: P) -> Self {
        Recognize { parser }
    }
}

impl<'code, P> Parser<'code> for Recognize<P>
where
    P: Parser<'code>,
{
    type Output = &'code [u8];

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Outcome::Success { tail, .. } => Outcome::success(cursor.diff(&tail), tail),
            Outcome::Failure { reason } => Outcome::Failure { reason },
        }
    }
}

/// Extension trait to add .recognize() method support for parsers
pub trait RecognizeExt<'code>: Parser<'code> + Sized {
    fn recognize(self) -> Recognize<Self> {
        Recognize::new(self)
    }
}

/// Implement RecognizeExt for all parsers
impl<'code, P> RecognizeExt<'code> for P where P: Parser<'code> {}

/// Parser combinator that views a matched slice as `&str`
///
/// Fails if the bytes are not valid UTF-8, which cannot happen for slices
/// built only from the [`utf8`](crate::utf8) primitives.
pub struct AsStr<P> {
    parser: P,
}

impl<P> AsStr<P> {
    pub fn new(parser: P) -> Self {
        AsStr { parser }
    }
}

impl<'code, P> Parser<'code> for AsStr<P>
where
    P: Parser<'code, Output = &'code [u8]>,
{
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Outcome::Success { value, tail } => match std::str::from_utf8(value) {
                Ok(text) => Outcome::success(text, tail),
                Err(error) => {
                    tracing::trace!(at = %cursor.position(), %error, "matched bytes are not UTF-8");
                    Outcome::failure()
                }
            },
            Outcome::Failure { reason } => Outcome::Failure { reason },
        }
    }
}

/// Extension trait with the slice-only combinators
///
/// ```
/// use slicecomb::or::OrExt;
/// use slicecomb::slice::SliceExt;
/// use slicecomb::utf8::code_point_range;
/// use slicecomb::Parser;
///
/// let identifier = code_point_range('a', 'z')
///     .concat(code_point_range('a', 'z').or(code_point_range('0', '9')).many())
///     .as_str();
///
/// assert_eq!(identifier.run(b"x86 rest", None).into_value(), Some("x86"));
/// assert!(identifier.run(b"9x", None).is_failure());
/// ```
pub trait SliceExt<'code>: Parser<'code, Output = &'code [u8]> + Sized {
    /// Between `min` and `max` matches, as one slice
    fn repeat(self, min: usize, max: Option<usize>) -> Repeat<Self> {
        Repeat::new(self, min, max)
    }

    /// Zero or more matches; never fails
    fn many(self) -> Repeat<Self> {
        Repeat::new(self, 0, None)
    }

    /// One or more matches
    fn many1(self) -> Repeat<Self> {
        Repeat::new(self, 1, None)
    }

    /// Zero or one match; never fails
    fn at_most_one(self) -> Repeat<Self> {
        Repeat::new(self, 0, Some(1))
    }

    fn concat<P>(self, next: P) -> Concat<Self, P>
    where
        P: Parser<'code, Output = &'code [u8]>,
    {
        Concat::new(self, next)
    }

    fn as_str(self) -> AsStr<Self> {
        AsStr::new(self)
    }
}

/// Implement SliceExt for all slice parsers
impl<'code, P> SliceExt<'code> for P where P: Parser<'code, Output = &'code [u8]> {}
