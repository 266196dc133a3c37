use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that matches a slice parser between `min` and `max` times
///
/// The value is the single contiguous slice from the starting cursor to the
/// cursor after the last match, so no per-match slices are collected.
///
/// Matching stops at the first failure or once `max` matches are made. The
/// parse succeeds if at least `min` matches were made.
///
/// # Termination
///
/// Each successful inner match must consume input. An inner parser that can
/// succeed without consuming, such as an [`optional`](crate::optional), keeps
/// matching at the same position and an unbounded `Repeat` never returns.
pub struct Repeat<P> {
    parser: P,
    min: usize,
    max: Option<usize>,
}

impl<P> Repeat<P> {
    pub fn new(parser: P, min: usize, max: Option<usize>) -> Self {
        Repeat { parser, min, max }
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code, Output = &'code [u8]>,
{
    type Output = &'code [u8];

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut tail = cursor;
        let mut count = 0;

        while self.max.is_none_or(|max| count < max) {
            match self.parser.parse(tail) {
                Outcome::Success { tail: next, .. } => {
                    tail = next;
                    count += 1;
                }
                Outcome::Failure { .. } => break,
            }
        }

        tracing::trace!(count, min = self.min, max = ?self.max, "repeat stopped");

        if count < self.min {
            return Outcome::failure();
        }
        Outcome::success(cursor.diff(&tail), tail)
    }
}

/// Convenience function to create a Repeat parser
pub fn repeat<'code, P>(parser: P, min: usize, max: Option<usize>) -> Repeat<P>
where
    P: Parser<'code, Output = &'code [u8]>,
{
    Repeat::new(parser, min, max)
}

/// Zero or more matches; never fails
pub fn many<'code, P>(parser: P) -> Repeat<P>
where
    P: Parser<'code, Output = &'code [u8]>,
{
    Repeat::new(parser, 0, None)
}

/// One or more matches
pub fn many1<'code, P>(parser: P) -> Repeat<P>
where
    P: Parser<'code, Output = &'code [u8]>,
{
    Repeat::new(parser, 1, None)
}

/// Zero or one match; never fails
pub fn at_most_one<'code, P>(parser: P) -> Repeat<P>
where
    P: Parser<'code, Output = &'code [u8]>,
{
    Repeat::new(parser, 0, Some(1))
}
