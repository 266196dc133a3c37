use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Sequence two parsers, pairing their values
///
/// Chains nest to the left: `a.and(b).and(c)` yields `((a, b), c)`. When only
/// one side's value matters, [`keep_left`](crate::keep_left::KeepLeftExt::keep_left)
/// and [`keep_right`](crate::keep_right::KeepRightExt::keep_right) avoid the tuple.
///
/// ```
/// use slicecomb::and::AndExt;
/// use slicecomb::utf8::{code_point, literal};
/// use slicecomb::Parser;
///
/// let outcome = literal("x").and(code_point('=')).run(b"x=1", None);
/// let (name, eq) = outcome.into_value().unwrap();
/// assert_eq!(name, b"x");
/// assert_eq!(eq, b"=");
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (result1, cursor) = match self.parser1.parse(cursor).into_failure() {
            Ok(success) => success,
            Err(failure) => return failure,
        };
        let (result2, cursor) = match self.parser2.parse(cursor).into_failure() {
            Ok(success) => success,
            Err(failure) => return failure,
        };
        Outcome::success((result1, result2), cursor)
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utf8::{code_point, code_point_range};

    #[test]
    fn test_pair_of_values() {
        let parser = code_point('A').and(code_point_range('0', '9'));

        let outcome = parser.run(b"A5xyz", None);
        assert_eq!(outcome.value(), Some(&(&b"A"[..], &b"5"[..])));
        assert_eq!(outcome.tail().unwrap().peek(None), b"xyz");
    }

    #[test]
    fn test_first_miss() {
        let parser = code_point('A').and(code_point('x'));
        assert!(parser.run(b"Bxyz", None).is_failure());
    }

    #[test]
    fn test_second_miss() {
        let parser = code_point('A').and(code_point('5'));
        assert!(parser.run(b"Axyz", None).is_failure());
    }

    #[test]
    fn test_left_nested_chain() {
        let parser = code_point('A').and(code_point('5')).and(code_point('B'));

        let outcome = parser.run(b"A5B", None);
        let tail = outcome.tail().unwrap();
        let ((a, five), b) = outcome.into_value().unwrap();
        assert_eq!(a, b"A");
        assert_eq!(five, b"5");
        assert_eq!(b, b"B");
        assert!(tail.is_empty());
    }

    #[test]
    fn test_free_function() {
        let parser = and(code_point('X'), code_point('Y'));
        assert!(parser.run(b"XY", None).is_success());
    }
}
