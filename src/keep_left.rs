use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that runs two parsers in sequence and keeps the first value
///
/// The returned cursor is the one after the second parser, so whatever the
/// second parser matched is consumed. Typical use is dropping a terminator:
/// `statement.keep_left(code_point(';'))`.
pub struct KeepLeft<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> KeepLeft<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        KeepLeft { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for KeepLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, cursor) = match self.parser1.parse(cursor).into_failure() {
            Ok(success) => success,
            Err(failure) => return failure,
        };
        match self.parser2.parse(cursor) {
            Outcome::Success { tail, .. } => Outcome::success(value, tail),
            Outcome::Failure { reason } => Outcome::Failure { reason },
        }
    }
}

/// Convenience function to create a KeepLeft parser
pub fn keep_left<'code, P1, P2>(parser1: P1, parser2: P2) -> KeepLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    KeepLeft::new(parser1, parser2)
}

/// Extension trait to add .keep_left() method support for parsers
pub trait KeepLeftExt<'code>: Parser<'code> + Sized {
    fn keep_left<P>(self, next: P) -> KeepLeft<Self, P>
    where
        P: Parser<'code>,
    {
        KeepLeft::new(self, next)
    }
}

/// Implement KeepLeftExt for all parsers
impl<'code, P> KeepLeftExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Reason;
    use crate::utf8::{code_point, literal};

    struct Refuse;

    impl<'code> Parser<'code> for Refuse {
        type Output = ();

        fn parse(&self, _cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
            Outcome::failure_with(Reason::new())
        }
    }

    #[test]
    fn test_keeps_first_value_and_second_tail() {
        let parser = literal("let").keep_left(code_point(';'));

        let outcome = parser.run(b"let;x", None);
        assert_eq!(outcome.value(), Some(&&b"let"[..]));

        let tail = outcome.tail().unwrap();
        assert_eq!(tail.position().byte_offset, 4);
        assert_eq!(tail.peek(None), b"x");
    }

    #[test]
    fn test_first_fails() {
        let parser = keep_left(literal("let"), code_point(';'));
        assert!(parser.run(b"var;", None).is_failure());
    }

    #[test]
    fn test_second_fails() {
        let parser = keep_left(literal("let"), code_point(';'));
        assert!(parser.run(b"let,", None).is_failure());
    }

    #[test]
    fn test_second_failure_reason_propagates() {
        let parser = literal("a").keep_left(Refuse);
        assert_eq!(parser.run(b"a", None).reason(), Some(&Reason::new()));
    }

    #[test]
    fn test_matches_separate_runs() {
        let cursor = Cursor::new(b"ab!", None);

        let first = code_point('a').parse(cursor);
        let second = code_point('b').parse(first.tail().unwrap());
        let combined = code_point('a').keep_left(code_point('b')).parse(cursor);

        assert_eq!(combined.value(), first.value());
        assert_eq!(combined.tail(), second.tail());
    }
}
