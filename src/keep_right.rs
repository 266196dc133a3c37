use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that runs two parsers in sequence and keeps the second value
pub struct KeepRight<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> KeepRight<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        KeepRight { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for KeepRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser1.parse(cursor) {
            Outcome::Success { tail, .. } => self.parser2.parse(tail),
            Outcome::Failure { reason } => Outcome::Failure { reason },
        }
    }
}

/// Convenience function to create a KeepRight parser
pub fn keep_right<'code, P1, P2>(parser1: P1, parser2: P2) -> KeepRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    KeepRight::new(parser1, parser2)
}

/// Extension trait to add .keep_right() method support for parsers
pub trait KeepRightExt<'code>: Parser<'code> + Sized {
    fn keep_right<P>(self, next: P) -> KeepRight<Self, P>
    where
        P: Parser<'code>,
    {
        KeepRight::new(self, next)
    }
}

/// Implement KeepRightExt for all parsers
impl<'code, P> KeepRightExt<'code> for P where P: Parser<'code> {}
