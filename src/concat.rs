use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that sequences two slice parsers into one slice
///
/// The value spans both matches contiguously, taken straight from the input
/// buffer.
pub struct Concat<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Concat<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Concat { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Concat<P1, P2>
where
    P1: Parser<'code, Output = &'code [u8]>,
    P2: Parser<'code, Output = &'code [u8]>,
{
    type Output = &'code [u8];

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let middle = match self.parser1.parse(cursor) {
            Outcome::Success { tail, .. } => tail,
            failure @ Outcome::Failure { .. } => return failure,
        };
        match self.parser2.parse(middle) {
            Outcome::Success { tail, .. } => Outcome::success(cursor.diff(&tail), tail),
            failure @ Outcome::Failure { .. } => failure,
        }
    }
}

/// Convenience function to create a Concat parser
pub fn concat<'code, P1, P2>(parser1: P1, parser2: P2) -> Concat<P1, P2>
where
    P1: Parser<'code, Output = &'code [u8]>,
    P2: Parser<'code, Output = &'code [u8]>,
{
    Concat::new(parser1, parser2)
}
