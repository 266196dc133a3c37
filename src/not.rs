use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Negative lookahead: succeeds with `()` exactly when the inner parser fails
///
/// Zero width in both directions. The tail of a success is the cursor passed
/// in, and the inner parser's value and reason are discarded.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Outcome::Success { .. } => Outcome::failure(),
            Outcome::Failure { .. } => Outcome::success((), cursor),
        }
    }
}

/// Convenience function to create a Not parser
pub fn not<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}
