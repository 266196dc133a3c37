use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that performs positive lookahead
///
/// Succeeds with () if the given parser succeeds at the current position,
/// discarding its value. Fails with the given parser's reason otherwise.
/// Never consumes any input regardless of outcome.
pub struct PeekMatches<P> {
    parser: P,
}

impl<P> PeekMatches<P> {
    pub fn new(parser: P) -> Self {
        PeekMatches { parser }
    }
}

impl<'code, P> Parser<'code> for PeekMatches<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Outcome::Success { .. } => Outcome::success((), cursor),
            Outcome::Failure { reason } => Outcome::Failure { reason },
        }
    }
}

/// Convenience function to create a PeekMatches parser for positive lookahead
pub fn peek_matches<'code, P>(parser: P) -> PeekMatches<P>
where
    P: Parser<'code>,
{
    PeekMatches::new(parser)
}

/// Extension trait to add .peek_matches() method support for parsers
pub trait PeekMatchesExt<'code>: Parser<'code> + Sized {
    fn peek_matches(self) -> PeekMatches<Self> {
        PeekMatches::new(self)
    }
}

/// Implement PeekMatchesExt for all parsers
impl<'code, P> PeekMatchesExt<'code> for P where P: Parser<'code> {}
