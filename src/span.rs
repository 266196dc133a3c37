use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::position::Position;

/// Region of the input covered by a successful parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Position of the first matched byte (inclusive)
    pub start: Position<'code>,
    /// Position after the last matched byte (exclusive)
    pub end: Position<'code>,
    /// The matched bytes
    pub slice: &'code [u8],
}

impl Span<'_> {
    /// Get the length of the span in bytes
    pub fn len(&self) -> usize {
        self.slice.len()
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }
}

/// A parser combinator that captures the span of a successful parse
pub struct WithSpan<P> {
    parser: P,
}

impl<P> WithSpan<P> {
    pub fn new(parser: P) -> Self {
        WithSpan { parser }
    }
}

impl<'code, P> Parser<'code> for WithSpan<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span<'code>);

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Outcome::Success { value, tail } => {
                let span = Span {
                    start: cursor.position(),
                    end: tail.position(),
                    slice: cursor.diff(&tail),
                };
                Outcome::success((value, span), tail)
            }
            Outcome::Failure { reason } => Outcome::Failure { reason },
        }
    }
}

/// Extension trait to add span tracking to any parser
pub trait WithSpanExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture its span
    fn with_span(self) -> WithSpan<Self> {
        WithSpan::new(self)
    }
}

impl<'code, P> WithSpanExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a WithSpan combinator
pub fn with_span<'code, P>(parser: P) -> WithSpan<P>
where
    P: Parser<'code>,
{
    WithSpan::new(parser)
}
