use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that hands a successful value to a function deciding the whole outcome
///
/// The function receives the value and the cursor after it, and its
/// [`Outcome`] is returned as is. This is the most general sequencing
/// combinator: it can validate a value, turn it into a failure, or continue
/// parsing with a parser chosen from the value.
///
/// ```
/// use slicecomb::bind::BindExt;
/// use slicecomb::utf8::code_point_range;
/// use slicecomb::{Outcome, Parser};
///
/// // A digit, accepted only if it is even
/// let even = code_point_range('0', '9').bind(|digit: &[u8], tail| {
///     if (digit[0] - b'0') % 2 == 0 {
///         Outcome::success(digit[0] - b'0', tail)
///     } else {
///         Outcome::failure()
///     }
/// });
///
/// assert_eq!(even.run(b"4", None).into_value(), Some(4));
/// assert!(even.run(b"3", None).is_failure());
/// ```
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<'code, P, F, U> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output, Cursor<'code>) -> Outcome<'code, U>,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Outcome::Success { value, tail } => (self.binder)(value, tail),
            Outcome::Failure { reason } => Outcome::Failure { reason },
        }
    }
}

/// Parser combinator that picks the next parser from the previous value
///
/// The parser returned by the function runs at the cursor after the first
/// match. Useful for length- or tag-prefixed formats.
pub struct AndThen<P, F> {
    parser: P,
    next: F,
}

impl<P, F> AndThen<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        AndThen { parser, next }
    }
}

impl<'code, P, F, Q> Parser<'code> for AndThen<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Outcome::Success { value, tail } => (self.next)(value).parse(tail),
            Outcome::Failure { reason } => Outcome::Failure { reason },
        }
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, U>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output, Cursor<'code>) -> Outcome<'code, U>,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .bind() and .and_then() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, U>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output, Cursor<'code>) -> Outcome<'code, U>,
    {
        Bind::new(self, binder)
    }

    fn and_then<F, Q>(self, next: F) -> AndThen<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        AndThen::new(self, next)
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}
