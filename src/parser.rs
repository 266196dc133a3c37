use crate::cursor::Cursor;
use crate::outcome::Outcome;
use std::rc::Rc;
use std::sync::Arc;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a cursor to an [`Outcome`]. It holds no
/// mutable state, so the same parser may be run any number of times, and from
/// several threads at once when it is `Sync`.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse at the given cursor
    ///
    /// On failure no input is consumed: the caller still holds the cursor it
    /// passed in and may retry from it.
    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output>;

    /// Parse `bytes` from the start
    ///
    /// `label` names the input in every [`Position`](crate::Position) the parse
    /// produces.
    fn run(&self, bytes: &'code [u8], label: Option<&'code str>) -> Outcome<'code, Self::Output> {
        let span = tracing::trace_span!("run", label = label, len = bytes.len());
        let _guard = span.enter();

        let outcome = self.parse(Cursor::new(bytes, label));
        match &outcome {
            Outcome::Success { tail, .. } => {
                tracing::debug!(consumed = tail.position().byte_offset, "parse succeeded");
            }
            Outcome::Failure { .. } => tracing::debug!("parse failed"),
        }
        outcome
    }
}

/// Run `parser` over `bytes` from the start
///
/// ```
/// use slicecomb::{Parser, run};
/// use slicecomb::utf8::literal;
///
/// let outcome = run(&literal("let"), b"let x", Some("repl"));
/// assert_eq!(outcome.value(), Some(&&b"let"[..]));
/// assert_eq!(outcome.tail().unwrap().peek(None), b" x");
/// ```
pub fn run<'code, P>(
    parser: &P,
    bytes: &'code [u8],
    label: Option<&'code str>,
) -> Outcome<'code, P::Output>
where
    P: Parser<'code> + ?Sized,
{
    parser.run(bytes, label)
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Arc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Type-erased parser, used to name recursive or heterogeneous grammars
pub type BoxedParser<'a, 'code, T> = Box<dyn Parser<'code, Output = T> + 'a>;

/// Extension trait to erase or share a parser's concrete type
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed<'a>(self) -> BoxedParser<'a, 'code, Self::Output>
    where
        Self: 'a,
    {
        Box::new(self)
    }

    /// Wrap in an `Rc` so several composite parsers can hold the same parser
    fn shared(self) -> Rc<Self> {
        Rc::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}
