use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
///
/// A recursive grammar names its own type through
/// [`BoxedParser`](crate::BoxedParser):
///
/// ```
/// use slicecomb::keep_left::KeepLeftExt;
/// use slicecomb::keep_right::KeepRightExt;
/// use slicecomb::or::OrExt;
/// use slicecomb::utf8::{code_point, literal};
/// use slicecomb::{BoxedExt, BoxedParser, Parser, lazy};
///
/// // nested := "(" nested ")" | "x"
/// fn nested<'a, 'code: 'a>() -> BoxedParser<'a, 'code, &'code [u8]> {
///     code_point('(')
///         .keep_right(lazy(nested))
///         .keep_left(code_point(')'))
///         .or(literal("x"))
///         .boxed()
/// }
///
/// assert!(nested().run(b"((x))", None).is_success());
/// assert!(nested().run(b"((x)", None).is_failure());
/// ```
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
