use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Outcome::Success { value, tail } => Outcome::success((self.mapper)(value), tail),
            Outcome::Failure { reason } => Outcome::Failure { reason },
        }
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::or::OrExt;
    use crate::outcome::Reason;
    use crate::utf8::{code_point, code_point_range, literal};

    #[derive(Debug, PartialEq)]
    enum Token {
        Keyword,
        Digit(u32),
        Bang,
    }

    struct Refuse;

    impl<'code> Parser<'code> for Refuse {
        type Output = ();

        fn parse(&self, _cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
            Outcome::failure_with(Reason::new())
        }
    }

    #[test]
    fn test_map_to_char() {
        let parser = code_point('A').map(|bytes: &[u8]| char::from(bytes[0]));

        let outcome = parser.run(b"A", None);
        assert_eq!(outcome.value(), Some(&'A'));
        assert!(outcome.tail().unwrap().is_empty());
    }

    #[test]
    fn test_map_keeps_tail() {
        let parser = literal("let").map(|bytes: &[u8]| bytes.len());

        let outcome = parser.run(b"let x", None);
        assert_eq!(outcome.value(), Some(&3));
        assert_eq!(outcome.tail().unwrap().peek(None), b" x");
    }

    #[test]
    fn test_map_chaining() {
        let parser = code_point_range('0', '9')
            .map(|bytes: &[u8]| char::from(bytes[0]))
            .map(|ch| ch.to_digit(10).unwrap_or_default())
            .map(|digit| format!("Digit: {}", digit));

        let outcome = parser.run(b"5", None);
        assert_eq!(outcome.value(), Some(&"Digit: 5".to_string()));
    }

    #[test]
    fn test_map_with_or_common_enum() {
        let keyword = literal("if").map(|_| Token::Keyword);
        let digit = code_point_range('0', '9').map(|bytes: &[u8]| Token::Digit(u32::from(bytes[0] - b'0')));
        let bang = code_point('!').map(|_| Token::Bang);

        // or() needs a common output type
        let parser = keyword.or(digit).or(bang);

        assert_eq!(parser.run(b"7", None).into_value(), Some(Token::Digit(7)));
        assert_eq!(parser.run(b"if", None).into_value(), Some(Token::Keyword));
        assert_eq!(parser.run(b"!", None).into_value(), Some(Token::Bang));
    }

    #[test]
    fn test_map_preserves_failure_reason() {
        let parser = Refuse.map(|()| 1);

        let outcome = parser.run(b"xyz", None);
        assert_eq!(outcome.reason(), Some(&Reason::new()));
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(code_point('9'), |bytes: &[u8]| bytes.to_vec());

        let outcome = parser.run(b"9", None);
        assert_eq!(outcome.into_value(), Some(b"9".to_vec()));
    }
}
