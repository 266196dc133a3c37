use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser that succeeds only when no input is left
pub struct End;

impl<'code> Parser<'code> for End {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        if cursor.is_empty() {
            Outcome::success((), cursor)
        } else {
            Outcome::failure()
        }
    }
}

/// Convenience function to create an End parser
pub fn end() -> End {
    End
}
