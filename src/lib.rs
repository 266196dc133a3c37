//! # slicecomb - Parser Combinators over UTF-8 Byte Slices
//!
//! slicecomb builds recursive-descent parsers by composing small primitives
//! (a code point, a code-point range, a literal string) with combinators
//! (sequencing, alternation, mapping, binding, repetition, lookahead).
//!
//! - **Immutable cursors**: a [`Cursor`] is a `Copy` view into the input with a
//!   line/column [`Position`]. Backtracking is just reusing an older cursor.
//! - **Failures are values**: every parser returns an [`Outcome`], never panics,
//!   and any failure can be recovered by `or` or `optional`.
//! - **Slices, not copies**: primitives return the bytes they matched, and
//!   repetition or concatenation of them returns one slice of the input.
//! - **Shareable parsers**: parsers are immutable values. References, `Rc`,
//!   `Arc` and `Box` of a parser are parsers too.
//!
//! ```
//! use slicecomb::prelude::*;
//! use slicecomb::utf8::{code_point, code_point_range};
//!
//! let integer = code_point('-')
//!     .at_most_one()
//!     .concat(code_point_range('0', '9').many1())
//!     .as_str()
//!     .bind(|text, tail| match text.parse::<i64>() {
//!         Ok(value) => Outcome::success(value, tail),
//!         Err(_) => Outcome::failure(),
//!     });
//!
//! assert_eq!(integer.run(b"-42", None).into_value(), Some(-42));
//! assert!(integer.run(b"x", None).is_failure());
//! ```

pub mod and;
pub mod bind;
pub mod concat;
pub mod cursor;
pub mod end;
pub mod keep_left;
pub mod keep_right;
pub mod lazy;
pub mod map;
pub mod not;
pub mod optional;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod peek_matches;
pub mod position;
pub mod repeat;
pub mod slice;
pub mod span;
pub mod utf8;

pub use cursor::Cursor;
pub use end::end;
pub use lazy::lazy;
pub use outcome::{Outcome, Reason};
pub use parser::{BoxedExt, BoxedParser, Parser, run};
pub use position::Position;
pub use slice::SliceExt;
pub use span::Span;

/// Everything needed to write grammars with method syntax
pub mod prelude {
    pub use crate::and::AndExt;
    pub use crate::bind::BindExt;
    pub use crate::keep_left::KeepLeftExt;
    pub use crate::keep_right::KeepRightExt;
    pub use crate::map::MapExt;
    pub use crate::not::NotExt;
    pub use crate::optional::OptionalExt;
    pub use crate::or::OrExt;
    pub use crate::peek_matches::PeekMatchesExt;
    pub use crate::slice::{RecognizeExt, SliceExt};
    pub use crate::span::WithSpanExt;
    pub use crate::{BoxedExt, BoxedParser, Cursor, Outcome, Parser, lazy};
}
