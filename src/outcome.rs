use crate::cursor::Cursor;

/// Diagnostic attached to a failed parse
///
/// Carries no information yet. Failures are created without a reason by
/// default, so new fields can be added here without touching existing
/// parsers.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("no match")]
#[non_exhaustive]
pub struct Reason {}

impl Reason {
    pub fn new() -> Self {
        Reason {}
    }
}

/// Result of running a parser at a cursor
///
/// Unlike `Result`, both arms are ordinary values of a parse: a failure is
/// recoverable by any enclosing `or` or `optional`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'code, T> {
    Success { value: T, tail: Cursor<'code> },
    Failure { reason: Option<Reason> },
}

impl<'code, T> Outcome<'code, T> {
    pub fn success(value: T, tail: Cursor<'code>) -> Self {
        Outcome::Success { value, tail }
    }

    pub fn failure() -> Self {
        Outcome::Failure { reason: None }
    }

    pub fn failure_with(reason: Reason) -> Self {
        Outcome::Failure {
            reason: Some(reason),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    /// Cursor after the match, if there was one
    pub fn tail(&self) -> Option<Cursor<'code>> {
        match self {
            Outcome::Success { tail, .. } => Some(*tail),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&Reason> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { reason } => reason.as_ref(),
        }
    }

    /// Convert into a `Result` so the outcome can be propagated with `?`
    ///
    /// A failure without a reason becomes a default `Reason`.
    pub fn into_result(self) -> Result<(T, Cursor<'code>), Reason> {
        match self {
            Outcome::Success { value, tail } => Ok((value, tail)),
            Outcome::Failure { reason } => Err(reason.unwrap_or_default()),
        }
    }

    /// Re-type a failure for a parser with a different output
    ///
    /// Returns `Err` with the successful value and tail untouched.
    pub(crate) fn into_failure<U>(self) -> Result<(T, Cursor<'code>), Outcome<'code, U>> {
        match self {
            Outcome::Success { value, tail } => Ok((value, tail)),
            Outcome::Failure { reason } => Err(Outcome::Failure { reason }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let data = b"abc";
        let tail = Cursor::new(data, None).take(1);
        let outcome = Outcome::success(42, tail);

        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.value(), Some(&42));
        assert_eq!(outcome.tail(), Some(tail));
        assert_eq!(outcome.reason(), None);
        assert_eq!(outcome.into_value(), Some(42));
    }

    #[test]
    fn test_failure_accessors() {
        let outcome: Outcome<'_, i64> = Outcome::failure();

        assert!(outcome.is_failure());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.tail(), None);
        assert_eq!(outcome.reason(), None);
    }

    #[test]
    fn test_failure_with_reason() {
        let outcome: Outcome<'_, ()> = Outcome::failure_with(Reason::new());
        assert_eq!(outcome.reason(), Some(&Reason::new()));
        assert_eq!(Reason::new().to_string(), "no match");
    }

    #[test]
    fn test_into_result() {
        let data = b"x";
        let tail = Cursor::new(data, None);

        let ok = Outcome::success('x', tail).into_result();
        assert_eq!(ok, Ok(('x', tail)));

        let err = Outcome::<char>::failure().into_result();
        assert_eq!(err, Err(Reason::default()));
    }
}
