//! Explicit-failure container.

use crate::Fault;

/// Either a value or the [`Fault`] that prevented producing one.
///
/// A `Failure` always has a described cause; see [`Fault::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    Success(T),
    Failure(Fault),
}

impl<T> Outcome<T> {
    #[must_use]
    pub const fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Blank errors are replaced by [`Fault::UNSPECIFIED`].
    #[must_use]
    pub fn failure(error: impl Into<Fault>) -> Self {
        Outcome::Failure(error.into())
    }

    /// `Failure(error)` when an error is given, otherwise `Success(value)`.
    #[must_use]
    pub fn inferred(value: T, error: Option<Fault>) -> Self {
        match error {
            Some(fault) => Outcome::Failure(fault),
            None => Outcome::Success(value),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The fault of a `Failure`, or `None` for a `Success`.
    #[must_use]
    pub const fn fault(&self) -> Option<&Fault> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(fault) => Some(fault),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics on `Failure`, with the fault's message in the panic text.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(fault) => {
                panic!("called `Outcome::unwrap()` on a `Failure` value: {fault}")
            }
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the value, or asks `fallback` for one.
    ///
    /// The fallback receives the `Outcome` itself so it can read the fault.
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(&Self) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            failure @ Outcome::Failure(_) => fallback(&failure),
        }
    }

    #[must_use]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(fault) => Outcome::Failure(fault),
        }
    }

    pub fn into_result(self) -> Result<T, Fault> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(fault) => Err(fault),
        }
    }
}

impl<T: Default> Outcome<T> {
    pub fn unwrap_or_default(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => T::default(),
        }
    }

    /// Split into `(value, fault)`. The value is `T::default()` on failure.
    pub fn destructure(self) -> (T, Option<Fault>) {
        match self {
            Outcome::Success(value) => (value, None),
            Outcome::Failure(fault) => (T::default(), Some(fault)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Fault>,
{
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Fault> {
    fn from(value: Outcome<T>) -> Self {
        value.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;
    use crate::Fault;

    #[test]
    fn success_holds_value() {
        let outcome = Outcome::success(42);
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.fault(), None);
        assert_eq!(outcome.unwrap(), 42);
    }

    #[test]
    fn failure_holds_fault() {
        let outcome = Outcome::<i32>::failure("not found");
        assert!(outcome.is_failure());
        assert_eq!(outcome.fault().map(Fault::message), Some("not found"));
    }

    #[test]
    fn blank_failure_gets_placeholder() {
        let outcome = Outcome::<i32>::failure("");
        assert!(outcome.is_failure());
        assert!(outcome.fault().is_some_and(Fault::is_unspecified));
    }

    #[test]
    fn inferred_prefers_error() {
        assert_eq!(Outcome::inferred(1, None), Outcome::Success(1));
        let failed = Outcome::inferred(1, Some(Fault::new("bad")));
        assert_eq!(failed, Outcome::Failure(Fault::new("bad")));
    }

    #[test]
    fn destructure_pairs() {
        assert_eq!(Outcome::success(3).destructure(), (3, None));
        assert_eq!(
            Outcome::<i32>::failure("e").destructure(),
            (0, Some(Fault::new("e")))
        );
    }

    #[test]
    #[should_panic(expected = "on a `Failure` value: connection refused")]
    fn unwrap_failure_embeds_fault() {
        let _ = Outcome::<i32>::failure("connection refused").unwrap();
    }

    #[test]
    fn unwrap_or_variants() {
        assert_eq!(Outcome::success(1).unwrap_or(5), 1);
        assert_eq!(Outcome::failure("x").unwrap_or(5), 5);
        assert_eq!(Outcome::<String>::failure("x").unwrap_or_default(), "");
    }

    #[test]
    fn unwrap_or_else_reads_fault() {
        let len = Outcome::<usize>::failure("seven")
            .unwrap_or_else(|o| o.fault().map_or(0, |f| f.message().len()));
        assert_eq!(len, 5);
    }

    #[test]
    fn std_result_interop() {
        let parsed: Outcome<i32> = "12".parse::<i32>().into();
        assert_eq!(parsed, Outcome::Success(12));

        let failed: Outcome<i32> = "x".parse::<i32>().into();
        assert!(failed.is_failure());

        let back: Result<i32, Fault> = Outcome::success(2).map(|v| v + 1).into();
        assert_eq!(back.ok(), Some(3));
    }
}
