//! Conversions between [`Maybe`] and [`Outcome`].
//!
//! `Maybe -> Outcome` gains information: the caller supplies the fault that an
//! `Absent` value becomes. `Outcome -> Maybe` loses information on purpose: a
//! failure's fault is discarded and cannot be recovered from the result.

use crate::{Fault, Maybe, Outcome};

/// `Present(v)` becomes `Success(v)`; `Absent` becomes `Failure(fault)`.
///
/// A blank fault still yields a `Failure`, carrying [`Fault::UNSPECIFIED`].
#[must_use]
pub fn maybe_to_outcome<T>(maybe: Maybe<T>, fault: impl Into<Fault>) -> Outcome<T> {
    match maybe {
        Maybe::Present(value) => Outcome::Success(value),
        Maybe::Absent => Outcome::Failure(fault.into()),
    }
}

/// `Success(v)` becomes `Present(v)`; any `Failure` becomes `Absent`.
#[must_use]
pub fn outcome_to_maybe<T>(outcome: Outcome<T>) -> Maybe<T> {
    match outcome {
        Outcome::Success(value) => Maybe::Present(value),
        Outcome::Failure(_) => Maybe::Absent,
    }
}

impl<T> Maybe<T> {
    #[must_use]
    pub fn into_outcome(self, fault: impl Into<Fault>) -> Outcome<T> {
        maybe_to_outcome(self, fault)
    }

    /// Like [`Maybe::into_outcome`], building the fault only when absent.
    #[must_use]
    pub fn into_outcome_with<F>(self, fault: F) -> Outcome<T>
    where
        F: FnOnce() -> Fault,
    {
        match self {
            Maybe::Present(value) => Outcome::Success(value),
            Maybe::Absent => Outcome::Failure(fault()),
        }
    }
}

impl<T> Outcome<T> {
    #[must_use]
    pub fn into_maybe(self) -> Maybe<T> {
        outcome_to_maybe(self)
    }
}
