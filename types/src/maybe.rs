//! Explicit-absence container.

/// Either a value or nothing.
///
/// `Maybe` is immutable: every operation consumes or borrows it and returns
/// new data instead of changing its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Maybe<T> {
    Present(T),
    #[default]
    Absent,
}

impl<T> Maybe<T> {
    #[must_use]
    pub const fn present(value: T) -> Self {
        Maybe::Present(value)
    }

    #[must_use]
    pub const fn absent() -> Self {
        Maybe::Absent
    }

    /// Build from a value and an explicit presence flag.
    ///
    /// This is the recommended form of inference: the caller states presence,
    /// so an empty value can still be `Present`. When `present` is false the
    /// value is dropped and never observable.
    #[must_use]
    pub fn flagged(value: T, present: bool) -> Self {
        if present {
            Maybe::Present(value)
        } else {
            Maybe::Absent
        }
    }

    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics when called on `Absent`. This is the only unchecked accessor.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => panic!("called `Maybe::unwrap()` on an `Absent` value"),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    /// Returns the value, or asks `fallback` for one.
    ///
    /// The fallback receives the `Maybe` itself so it can inspect the state.
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(&Self) -> T,
    {
        match self {
            Maybe::Present(value) => value,
            absent @ Maybe::Absent => fallback(&absent),
        }
    }

    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    #[must_use]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the value, or the type's zero value when absent.
    pub fn unwrap_or_default(self) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => T::default(),
        }
    }

    /// Split into `(value, present)`. The value is `T::default()` when absent.
    pub fn destructure(self) -> (T, bool) {
        match self {
            Maybe::Present(value) => (value, true),
            Maybe::Absent => (T::default(), false),
        }
    }
}

impl<T: Default + PartialEq> Maybe<T> {
    /// Best-effort inference: `Absent` when `value` equals `T::default()`.
    ///
    /// This cannot tell a legitimately empty value (`0`, `""`) from a missing
    /// one. Prefer [`Maybe::flagged`] whenever the caller knows the answer.
    #[must_use]
    pub fn from_value(value: T) -> Self {
        if value == T::default() {
            Maybe::Absent
        } else {
            Maybe::Present(value)
        }
    }

    /// Infer presence from `explicit` when given, otherwise from the value itself.
    #[must_use]
    pub fn inferred(value: T, explicit: Option<bool>) -> Self {
        match explicit {
            Some(present) => Self::flagged(value, present),
            None => Self::from_value(value),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}
