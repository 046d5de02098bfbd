//! The error value carried by a failed [`Outcome`](crate::Outcome).
//!
//! A `Fault` always describes its cause. Construction never produces an empty
//! message: blank input is replaced by [`Fault::UNSPECIFIED`].

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// A compile-time checked non-empty static message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaticMessage(&'static str);

impl StaticMessage {
    #[must_use]
    pub const fn new(value: &'static str) -> Self {
        assert!(!value.is_empty(), "StaticMessage must not be empty");
        Self(value)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for StaticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Description of why an operation failed.
///
/// # Invariants
///
/// - The message is never empty after `trim()`
/// - A blank message given to any constructor becomes [`Fault::UNSPECIFIED`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Placeholder used when a failure is created without a usable cause.
    pub const UNSPECIFIED: StaticMessage = StaticMessage::new("None value");

    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::unspecified()
        } else {
            Self { message }
        }
    }

    #[must_use]
    pub fn unspecified() -> Self {
        Self {
            message: Self::UNSPECIFIED.as_str().to_string(),
        }
    }

    /// Capture the display text of another error.
    #[must_use]
    pub fn from_error<E>(err: &E) -> Self
    where
        E: StdError + ?Sized,
    {
        Self::new(err.to_string())
    }

    #[must_use]
    pub fn is_unspecified(&self) -> bool {
        self.message == Self::UNSPECIFIED.as_str()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<&str> for Fault {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Fault {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<StaticMessage> for Fault {
    fn from(value: StaticMessage) -> Self {
        Self::new(value.as_str())
    }
}

impl From<std::num::ParseIntError> for Fault {
    fn from(value: std::num::ParseIntError) -> Self {
        Self::from_error(&value)
    }
}

impl AsRef<str> for Fault {
    fn as_ref(&self) -> &str {
        self.message()
    }
}
