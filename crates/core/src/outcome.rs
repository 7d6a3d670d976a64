//! The value-or-failure container and its extension traits.
//!
//! [`Outcome`] is a tagged union: a success carries only the value, a failure
//! carries only the failure descriptor. Inspect it with [`Outcome::is_ok`],
//! [`Outcome::value`] or [`Outcome::unwrap_or`]; reach for
//! [`Outcome::unwrap`] only once success has been established.
//!
//! # Examples
//!
//! ```
//! use qxcore_core::{Failure, Outcome};
//!
//! let parsed: Outcome<u16> = "8080"
//!     .parse::<u16>()
//!     .map_or_else(Outcome::from_error, Outcome::success);
//! assert!(parsed.is_ok());
//!
//! let missing: Outcome<u16> = Outcome::failure(Failure::msg("no port configured"));
//! assert_eq!(missing.unwrap_or(80), 80);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Failure;
use crate::maybe::Maybe;

/// Either a computed value or a recorded failure, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "this `Outcome` may be a failure, which should be handled"]
pub enum Outcome<T, E = Failure> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed.
    Failed(E),
}

impl<T, E> Outcome<T, E> {
    /// Construct a successful outcome.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Construct a failed outcome.
    pub const fn failure(err: E) -> Self {
        Self::Failed(err)
    }

    /// True iff no failure is recorded.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// True iff a failure is recorded.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Both sides of the outcome. Exactly one of them is `Some`.
    #[must_use]
    pub const fn value(&self) -> (Option<&T>, Option<&E>) {
        match self {
            Self::Success(value) => (Some(value), None),
            Self::Failed(err) => (None, Some(err)),
        }
    }

    /// Owning counterpart of [`Outcome::value`].
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Option<E>) {
        match self {
            Self::Success(value) => (Some(value), None),
            Self::Failed(err) => (None, Some(err)),
        }
    }

    /// Borrow both sides, leaving the outcome in place.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failed(err) => Outcome::Failed(err),
        }
    }

    /// Return the value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure, with the failure descriptor in the
    /// panic message.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failed(err) => unwrap_failed("called `Outcome::unwrap()` on a failed value", &err),
        }
    }

    /// Return the value, or `default` on failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failed(_) => default,
        }
    }

    /// Return the value, or compute one from the failure.
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failed(err) => op(err),
        }
    }

    /// Return the value, or `T::default()` on failure.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Get the value or a default, logging the failure if present.
    pub fn unwrap_or_logged(self, default: T) -> T
    where
        E: fmt::Display,
    {
        self.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "operation failed, using default");
            default
        })
    }

    /// Discard the failure.
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failed(_) => Maybe::None,
        }
    }

    /// Discard the value.
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Success(_) => Maybe::None,
            Self::Failed(err) => Maybe::Some(err),
        }
    }

    /// Transform the success value; failures pass through.
    pub fn map<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(op(value)),
            Self::Failed(err) => Outcome::Failed(err),
        }
    }

    /// Transform the failure descriptor; successes pass through.
    pub fn map_err<E2, F>(self, op: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failed(err) => Outcome::Failed(op(err)),
        }
    }

    /// Chain another fallible step on success.
    pub fn and_then<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => op(value),
            Self::Failed(err) => Outcome::Failed(err),
        }
    }

    /// Inspect the failure without consuming the outcome.
    pub fn inspect_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failed(ref err) = self {
            f(err);
        }
        self
    }

    /// Convert into a standard library `Result`.
    ///
    /// # Errors
    ///
    /// Returns the failure descriptor when the outcome failed.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failed(err) => Err(err),
        }
    }
}

impl<T> Outcome<T, Failure> {
    /// Construct a failed outcome from any error value.
    pub fn from_error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Failed(Failure::new(err))
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failed(err),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Extension trait turning a standard `Result` into an [`Outcome`].
pub trait IntoOutcome<T, E> {
    /// Convert, keeping the error type.
    fn into_outcome(self) -> Outcome<T, E>;

    /// Convert, boxing the error into a shared [`Failure`].
    fn into_failure_outcome(self) -> Outcome<T, Failure>
    where
        E: std::error::Error + Send + Sync + 'static;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }

    fn into_failure_outcome(self) -> Outcome<T, Failure>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Outcome::from(self).map_err(Failure::new)
    }
}

#[cold]
#[track_caller]
#[allow(clippy::panic)]
fn unwrap_failed(msg: &str, err: &dyn fmt::Debug) -> ! {
    panic!("{msg}: {err:?}")
}
