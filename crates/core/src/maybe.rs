//! The present-or-absent container.
//!
//! [`Maybe`] carries no placeholder payload when empty, so a `T` whose default
//! is itself meaningful (`0`, `""`) is never confused with absence.

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// Either a present value or explicit absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Maybe<T> {
    /// No value.
    None,
    /// A present value.
    Some(T),
}

impl<T> Maybe<T> {
    /// Construct a present value.
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Construct an empty value.
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// True iff a value is present.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// True iff no value is present.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrow the value, if present.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Borrow the value, leaving the container in place.
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Return the value.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => unwrap_failed(),
        }
    }

    /// Return the value, or `default` when absent.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Return the value, or compute one when absent.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => f(),
        }
    }

    /// Return the value, or `T::default()` when absent.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Transform the present value.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    /// Turn absence into a failure.
    pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failed(err),
        }
    }

    /// Like [`Maybe::ok_or`], building the failure lazily.
    pub fn ok_or_else<E, F>(self, err: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failed(err()),
        }
    }

    /// Tap into the present value without consuming it.
    pub fn tap_some<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(ref value) = self {
            f(value);
        }
        self
    }

    /// Tap into absence without consuming it.
    pub fn tap_none<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            f();
        }
        self
    }

    /// Convert into a standard library `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::None, Self::Some)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

/// Extension trait turning a standard `Option` into a [`Maybe`].
pub trait IntoMaybe<T> {
    /// Convert, keeping the payload.
    fn into_maybe(self) -> Maybe<T>;
}

impl<T> IntoMaybe<T> for Option<T> {
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from(self)
    }
}

#[cold]
#[track_caller]
#[allow(clippy::panic)]
fn unwrap_failed() -> ! {
    panic!("called `Maybe::unwrap()` on an empty value")
}
