//! Failure descriptors carried by a failed [`Outcome`](crate::Outcome).
//!
//! A [`Failure`] is an opaque, shared handle around any error value. Cloning a
//! failure never copies the underlying error, so identity survives every hop
//! through an `Outcome`.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

type DynError = dyn std::error::Error + Send + Sync + 'static;

/// Plain-text error behind [`Failure::msg`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Message(String);

impl Message {
    /// The message text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Default failure descriptor for [`Outcome`](crate::Outcome).
///
/// Equality is identity: two failures are equal only when they share the
/// same underlying error allocation.
#[derive(Clone)]
pub struct Failure {
    inner: Arc<DynError>,
}

impl Failure {
    /// Wrap an arbitrary error value.
    pub fn new<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(err),
        }
    }

    /// Create a failure from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }

    /// True when both handles point at the same error instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Borrow the wrapped error as a concrete type, if it is one.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Borrow the wrapped error.
    #[must_use]
    pub fn as_error(&self) -> &DynError {
        &*self.inner
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Failure").field(&self.inner.to_string()).finish()
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Failure {}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Self::msg(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::msg(message)
    }
}

impl From<std::io::Error> for Failure {
    fn from(err: std::io::Error) -> Self {
        Self::new(err)
    }
}
