//! # QXCore Core
//!
//! Generic container types shared across QXCore.
//!
//! - [`Outcome`] holds either a computed value or a failure descriptor.
//! - [`Maybe`] holds either a present value or explicit absence.
//!
//! Both are tagged unions: the empty side carries no placeholder payload, so
//! there is no "zero value" to misread.
//!
//! ## Error Handling
//!
//! The recoverable path is the expected one: `is_ok`/`is_err`, `value`,
//! `unwrap_or` and friends. `unwrap` is a fail-loud trap that panics on a
//! failed `Outcome` or an empty `Maybe`; call it only after success has been
//! established.

#![warn(missing_docs)]

mod error;
mod maybe;
mod outcome;

pub use error::{Failure, Message};
pub use maybe::{IntoMaybe, Maybe};
pub use outcome::{IntoOutcome, Outcome};

/// Current version of QXCore.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_not_empty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_is_semver_triple() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|part| part.parse::<u64>().is_ok()));
    }
}
