//! Constant validators
//!
//! [`Always`] and [`Never`] ignore their input. They are mostly useful for
//! exercising combinator plumbing and as neutral elements in composed trees.

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

use crate::foundation::{AsyncValidate, Validate, ValidationError};

/// Message carried by every [`Never`] failure.
pub const NEVER_FAILED: &str = "Never validator always fails";

macro_rules! constant {
    ($(#[$meta:meta])* $name:ident, $outcome:expr) => {
        $(#[$meta])*
        pub struct $name<T: ?Sized> {
            _phantom: PhantomData<fn(&T)>,
        }

        impl<T: ?Sized> $name<T> {
            /// Creates the validator.
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    _phantom: PhantomData,
                }
            }
        }

        impl<T: ?Sized> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: ?Sized> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: ?Sized> Copy for $name<T> {}

        impl<T: ?Sized> PartialEq for $name<T> {
            fn eq(&self, _other: &Self) -> bool {
                true
            }
        }

        impl<T: ?Sized> Eq for $name<T> {}

        impl<T: ?Sized> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl<T: ?Sized> Validate for $name<T> {
            type Input = T;

            fn validate(&self, _input: &T) -> Result<(), ValidationError> {
                $outcome
            }
        }

        impl<T: ?Sized + Sync> AsyncValidate for $name<T> {
            type Input = T;

            fn validate_async(
                &self,
                _input: &T,
            ) -> impl Future<Output = Result<(), ValidationError>> + Send {
                async move { $outcome }
            }
        }
    };
}

constant! {
    /// Succeeds for every input.
    Always, Ok(())
}

constant! {
    /// Fails for every input with [`NEVER_FAILED`].
    Never, Err(ValidationError::failed(NEVER_FAILED))
}

/// Creates a validator that always succeeds.
#[must_use]
pub const fn always<T: ?Sized>() -> Always<T> {
    Always::new()
}

/// Creates a validator that always fails.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// assert_eq!(
///     never::<str>().validate("anything").unwrap_err().to_string(),
///     "Never validator always fails"
/// );
/// ```
#[must_use]
pub const fn never<T: ?Sized>() -> Never<T> {
    Never::new()
}
