//! NOT combinator - logical negation of validators
//!
//! This module provides the [`Not`] combinator which inverts the result
//! of a validator: it succeeds when the inner validator fails and vice versa.
//!
//! # Examples
//!
//! ```rust
//! use tessera_validator::prelude::*;
//!
//! let validator = equals(0).not();
//! assert!(validator.validate(&1).is_ok());
//! assert!(validator.validate(&0).is_err());
//! ```

use std::future::Future;

use crate::foundation::{AsyncValidate, NOT_FAILED, Validate, ValidationError};

/// Inverts a validator with logical NOT.
///
/// - If the inner validator succeeds, `Not` fails with a fixed message
/// - If the inner validator fails, `Not` succeeds and the inner error is
///   dropped
/// - A foreign error from the inner validator is returned unchanged
///
/// The inner error is never wrapped, so a failing `Not` carries no detail
/// about what the inner validator checked.
///
/// # Type Parameters
///
/// * `V` - The inner validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    /// The inner validator to invert.
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub const fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

fn invert(outcome: Result<(), ValidationError>) -> Result<(), ValidationError> {
    match outcome {
        Ok(()) => Err(ValidationError::failed(NOT_FAILED)),
        Err(error @ ValidationError::Foreign(_)) => Err(error),
        Err(_) => Ok(()),
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = <V as Validate>::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        invert(self.inner.validate(input))
    }
}

impl<V> AsyncValidate for Not<V>
where
    V: AsyncValidate,
{
    type Input = <V as AsyncValidate>::Input;

    fn validate_async(
        &self,
        input: &Self::Input,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move { invert(self.inner.validate_async(input).await) }
    }
}

/// Creates a `Not` combinator that inverts the validator.
pub const fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}
