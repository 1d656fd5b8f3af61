//! Sync-to-async lifting

use std::future::Future;

use crate::foundation::{AsyncValidate, Validate, ValidationError};

/// Runs a synchronous validator as an async one.
///
/// Only `Validate` is required of the inner validator, so any tree can be
/// placed next to async-only validators. The result is exactly what the
/// synchronous call returns.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// let lifted = greater_than(3).lift();
/// assert!(futures::executor::block_on(lifted.validate_async(&4)).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lift<V> {
    inner: V,
}

impl<V> Lift<V> {
    /// Wraps a synchronous validator.
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

impl<V> AsyncValidate for Lift<V>
where
    V: Validate + Send + Sync,
    <V as Validate>::Input: Sync,
{
    type Input = <V as Validate>::Input;

    fn validate_async(
        &self,
        input: &Self::Input,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move { self.inner.validate(input) }
    }
}

/// Turns a synchronous validator into an async one.
pub const fn lift<V>(validator: V) -> Lift<V> {
    Lift::new(validator)
}
