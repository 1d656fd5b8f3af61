//! Error replacement combinators
//!
//! [`MapError`] computes a new error from the original one, [`ReplaceError`]
//! swaps in a fixed error. Either way the original error is gone. Whatever
//! the mapping function returns, including a foreign error, propagates
//! unmodified.

use std::fmt;
use std::future::Future;

use crate::foundation::{AsyncValidate, Validate, ValidationError};

// ============================================================================
// MAP ERROR
// ============================================================================

/// Replaces failures with the error computed by a function.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// let validator = greater_than(0).map_error(|error| {
///     ValidationError::labeled("quantity", true, error)
/// });
/// assert_eq!(
///     validator.validate(&0).unwrap_err().to_string(),
///     "quantity: 0 is not greater than 0"
/// );
/// ```
#[derive(Clone)]
pub struct MapError<V, F> {
    inner: V,
    map: F,
}

impl<V, F> MapError<V, F> {
    /// Creates a new `MapError` combinator.
    pub const fn new(inner: V, map: F) -> Self {
        Self { inner, map }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: fmt::Debug, F> fmt::Debug for MapError<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapError")
            .field("inner", &self.inner)
            .field("map", &"<function>")
            .finish()
    }
}

impl<V, F> Validate for MapError<V, F>
where
    V: Validate,
    F: Fn(ValidationError) -> ValidationError,
{
    type Input = <V as Validate>::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(&self.map)
    }
}

impl<V, F> AsyncValidate for MapError<V, F>
where
    V: AsyncValidate,
    F: Fn(ValidationError) -> ValidationError + Send + Sync,
{
    type Input = <V as AsyncValidate>::Input;

    fn validate_async(
        &self,
        input: &Self::Input,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move { self.inner.validate_async(input).await.map_err(&self.map) }
    }
}

/// Replaces failures of `validator` with `map(error)`.
pub const fn map_error<V, F>(validator: V, map: F) -> MapError<V, F>
where
    F: Fn(ValidationError) -> ValidationError,
{
    MapError::new(validator, map)
}

// ============================================================================
// REPLACE ERROR
// ============================================================================

/// Replaces failures with a fixed error.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// let validator = greater_than(17).with_message("must be an adult");
/// assert_eq!(
///     validator.validate(&12),
///     Err(ValidationError::failed("must be an adult"))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ReplaceError<V> {
    inner: V,
    error: ValidationError,
}

impl<V> ReplaceError<V> {
    /// Creates a new `ReplaceError` combinator.
    pub const fn new(inner: V, error: ValidationError) -> Self {
        Self { inner, error }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// The replacement error.
    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

impl<V> Validate for ReplaceError<V>
where
    V: Validate,
{
    type Input = <V as Validate>::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|_| self.error.clone())
    }
}

impl<V> AsyncValidate for ReplaceError<V>
where
    V: AsyncValidate,
{
    type Input = <V as AsyncValidate>::Input;

    fn validate_async(
        &self,
        input: &Self::Input,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move {
            self.inner
                .validate_async(input)
                .await
                .map_err(|_| self.error.clone())
        }
    }
}

/// Replaces failures of `validator` with `error`.
pub const fn replace_error<V>(validator: V, error: ValidationError) -> ReplaceError<V> {
    ReplaceError::new(validator, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{always, greater_than, never};

    #[derive(Debug, thiserror::Error)]
    #[error("quota service unavailable")]
    struct QuotaUnavailable;

    #[test]
    fn test_replace_error() {
        let replacement = ValidationError::failed("custom");
        let validator = never::<u8>().replace_error(replacement.clone());
        assert_eq!(validator.validate(&0), Err(replacement));
    }

    #[test]
    fn test_replace_error_passes_success_through() {
        assert!(replace_error(always::<u8>(), ValidationError::failed("x")).validate(&0).is_ok());
    }

    #[test]
    fn test_map_error_sees_original() {
        let validator = greater_than(3).map_error(|error| {
            ValidationError::failed(format!("rejected: {error}"))
        });
        assert_eq!(
            validator.validate(&1),
            Err(ValidationError::failed("rejected: 1 is not greater than 3"))
        );
    }

    #[test]
    fn test_map_error_to_foreign_propagates() {
        let validator = map_error(never::<u8>(), |_| ValidationError::foreign(QuotaUnavailable));
        let error = validator.validate(&0).unwrap_err();
        assert!(error.downcast_foreign_ref::<QuotaUnavailable>().is_some());
    }

    #[tokio::test]
    async fn test_async_with_message() {
        let validator = greater_than(3).with_message("too small");
        assert_eq!(
            validator.validate_async(&1).await,
            Err(ValidationError::failed("too small"))
        );
    }
}
