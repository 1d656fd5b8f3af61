//! Closure-backed validators
//!
//! [`from_fn`] wraps a plain function as a synchronous validator,
//! [`from_async_fn`] wraps a function returning a boxed future as an async
//! one. Closures are the usual way to plug in checks that have no built-in
//! primitive, including checks that fail with a foreign error.

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

use futures::future::BoxFuture;

use crate::foundation::{AsyncValidate, Validate, ValidationError};

// ============================================================================
// SYNC
// ============================================================================

/// A validator backed by a closure.
///
/// # Examples
///
/// ```rust
/// use tessera_validator::foundation::{Validate, ValidationError, from_fn};
///
/// let even = from_fn(|n: &u32| {
///     if n % 2 == 0 {
///         Ok(())
///     } else {
///         Err(ValidationError::failed(format!("{n} is odd")))
///     }
/// });
///
/// assert!(even.validate(&4).is_ok());
/// assert!(even.validate(&3).is_err());
/// ```
pub struct FnValidator<T: ?Sized, F> {
    check: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> FnValidator<T, F> {
    /// Creates a validator from a closure.
    pub const fn new(check: F) -> Self {
        Self {
            check,
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, F: Clone> Clone for FnValidator<T, F> {
    fn clone(&self) -> Self {
        Self::new(self.check.clone())
    }
}

impl<T: ?Sized, F> fmt::Debug for FnValidator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator")
            .field("check", &"<function>")
            .finish()
    }
}

impl<T, F> Validate for FnValidator<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), ValidationError>,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        (self.check)(input)
    }
}

impl<T, F> AsyncValidate for FnValidator<T, F>
where
    T: ?Sized + Sync,
    F: Fn(&T) -> Result<(), ValidationError> + Send + Sync,
{
    type Input = T;

    fn validate_async(
        &self,
        input: &T,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move { (self.check)(input) }
    }
}

/// Creates a validator from a closure.
pub fn from_fn<T, F>(check: F) -> FnValidator<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), ValidationError>,
{
    FnValidator::new(check)
}

// ============================================================================
// ASYNC
// ============================================================================

/// An async validator backed by a closure returning a boxed future.
///
/// There is no synchronous counterpart: this type does not implement
/// [`Validate`].
///
/// # Examples
///
/// ```rust
/// use futures::FutureExt;
/// use tessera_validator::foundation::{ValidationError, from_async_fn};
///
/// let positive = from_async_fn(|n: &i64| {
///     let n = *n;
///     async move {
///         if n > 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::failed("must be positive"))
///         }
///     }
///     .boxed()
/// });
/// # let _ = positive;
/// ```
pub struct AsyncFnValidator<T: ?Sized, F> {
    check: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F: Clone> Clone for AsyncFnValidator<T, F> {
    fn clone(&self) -> Self {
        Self {
            check: self.check.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for AsyncFnValidator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncFnValidator")
            .field("check", &"<function>")
            .finish()
    }
}

impl<T, F> AsyncValidate for AsyncFnValidator<T, F>
where
    T: ?Sized + Sync,
    F: for<'a> Fn(&'a T) -> BoxFuture<'a, Result<(), ValidationError>> + Send + Sync,
{
    type Input = T;

    fn validate_async(
        &self,
        input: &T,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        (self.check)(input)
    }
}

/// Creates an async validator from a closure returning a boxed future.
pub fn from_async_fn<T, F>(check: F) -> AsyncFnValidator<T, F>
where
    T: ?Sized + Sync,
    F: for<'a> Fn(&'a T) -> BoxFuture<'a, Result<(), ValidationError>> + Send + Sync,
{
    AsyncFnValidator {
        check,
        _phantom: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    #[derive(Debug, thiserror::Error)]
    #[error("lookup unavailable")]
    struct LookupUnavailable;

    #[test]
    fn test_from_fn() {
        let v = from_fn(|s: &str| {
            if s.is_empty() {
                Err(ValidationError::failed("empty"))
            } else {
                Ok(())
            }
        });
        assert!(v.validate("x").is_ok());
        assert_eq!(v.validate(""), Err(ValidationError::failed("empty")));
    }

    #[test]
    fn test_from_fn_foreign_error_passes_through() {
        let v = from_fn(|_: &i32| Err(ValidationError::foreign(LookupUnavailable)));
        let error = v.validate(&1).unwrap_err();
        assert!(error.downcast_foreign_ref::<LookupUnavailable>().is_some());
    }

    #[tokio::test]
    async fn test_from_async_fn() {
        let v = from_async_fn(|n: &i32| {
            let n = *n;
            async move {
                tokio::task::yield_now().await;
                if n > 0 {
                    Ok(())
                } else {
                    Err(ValidationError::failed("not positive"))
                }
            }
            .boxed()
        });
        assert!(v.validate_async(&1).await.is_ok());
        assert!(v.validate_async(&0).await.is_err());
    }

    #[tokio::test]
    async fn test_fn_validator_is_async_too() {
        let v = from_fn(|n: &i32| {
            if *n == 1 {
                Ok(())
            } else {
                Err(ValidationError::failed("not one"))
            }
        });
        assert_eq!(v.validate_async(&2).await, v.validate(&2));
    }
}
