//! Type-erased validators
//!
//! [`AnyValidator`] and [`AnyAsyncValidator`] hide the concrete type of a
//! composed validator behind a shared pointer, so trees with different
//! shapes can be stored side by side or returned from functions without
//! naming their types.
//!
//! Erasure is idempotent: erasing an erased validator returns it as is,
//! sharing the same allocation, instead of adding a layer.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::foundation::{AsyncValidate, Validate, ValidationError};

// ============================================================================
// SYNC
// ============================================================================

/// A synchronous validator with its concrete type erased.
///
/// Also usable as an async validator; it never suspends.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// let rules: Vec<AnyValidator<i32>> = vec![
///     greater_than(0).erase(),
///     greater_than(0).and(less_than(10)).erase(),
/// ];
/// assert!(rules.iter().all(|rule| rule.validate(&5).is_ok()));
///
/// let again = rules[0].clone().erase();
/// assert!(again.ptr_eq(&rules[0]));
/// ```
pub struct AnyValidator<T: ?Sized> {
    inner: Arc<dyn Validate<Input = T> + Send + Sync>,
}

impl<T: ?Sized + 'static> AnyValidator<T> {
    /// Erases `validator`; an [`AnyValidator`] is returned unchanged.
    pub fn new<V>(validator: V) -> Self
    where
        V: Validate<Input = T> + Send + Sync + 'static,
    {
        if let Some(erased) = (&validator as &dyn Any).downcast_ref::<Self>() {
            return erased.clone();
        }
        Self {
            inner: Arc::new(validator),
        }
    }
}

impl<T: ?Sized> AnyValidator<T> {
    /// Returns true if both wrappers share the same validator.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: ?Sized> Clone for AnyValidator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> fmt::Debug for AnyValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyValidator").finish_non_exhaustive()
    }
}

impl<T: ?Sized> Validate for AnyValidator<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        self.inner.validate(input)
    }
}

impl<T: ?Sized + Sync> AsyncValidate for AnyValidator<T> {
    type Input = T;

    fn validate_async(
        &self,
        input: &T,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move { self.inner.validate(input) }
    }
}

// ============================================================================
// ASYNC
// ============================================================================

/// Object-safe form of [`AsyncValidate`].
trait DynAsyncValidate<T: ?Sized>: Send + Sync {
    fn validate_boxed<'a>(&'a self, input: &'a T) -> BoxFuture<'a, Result<(), ValidationError>>;
}

impl<V> DynAsyncValidate<<V as AsyncValidate>::Input> for V
where
    V: AsyncValidate,
{
    fn validate_boxed<'a>(
        &'a self,
        input: &'a <V as AsyncValidate>::Input,
    ) -> BoxFuture<'a, Result<(), ValidationError>> {
        self.validate_async(input).boxed()
    }
}

/// An async validator with its concrete type erased.
///
/// There is no synchronous counterpart: this type does not implement
/// [`Validate`].
pub struct AnyAsyncValidator<T: ?Sized> {
    inner: Arc<dyn DynAsyncValidate<T>>,
}

impl<T: ?Sized + Sync + 'static> AnyAsyncValidator<T> {
    /// Erases `validator`; an [`AnyAsyncValidator`] is returned unchanged.
    pub fn new<V>(validator: V) -> Self
    where
        V: AsyncValidate<Input = T> + 'static,
    {
        if let Some(erased) = (&validator as &dyn Any).downcast_ref::<Self>() {
            return erased.clone();
        }
        Self {
            inner: Arc::new(validator),
        }
    }
}

impl<T: ?Sized> AnyAsyncValidator<T> {
    /// Returns true if both wrappers share the same validator.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: ?Sized> Clone for AnyAsyncValidator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> fmt::Debug for AnyAsyncValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyAsyncValidator").finish_non_exhaustive()
    }
}

impl<T: ?Sized + Sync> AsyncValidate for AnyAsyncValidator<T> {
    type Input = T;

    fn validate_async(
        &self,
        input: &T,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move { self.inner.validate_boxed(input).await }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ValidateExt, from_async_fn};
    use crate::validators::{greater_than, less_than};

    #[test]
    fn test_erase_keeps_behaviour() {
        let concrete = greater_than(0).and(less_than(10));
        let erased = concrete.clone().erase();
        for input in [-1, 5, 10] {
            assert_eq!(erased.validate(&input), concrete.validate(&input));
        }
    }

    #[test]
    fn test_erase_is_idempotent() {
        let once = greater_than(0).erase();
        let twice = once.clone().erase();
        let thrice = AnyValidator::new(twice.clone());
        assert!(once.ptr_eq(&twice));
        assert!(once.ptr_eq(&thrice));
        assert_eq!(thrice.validate(&0), once.validate(&0));
    }

    #[test]
    fn test_distinct_erasures_do_not_share() {
        assert!(!greater_than(0).erase().ptr_eq(&greater_than(0).erase()));
    }

    #[tokio::test]
    async fn test_erased_sync_is_async_too() {
        let erased = greater_than(0).erase();
        assert_eq!(erased.validate_async(&0).await, erased.validate(&0));
    }

    #[tokio::test]
    async fn test_erase_async() {
        let positive = from_async_fn(|n: &i32| {
            let n = *n;
            async move {
                if n > 0 {
                    Ok(())
                } else {
                    Err(ValidationError::failed("not positive"))
                }
            }
            .boxed()
        })
        .erase_async();
        assert!(positive.validate_async(&1).await.is_ok());
        assert!(positive.validate_async(&0).await.is_err());

        let again = positive.clone().erase_async();
        assert!(again.ptr_eq(&positive));
    }
}
