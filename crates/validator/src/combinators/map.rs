//! Mapping combinators
//!
//! - [`Map`] runs an upstream validator, then a validator chosen from the
//!   value itself. Input type is unchanged.
//! - [`MapValue`] transforms the value, possibly into another type, and
//!   validates only the transformed value.

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

use crate::foundation::{AsyncValidate, Validate, ValidationError};

// ============================================================================
// MAP
// ============================================================================

/// Upstream validation followed by a value-dependent validator.
///
/// Behaves like an early-exit pair whose second child is computed from the
/// input. The downstream function is not called when upstream fails.
#[derive(Clone)]
pub struct Map<V, F> {
    upstream: V,
    downstream: F,
}

impl<V, F> Map<V, F> {
    /// Creates a new `Map` combinator.
    pub const fn new(upstream: V, downstream: F) -> Self {
        Self {
            upstream,
            downstream,
        }
    }

    /// Returns a reference to the upstream validator.
    pub fn upstream(&self) -> &V {
        &self.upstream
    }
}

impl<V: fmt::Debug, F> fmt::Debug for Map<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("upstream", &self.upstream)
            .field("downstream", &"<function>")
            .finish()
    }
}

impl<V, F, W> Validate for Map<V, F>
where
    V: Validate,
    F: Fn(&<V as Validate>::Input) -> W,
    W: Validate<Input = <V as Validate>::Input>,
{
    type Input = <V as Validate>::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.upstream.validate(input)?;
        (self.downstream)(input).validate(input)
    }
}

impl<V, F, W> AsyncValidate for Map<V, F>
where
    V: AsyncValidate,
    F: Fn(&<V as AsyncValidate>::Input) -> W + Send + Sync,
    W: AsyncValidate<Input = <V as AsyncValidate>::Input>,
{
    type Input = <V as AsyncValidate>::Input;

    fn validate_async(
        &self,
        input: &Self::Input,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move {
            self.upstream.validate_async(input).await?;
            (self.downstream)(input).validate_async(input).await
        }
    }
}

/// Runs `upstream`, then the validator `downstream` builds from the value.
pub const fn map<V, F>(upstream: V, downstream: F) -> Map<V, F> {
    Map::new(upstream, downstream)
}

// ============================================================================
// MAP VALUE
// ============================================================================

/// Validates a value derived from the input.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// let short = map_value(|s: &str| s.chars().count(), less_than(5_usize));
/// assert!(short.validate("ab").is_ok());
/// assert!(short.validate("abcdef").is_err());
/// ```
pub struct MapValue<T: ?Sized, U, V, F> {
    transform: F,
    validator: V,
    _phantom: PhantomData<fn(&T) -> U>,
}

impl<T: ?Sized, U, V, F> MapValue<T, U, V, F> {
    /// Creates a new `MapValue` combinator.
    pub const fn new(transform: F, validator: V) -> Self {
        Self {
            transform,
            validator,
            _phantom: PhantomData,
        }
    }

    /// Returns a reference to the validator of the transformed value.
    pub fn validator(&self) -> &V {
        &self.validator
    }
}

impl<T: ?Sized, U, V: Clone, F: Clone> Clone for MapValue<T, U, V, F> {
    fn clone(&self) -> Self {
        Self::new(self.transform.clone(), self.validator.clone())
    }
}

impl<T: ?Sized, U, V: fmt::Debug, F> fmt::Debug for MapValue<T, U, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapValue")
            .field("transform", &"<function>")
            .field("validator", &self.validator)
            .finish()
    }
}

impl<T, U, V, F> Validate for MapValue<T, U, V, F>
where
    T: ?Sized,
    V: Validate<Input = U>,
    F: Fn(&T) -> U,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        self.validator.validate(&(self.transform)(input))
    }
}

impl<T, U, V, F> AsyncValidate for MapValue<T, U, V, F>
where
    T: ?Sized + Sync,
    U: Send + Sync,
    V: AsyncValidate<Input = U>,
    F: Fn(&T) -> U + Send + Sync,
{
    type Input = T;

    fn validate_async(
        &self,
        input: &T,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move {
            let value = (self.transform)(input);
            self.validator.validate_async(&value).await
        }
    }
}

/// Validates `transform(input)` with `validator`.
pub const fn map_value<T, U, V, F>(transform: F, validator: V) -> MapValue<T, U, V, F>
where
    T: ?Sized,
    F: Fn(&T) -> U,
{
    MapValue::new(transform, validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::either;
    use crate::foundation::ValidateExt;
    use crate::validators::{always, greater_than, less_than, never};
    use std::cell::Cell;

    #[test]
    fn test_map_selects_validator_from_value() {
        let validator =
            always::<i32>().and_then(|n: &i32| either(*n >= 0, less_than(100), greater_than(-100)));
        assert!(validator.validate(&50).is_ok());
        assert!(validator.validate(&-50).is_ok());
        assert!(validator.validate(&150).is_err());
        assert!(validator.validate(&-150).is_err());
    }

    #[test]
    fn test_map_skips_downstream_when_upstream_fails() {
        let built = Cell::new(0);
        let validator = map(never::<i32>(), |_: &i32| {
            built.set(built.get() + 1);
            always::<i32>()
        });
        assert!(validator.validate(&1).is_err());
        assert_eq!(built.get(), 0);
    }

    #[test]
    fn test_map_value_changes_type() {
        let validator = map_value(|s: &String| s.len(), greater_than(2_usize));
        assert!(validator.validate(&"abc".to_string()).is_ok());
        assert_eq!(
            validator.validate(&"ab".to_string()),
            Err(ValidationError::failed("2 is not greater than 2"))
        );
    }

    #[tokio::test]
    async fn test_async_map() {
        let validator = map(greater_than(0), |n: &i32| {
            either(n % 2 == 0, always::<i32>(), never::<i32>())
        });
        assert!(validator.validate_async(&2).await.is_ok());
        assert!(validator.validate_async(&3).await.is_err());
        assert!(validator.validate_async(&-2).await.is_err());

        let validator = map_value(|n: &i32| n.unsigned_abs(), less_than(10_u32));
        assert!(validator.validate_async(&-5).await.is_ok());
        assert!(validator.validate_async(&-50).await.is_err());
    }
}
