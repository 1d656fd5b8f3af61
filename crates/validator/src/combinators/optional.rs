//! OPTIONAL combinators - validate `Option` inputs
//!
//! Two deliberately different policies for an absent value:
//!
//! - [`Optional`] treats `None` as a vacuous pass
//! - [`MapOptional`] treats `None` as a failed precondition
//!
//! In both cases a present value is unwrapped and handed to the inner
//! validator.

use std::future::Future;

use crate::foundation::{AsyncValidate, EXPECTED_SOME, Validate, ValidationError};

/// Makes a validator work with `Option` inputs; `None` passes.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// let validator = greater_than(10).optional();
/// assert!(validator.validate(&None).is_ok());
/// assert!(validator.validate(&Some(11)).is_ok());
/// assert!(validator.validate(&Some(3)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    /// Wraps `inner`.
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

impl<V, T> Validate for Optional<V>
where
    V: Validate<Input = T>,
{
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            None => Ok(()),
            Some(value) => self.inner.validate(value),
        }
    }
}

impl<V, T> AsyncValidate for Optional<V>
where
    V: AsyncValidate<Input = T>,
    T: Sync,
{
    type Input = Option<T>;

    fn validate_async(
        &self,
        input: &Self::Input,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move {
            match input {
                None => Ok(()),
                Some(value) => self.inner.validate_async(value).await,
            }
        }
    }
}

/// Lifts a validator to `Option` input; `None` passes.
pub const fn optional<V>(validator: V) -> Optional<V> {
    Optional::new(validator)
}

/// Makes a validator work with `Option` inputs; `None` fails.
///
/// The inner validator never sees an absent value.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// let validator = greater_than(10).required();
/// assert_eq!(
///     validator.validate(&None).unwrap_err().to_string(),
///     "expected a value, found None"
/// );
/// assert!(validator.validate(&Some(11)).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapOptional<V> {
    pub(crate) inner: V,
}

impl<V> MapOptional<V> {
    /// Wraps `inner`.
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

impl<V, T> Validate for MapOptional<V>
where
    V: Validate<Input = T>,
{
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            None => Err(ValidationError::failed(EXPECTED_SOME)),
            Some(value) => self.inner.validate(value),
        }
    }
}

impl<V, T> AsyncValidate for MapOptional<V>
where
    V: AsyncValidate<Input = T>,
    T: Sync,
{
    type Input = Option<T>;

    fn validate_async(
        &self,
        input: &Self::Input,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move {
            match input {
                None => Err(ValidationError::failed(EXPECTED_SOME)),
                Some(value) => self.inner.validate_async(value).await,
            }
        }
    }
}

/// Lifts a validator to `Option` input; `None` fails.
pub const fn map_optional<V>(validator: V) -> MapOptional<V> {
    MapOptional::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::from_fn;
    use std::cell::Cell;

    fn min_length(min: usize) -> impl Validate<Input = String> {
        from_fn(move |s: &String| {
            if s.len() >= min {
                Ok(())
            } else {
                Err(ValidationError::failed(format!("shorter than {min}")))
            }
        })
    }

    #[test]
    fn test_optional_none_passes() {
        let validator = optional(min_length(5));
        assert!(validator.validate(&None).is_ok());
    }

    #[test]
    fn test_optional_some_delegates() {
        let validator = optional(min_length(5));
        assert!(validator.validate(&Some("hello".to_string())).is_ok());
        assert!(validator.validate(&Some("hi".to_string())).is_err());
    }

    #[test]
    fn test_map_optional_none_fails_without_calling_inner() {
        let calls = Cell::new(0);
        let validator = map_optional(from_fn(|_: &u8| {
            calls.set(calls.get() + 1);
            Ok(())
        }));
        assert_eq!(
            validator.validate(&None),
            Err(ValidationError::failed(EXPECTED_SOME))
        );
        assert_eq!(calls.get(), 0);
        assert!(validator.validate(&Some(1)).is_ok());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_async_policies() {
        let check = from_fn(|n: &i32| {
            if *n > 0 {
                Ok(())
            } else {
                Err(ValidationError::failed("not positive"))
            }
        });
        assert!(optional(check.clone()).validate_async(&None).await.is_ok());
        assert!(map_optional(check.clone()).validate_async(&None).await.is_err());
        assert!(map_optional(check).validate_async(&Some(-1)).await.is_err());
    }
}
