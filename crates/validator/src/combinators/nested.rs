//! Nested validators
//!
//! [`Nested`] delegates to the validator a type carries for itself through
//! [`Validatable`], so a parent validator can reuse the rules of its
//! children.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::LazyLock;
//! use tessera_validator::prelude::*;
//!
//! struct Address {
//!     city: String,
//! }
//!
//! static ADDRESS: LazyLock<AnyValidator<Address>> = LazyLock::new(|| {
//!     named_field("city", |a: &Address| &a.city, not_empty::<String>()).erase()
//! });
//!
//! impl Validatable for Address {
//!     type Validator = AnyValidator<Address>;
//!
//!     fn validator() -> &'static Self::Validator {
//!         &ADDRESS
//!     }
//! }
//!
//! struct Customer {
//!     address: Address,
//! }
//!
//! let customer = named_field("address", |c: &Customer| &c.address, nested::<Address>());
//! let error = customer
//!     .validate(&Customer { address: Address { city: String::new() } })
//!     .unwrap_err();
//! assert_eq!(error.to_string(), "address: city: Not validator did not succeed");
//! ```

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

use crate::foundation::{AsyncValidatable, AsyncValidate, Validatable, Validate, ValidationError};

/// Validates a value with its own [`Validatable`] validator.
pub struct Nested<T> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Nested<T> {
    /// Creates a nested validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Nested<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Nested<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Nested<T> {}

impl<T> fmt::Debug for Nested<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nested")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> Validate for Nested<T>
where
    T: Validatable,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        T::validator().validate(input)
    }
}

impl<T> AsyncValidate for Nested<T>
where
    T: AsyncValidatable,
{
    type Input = T;

    fn validate_async(
        &self,
        input: &T,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        T::async_validator().validate_async(input)
    }
}

/// Creates a validator for a [`Validatable`] type.
#[must_use]
pub const fn nested<T>() -> Nested<T> {
    Nested::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{AnyValidator, map_value, named_field};
    use crate::foundation::ValidateExt;
    use crate::validators::greater_than;
    use std::sync::LazyLock;

    struct Dimensions {
        width: u32,
    }

    static DIMENSIONS: LazyLock<AnyValidator<Dimensions>> =
        LazyLock::new(|| map_value(|d: &Dimensions| d.width, greater_than(0_u32)).erase());

    impl Validatable for Dimensions {
        type Validator = AnyValidator<Dimensions>;

        fn validator() -> &'static Self::Validator {
            &DIMENSIONS
        }
    }

    impl AsyncValidatable for Dimensions {
        type AsyncValidator = AnyValidator<Dimensions>;

        fn async_validator() -> &'static Self::AsyncValidator {
            &DIMENSIONS
        }
    }

    struct Poster {
        size: Dimensions,
    }

    #[test]
    fn test_nested_delegates_to_own_validator() {
        assert!(nested::<Dimensions>().validate(&Dimensions { width: 3 }).is_ok());
        assert!(nested::<Dimensions>().validate(&Dimensions { width: 0 }).is_err());
    }

    #[test]
    fn test_nested_inside_parent() {
        let validator = named_field("size", |p: &Poster| &p.size, nested::<Dimensions>());
        let error = validator
            .validate(&Poster {
                size: Dimensions { width: 0 },
            })
            .unwrap_err();
        assert_eq!(error.to_string(), "size: 0 is not greater than 0");
    }

    #[tokio::test]
    async fn test_nested_async() {
        let validator = nested::<Dimensions>();
        assert!(validator.validate_async(&Dimensions { width: 1 }).await.is_ok());
        assert!(validator.validate_async(&Dimensions { width: 0 }).await.is_err());
    }
}
