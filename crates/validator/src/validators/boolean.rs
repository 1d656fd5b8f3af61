//! Boolean validators

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

use crate::foundation::{AsyncValidate, Validate, ValidationError};

/// Validates that a boolean projection of the input has an expected value.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// struct Terms {
///     accepted: bool,
/// }
///
/// let validator = expect_bool(|t: &Terms| t.accepted, true);
/// assert!(validator.validate(&Terms { accepted: true }).is_ok());
/// assert_eq!(
///     validator.validate(&Terms { accepted: false }).unwrap_err().to_string(),
///     "expected true, found false"
/// );
/// ```
pub struct BoolValidator<T: ?Sized, F> {
    projection: F,
    expecting: bool,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> BoolValidator<T, F> {
    /// Creates the validator.
    pub const fn new(projection: F, expecting: bool) -> Self {
        Self {
            projection,
            expecting,
            _phantom: PhantomData,
        }
    }

    /// The value the projection must produce.
    pub fn expecting(&self) -> bool {
        self.expecting
    }

    fn check(&self, input: &T) -> Result<(), ValidationError>
    where
        F: Fn(&T) -> bool,
    {
        let found = (self.projection)(input);
        if found == self.expecting {
            Ok(())
        } else {
            Err(ValidationError::failed(format!(
                "expected {}, found {found}",
                self.expecting
            )))
        }
    }
}

impl<T: ?Sized, F: Clone> Clone for BoolValidator<T, F> {
    fn clone(&self) -> Self {
        Self::new(self.projection.clone(), self.expecting)
    }
}

impl<T: ?Sized, F> fmt::Debug for BoolValidator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoolValidator")
            .field("expecting", &self.expecting)
            .finish_non_exhaustive()
    }
}

impl<T, F> Validate for BoolValidator<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        self.check(input)
    }
}

impl<T, F> AsyncValidate for BoolValidator<T, F>
where
    T: ?Sized + Sync,
    F: Fn(&T) -> bool + Send + Sync,
{
    type Input = T;

    fn validate_async(
        &self,
        input: &T,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move { self.check(input) }
    }
}

/// Validates that `projection(input) == expecting`.
pub const fn expect_bool<T, F>(projection: F, expecting: bool) -> BoolValidator<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    BoolValidator::new(projection, expecting)
}

fn value(input: &bool) -> bool {
    *input
}

/// Validates that a boolean value is `true`.
pub type IsTrue = BoolValidator<bool, fn(&bool) -> bool>;

/// Validates that a boolean value is `false`.
pub type IsFalse = BoolValidator<bool, fn(&bool) -> bool>;

/// Creates an [`IsTrue`] validator.
#[must_use]
pub const fn is_true() -> IsTrue {
    BoolValidator::new(value, true)
}

/// Creates an [`IsFalse`] validator.
#[must_use]
pub const fn is_false() -> IsFalse {
    BoolValidator::new(value, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_true() {
        assert!(is_true().validate(&true).is_ok());
        assert!(is_true().validate(&false).is_err());
    }

    #[test]
    fn test_is_false() {
        assert!(is_false().validate(&false).is_ok());
        assert!(is_false().validate(&true).is_err());
    }

    #[test]
    fn test_fixed_instances_match_projection() {
        for expecting in [true, false] {
            let projected = expect_bool(|b: &bool| *b, expecting);
            let fixed = if expecting { is_true() } else { is_false() };
            assert_eq!(fixed.expecting(), expecting);
            for input in [true, false] {
                assert_eq!(projected.validate(&input), fixed.validate(&input));
            }
        }
    }

    #[test]
    fn test_fixed_instance_messages() {
        assert_eq!(
            is_true().validate(&false),
            Err(ValidationError::failed("expected true, found false"))
        );
        assert_eq!(
            is_false().validate(&true),
            Err(ValidationError::failed("expected false, found true"))
        );
    }

    #[test]
    fn test_projection_over_str() {
        let ascii = expect_bool(|s: &str| s.is_ascii(), true);
        assert!(ascii.validate("plain").is_ok());
        assert!(ascii.validate("naïve").is_err());
        assert!(ascii.expecting());
    }
}
