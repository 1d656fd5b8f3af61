//! Core traits for the validation system
//!
//! [`Validate`] is the synchronous capability, [`AsyncValidate`] the
//! suspendable one. Combinator structs implement whichever of the two their
//! children implement, so the same tree can be evaluated in either mode.
//!
//! [`ValidateExt`] provides the fluent composition API and is implemented
//! for every type; the bounds are checked where the composed value is used
//! as a validator. Method names avoid those of `Iterator` and the futures
//! extension traits so the prelude can be glob-imported next to them.

use std::borrow::Cow;
use std::future::Future;

use crate::combinators::{
    AnyAsyncValidator, AnyValidator, ErrorLabel, Field, Lift, Map, MapError, MapOptional, Not,
    Optional, Pair, Policy, ReplaceError,
};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all synchronous validators implement.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust
/// use tessera_validator::foundation::{Validate, ValidationError};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.len() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::failed(format!(
///                 "must be at least {} characters",
///                 self.min
///             )))
///         }
///     }
/// }
///
/// assert!(MinLength { min: 3 }.validate("abc").is_ok());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// ASYNC VALIDATOR TRAIT
// ============================================================================

/// Suspendable version of the validator trait.
///
/// Use this for validators that need to await something, such as a
/// database lookup. Children of a composed tree are still awaited one at a
/// time, in order.
///
/// A synchronous validator can be turned into an async one with
/// [`ValidateExt::lift`]; there is deliberately no conversion in the other
/// direction.
///
/// # Examples
///
/// ```rust
/// use std::future::Future;
/// use tessera_validator::foundation::{AsyncValidate, ValidationError};
///
/// struct UsernameFree;
///
/// impl AsyncValidate for UsernameFree {
///     type Input = str;
///
///     fn validate_async(
///         &self,
///         input: &Self::Input,
///     ) -> impl Future<Output = Result<(), ValidationError>> + Send {
///         let taken = input == "admin";
///         async move {
///             if taken {
///                 Err(ValidationError::failed("username is taken"))
///             } else {
///                 Ok(())
///             }
///         }
///     }
/// }
/// ```
pub trait AsyncValidate: Send + Sync {
    /// The type of input being validated.
    type Input: ?Sized + Sync;

    /// Asynchronously validates the input value.
    fn validate_async(
        &self,
        input: &Self::Input,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send;
}

impl<V: AsyncValidate + ?Sized> AsyncValidate for &V {
    type Input = V::Input;

    fn validate_async(
        &self,
        input: &Self::Input,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        (**self).validate_async(input)
    }
}

impl<V: AsyncValidate + ?Sized> AsyncValidate for Box<V> {
    type Input = V::Input;

    fn validate_async(
        &self,
        input: &Self::Input,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        (**self).validate_async(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// The produced combinators implement [`Validate`] and/or [`AsyncValidate`]
/// depending on what their children implement.
///
/// # Examples
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// let validator = greater_than(0).and(less_than(100));
/// assert!(validator.validate(&42).is_ok());
/// assert!(validator.validate(&0).is_err());
/// ```
pub trait ValidateExt: Sized {
    /// Sequences two validators, stopping at the first failure.
    ///
    /// ```rust
    /// use tessera_validator::prelude::*;
    ///
    /// let validator = greater_than(3).and(less_than(10));
    /// assert!(validator.validate(&5).is_ok());
    /// assert!(validator.validate(&2).is_err());
    /// ```
    fn and<V>(self, other: V) -> Pair<Self, V> {
        Pair::new(self, other, Policy::EarlyExit)
    }

    /// Runs both validators and aggregates every failure.
    ///
    /// Fails with a [`ValidationError::ManyFailed`] holding exactly the
    /// failing children, even if only one of them failed.
    fn accumulate<V>(self, other: V) -> Pair<Self, V> {
        Pair::new(self, other, Policy::Accumulate)
    }

    /// Succeeds if either validator succeeds, trying `self` first.
    ///
    /// ```rust
    /// use tessera_validator::prelude::*;
    ///
    /// let validator = equals(5).or(greater_than(10));
    /// assert!(validator.validate(&5).is_ok());
    /// assert!(validator.validate(&11).is_ok());
    /// assert!(validator.validate(&7).is_err());
    /// ```
    fn or<V>(self, other: V) -> Pair<Self, V> {
        Pair::new(self, other, Policy::OneOf)
    }

    /// Inverts the validator.
    ///
    /// The inner error is discarded; the failure carries a fixed message.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Lifts the validator to `Option` input, passing on `None`.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Lifts the validator to `Option` input, failing on `None`.
    fn required(self) -> MapOptional<Self> {
        MapOptional::new(self)
    }

    /// Runs `self`, then the validator computed from the value.
    ///
    /// ```rust
    /// use tessera_validator::prelude::*;
    ///
    /// // Even numbers must be positive, odd numbers must be negative.
    /// let validator = always::<i32>().and_then(|n: &i32| {
    ///     either(n % 2 == 0, greater_than(0), less_than(0))
    /// });
    /// assert!(validator.validate(&4).is_ok());
    /// assert!(validator.validate(&3).is_err());
    /// ```
    ///
    /// This is value-dependent validator selection, not a change of input
    /// type; see [`map_value`](crate::combinators::map_value) for that.
    fn and_then<F>(self, downstream: F) -> Map<Self, F> {
        Map::new(self, downstream)
    }

    /// Replaces any failure with the error computed by `f`.
    fn map_error<F>(self, f: F) -> MapError<Self, F>
    where
        F: Fn(ValidationError) -> ValidationError,
    {
        MapError::new(self, f)
    }

    /// Replaces any failure with a fixed error.
    fn replace_error(self, error: ValidationError) -> ReplaceError<Self> {
        ReplaceError::new(self, error)
    }

    /// Replaces any failure with a leaf failure carrying `message`.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> ReplaceError<Self> {
        ReplaceError::new(self, ValidationError::failed(message))
    }

    /// Nests failures under a block label.
    fn labeled(self, label: impl Into<Cow<'static, str>>) -> ErrorLabel<Self> {
        ErrorLabel::new(self, label, false)
    }

    /// Nests failures under a label rendered inline with the message.
    fn labeled_inline(self, label: impl Into<Cow<'static, str>>) -> ErrorLabel<Self> {
        ErrorLabel::new(self, label, true)
    }

    /// Applies the validator to a field of a parent value.
    ///
    /// ```rust
    /// use tessera_validator::prelude::*;
    ///
    /// struct Order {
    ///     quantity: u32,
    /// }
    ///
    /// let validator = greater_than(0_u32).for_field(|o: &Order| &o.quantity);
    /// assert!(validator.validate(&Order { quantity: 2 }).is_ok());
    /// ```
    fn for_field<T, F>(self, accessor: F) -> Field<T, Self::Input, Self, F>
    where
        Self: Validate,
        F: Fn(&T) -> &Self::Input,
    {
        Field::new(self, accessor)
    }

    /// Hides the concrete validator type.
    ///
    /// Erasing an already erased validator returns it unchanged.
    fn erase(self) -> AnyValidator<Self::Input>
    where
        Self: Validate + Send + Sync + 'static,
        Self::Input: 'static,
    {
        AnyValidator::new(self)
    }

    /// Hides the concrete async validator type.
    ///
    /// Erasing an already erased validator returns it unchanged.
    fn erase_async(self) -> AnyAsyncValidator<<Self as AsyncValidate>::Input>
    where
        Self: AsyncValidate + 'static,
        <Self as AsyncValidate>::Input: 'static,
    {
        AnyAsyncValidator::new(self)
    }

    /// Turns a synchronous validator into an async one.
    fn lift(self) -> Lift<Self>
    where
        Self: Validate,
    {
        Lift::new(self)
    }
}

impl<T> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
    }

    #[test]
    fn test_reference_and_box_forward() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(AlwaysValid);
        assert!(boxed.validate("x").is_ok());
        assert!((&AlwaysValid).validate("x").is_ok());
    }
}
