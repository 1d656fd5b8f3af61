//! Conditional composition
//!
//! [`Either`] holds exactly one of two validator shapes and delegates to
//! whichever is present. An `Option<V>` validator is the single-branch
//! form: `None` is a vacuous pass.
//!
//! Both are decided when the tree is built. Use
//! [`and_then`](crate::foundation::ValidateExt::and_then) to pick a branch
//! from the value being validated.
//!
//! # Examples
//!
//! ```rust
//! use tessera_validator::prelude::*;
//!
//! fn port_rule(privileged: bool) -> impl Validate<Input = u16> {
//!     and(
//!         either(privileged, less_than(1024), greater_than_or_equals(1024)),
//!         optional_branch(!privileged, less_than(49152)),
//!     )
//! }
//!
//! assert!(port_rule(true).validate(&80).is_ok());
//! assert!(port_rule(false).validate(&8080).is_ok());
//! assert!(port_rule(false).validate(&50000).is_err());
//! ```

use std::future::Future;

use crate::foundation::{AsyncValidate, Validate, ValidationError};

/// One of two validators, chosen at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<A, B> {
    /// The first branch.
    Left(A),
    /// The second branch.
    Right(B),
}

impl<A, B> Validate for Either<A, B>
where
    A: Validate,
    B: Validate<Input = <A as Validate>::Input>,
{
    type Input = <A as Validate>::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self {
            Self::Left(validator) => validator.validate(input),
            Self::Right(validator) => validator.validate(input),
        }
    }
}

impl<A, B> AsyncValidate for Either<A, B>
where
    A: AsyncValidate,
    B: AsyncValidate<Input = <A as AsyncValidate>::Input>,
{
    type Input = <A as AsyncValidate>::Input;

    fn validate_async(
        &self,
        input: &Self::Input,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move {
            match self {
                Self::Left(validator) => validator.validate_async(input).await,
                Self::Right(validator) => validator.validate_async(input).await,
            }
        }
    }
}

/// A validator that may be absent; an absent validator passes.
impl<V> Validate for Option<V>
where
    V: Validate,
{
    type Input = <V as Validate>::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self {
            Some(validator) => validator.validate(input),
            None => Ok(()),
        }
    }
}

impl<V> AsyncValidate for Option<V>
where
    V: AsyncValidate,
{
    type Input = <V as AsyncValidate>::Input;

    fn validate_async(
        &self,
        input: &Self::Input,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move {
            match self {
                Some(validator) => validator.validate_async(input).await,
                None => Ok(()),
            }
        }
    }
}

/// Picks `first` when `condition` holds, `second` otherwise.
pub fn either<A, B>(condition: bool, first: A, second: B) -> Either<A, B> {
    if condition {
        Either::Left(first)
    } else {
        Either::Right(second)
    }
}

/// Includes `validator` only when `condition` holds.
pub fn optional_branch<V>(condition: bool, validator: V) -> Option<V> {
    condition.then_some(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{always, never};

    #[test]
    fn test_either_delegates_to_active_branch() {
        assert!(either(true, always::<i32>(), never::<i32>()).validate(&0).is_ok());
        assert!(either(false, always::<i32>(), never::<i32>()).validate(&0).is_err());
    }

    #[test]
    fn test_optional_branch() {
        assert!(optional_branch(false, never::<i32>()).validate(&0).is_ok());
        assert!(optional_branch(true, never::<i32>()).validate(&0).is_err());
    }

    #[tokio::test]
    async fn test_async_branches() {
        let left: Either<_, crate::validators::Always<i32>> = Either::Left(never::<i32>());
        assert!(left.validate_async(&0).await.is_err());
        let absent: Option<crate::validators::Never<i32>> = None;
        assert!(absent.validate_async(&0).await.is_ok());
    }
}
