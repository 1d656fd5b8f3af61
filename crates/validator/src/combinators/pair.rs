//! Two-child composition node
//!
//! [`Pair`] combines two validators under a [`Policy`]:
//!
//! - [`Policy::EarlyExit`] - both must pass, the first failure is returned
//! - [`Policy::Accumulate`] - both run, failures are aggregated
//! - [`Policy::OneOf`] - either may pass, the first success wins
//!
//! # Examples
//!
//! ```rust
//! use tessera_validator::prelude::*;
//!
//! let validator = and(greater_than(0), less_than(10));
//! assert!(validator.validate(&5).is_ok());
//!
//! let validator = or(equals(0), greater_than(10));
//! assert!(validator.validate(&0).is_ok());
//! assert!(validator.validate(&5).is_err());
//! ```

use std::future::Future;
use std::iter;
use std::ops::ControlFlow;

use crate::foundation::{AsyncValidate, Evaluation, Policy, Validate, ValidationError, evaluate};

/// Combines two validators under a composition policy.
///
/// The first child is always evaluated first.
///
/// # Type Parameters
///
/// * `A` - The first validator type
/// * `B` - The second validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
    pub(crate) policy: Policy,
}

impl<A, B> Pair<A, B> {
    /// Creates a new pair.
    pub const fn new(first: A, second: B, policy: Policy) -> Self {
        Self {
            first,
            second,
            policy,
        }
    }

    /// Returns a reference to the first validator.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Returns a reference to the second validator.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// The composition policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Extracts both validators.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> Validate for Pair<A, B>
where
    A: Validate,
    B: Validate<Input = <A as Validate>::Input>,
{
    type Input = <A as Validate>::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let outcomes = iter::once_with(|| self.first.validate(input))
            .chain(iter::once_with(|| self.second.validate(input)));
        evaluate(self.policy, outcomes)
    }
}

impl<A, B> AsyncValidate for Pair<A, B>
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
            let mut evaluation = Evaluation::new(self.policy);
            if let ControlFlow::Break(result) =
                evaluation.step(self.first.validate_async(input).await)
            {
                return result;
            }
            if let ControlFlow::Break(result) =
                evaluation.step(self.second.validate_async(input).await)
            {
                return result;
            }
            evaluation.finish()
        }
    }
}

/// Both validators must pass; the first failure is returned unchanged.
pub fn and<A, B>(first: A, second: B) -> Pair<A, B>
where
    A: Validate,
    B: Validate<Input = <A as Validate>::Input>,
{
    Pair::new(first, second, Policy::EarlyExit)
}

/// At least one validator must pass, `first` is tried first.
pub fn or<A, B>(first: A, second: B) -> Pair<A, B>
where
    A: Validate,
    B: Validate<Input = <A as Validate>::Input>,
{
    Pair::new(first, second, Policy::OneOf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{FnValidator, ONE_OF_FAILED, ValidateExt, from_fn};
    use std::cell::Cell;

    fn min_length(
        min: usize,
    ) -> FnValidator<str, impl Fn(&str) -> Result<(), ValidationError> + Clone + Send + Sync> {
        from_fn(move |s: &str| {
            if s.len() >= min {
                Ok(())
            } else {
                Err(ValidationError::failed(format!("shorter than {min}")))
            }
        })
    }

    #[test]
    fn test_and_both_pass() {
        let validator = min_length(3).and(min_length(1));
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn test_and_returns_first_failure() {
        let validator = min_length(3).and(min_length(5));
        assert_eq!(
            validator.validate("hi"),
            Err(ValidationError::failed("shorter than 3"))
        );
    }

    #[test]
    fn test_and_skips_second_after_failure() {
        let calls = Cell::new(0);
        let counting = from_fn(|_: &str| {
            calls.set(calls.get() + 1);
            Ok(())
        });
        let validator = min_length(3).and(counting);
        assert!(validator.validate("a").is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_accumulate_wraps_single_failure() {
        let validator = min_length(3).accumulate(min_length(1));
        assert_eq!(
            validator.validate("hi"),
            Err(ValidationError::many([ValidationError::failed(
                "shorter than 3"
            )]))
        );
    }

    #[test]
    fn test_or_first_success_wins() {
        let validator = min_length(10).or(min_length(2));
        assert!(validator.validate("hi").is_ok());
        assert_eq!(
            validator.validate("h"),
            Err(ValidationError::failed(ONE_OF_FAILED))
        );
    }

    #[test]
    fn test_accessors() {
        let pair = Pair::new(1, 2, Policy::Accumulate);
        assert_eq!(*pair.first(), 1);
        assert_eq!(*pair.second(), 2);
        assert_eq!(pair.policy(), Policy::Accumulate);
        assert_eq!(pair.into_parts(), (1, 2));
    }

    #[tokio::test]
    async fn test_async_matches_sync() {
        let validator = min_length(3).accumulate(min_length(5));
        for input in ["", "abc", "abcdef"] {
            assert_eq!(
                validator.validate_async(input).await,
                validator.validate(input)
            );
        }
    }
}
