//! Composition over a fixed tuple of differently-typed validators
//!
//! [`Group`] is the heterogeneous counterpart of
//! [`Many`](super::Many): it holds a tuple of up to eight validators that
//! share an input type but may have different concrete types. Children are
//! stepped through [`Evaluation`] directly, so no future is boxed.
//!
//! [`sequence`], [`accumulate`] and [`one_of`] build groups; the
//! [`sequence!`](crate::sequence), [`accumulate!`](crate::accumulate) and
//! [`one_of!`](crate::one_of) macros do the same without the tuple
//! parentheses.
//!
//! # Examples
//!
//! ```rust
//! use tessera_validator::prelude::*;
//!
//! let validator = accumulate((greater_than(0), less_than(100), equals(50).not()));
//! let error = validator.validate(&150).unwrap_err();
//! assert_eq!(error.errors().len(), 1);
//! ```

use std::future::Future;
use std::ops::ControlFlow;

use crate::foundation::{AsyncValidate, Evaluation, Policy, Validate, ValidationError};

/// Combines a tuple of validators under a composition policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<T> {
    validators: T,
    policy: Policy,
}

impl<T> Group<T> {
    /// Creates a group over a tuple of validators.
    pub const fn new(validators: T, policy: Policy) -> Self {
        Self { validators, policy }
    }

    /// The child validators.
    pub fn validators(&self) -> &T {
        &self.validators
    }

    /// The composition policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Extracts the tuple of validators.
    pub fn into_inner(self) -> T {
        self.validators
    }
}

type Outcome = Result<(), ValidationError>;

macro_rules! impl_group {
    ($first:ident $(, $rest:ident)*) => {
        impl<$first, $($rest,)*> Validate for Group<($first, $($rest,)*)>
        where
            $first: Validate,
            $($rest: Validate<Input = <$first as Validate>::Input>,)*
        {
            type Input = <$first as Validate>::Input;

            #[allow(non_snake_case)]
            fn validate(&self, input: &Self::Input) -> Outcome {
                let ($first, $($rest,)*) = &self.validators;
                let mut evaluation = Evaluation::new(self.policy);
                if let ControlFlow::Break(result) = evaluation.step($first.validate(input)) {
                    return result;
                }
                $(
                    if let ControlFlow::Break(result) = evaluation.step($rest.validate(input)) {
                        return result;
                    }
                )*
                evaluation.finish()
            }
        }

        impl<$first, $($rest,)*> AsyncValidate for Group<($first, $($rest,)*)>
        where
            $first: AsyncValidate,
            $($rest: AsyncValidate<Input = <$first as AsyncValidate>::Input>,)*
        {
            type Input = <$first as AsyncValidate>::Input;

            #[allow(non_snake_case)]
            fn validate_async(
                &self,
                input: &Self::Input,
            ) -> impl Future<Output = Outcome> + Send {
                async move {
                    let ($first, $($rest,)*) = &self.validators;
                    let mut evaluation = Evaluation::new(self.policy);
                    if let ControlFlow::Break(result) =
                        evaluation.step($first.validate_async(input).await)
                    {
                        return result;
                    }
                    $(
                        if let ControlFlow::Break(result) =
                            evaluation.step($rest.validate_async(input).await)
                        {
                            return result;
                        }
                    )*
                    evaluation.finish()
                }
            }
        }
    };
}

impl_group!(A);
impl_group!(A, B);
impl_group!(A, B, C);
impl_group!(A, B, C, D);
impl_group!(A, B, C, D, E);
impl_group!(A, B, C, D, E, F);
impl_group!(A, B, C, D, E, F, G);
impl_group!(A, B, C, D, E, F, G, H);

/// All validators of the tuple must pass; stops at the first failure.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// let validator = sequence((greater_than(0), less_than(10)));
/// assert!(validator.validate(&5).is_ok());
/// ```
pub const fn sequence<T>(validators: T) -> Group<T> {
    Group::new(validators, Policy::EarlyExit)
}

/// Runs every validator of the tuple and aggregates all failures.
pub const fn accumulate<T>(validators: T) -> Group<T> {
    Group::new(validators, Policy::Accumulate)
}

/// At least one validator of the tuple must pass; stops at the first success.
pub const fn one_of<T>(validators: T) -> Group<T> {
    Group::new(validators, Policy::OneOf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{FnValidator, ONE_OF_FAILED, from_fn};
    use crate::validators::{always, equals, greater_than, less_than, never};
    use std::cell::RefCell;

    #[test]
    fn test_sequence_returns_first_failure() {
        let validator = sequence((greater_than(0), less_than(10), equals(5)));
        assert!(validator.validate(&5).is_ok());
        assert_eq!(
            validator.validate(&20).unwrap_err().to_string(),
            "20 is not less than 10"
        );
    }

    #[test]
    fn test_accumulate_collects_in_order() {
        let validator = accumulate((greater_than(10), less_than(0), equals(5)));
        let error = validator.validate(&7).unwrap_err();
        let summaries: Vec<_> = error.errors().iter().filter_map(|e| e.summary()).collect();
        assert_eq!(
            summaries,
            [
                "7 is not greater than 10",
                "7 is not less than 0",
                "7 is not equal to 5"
            ]
        );
    }

    #[test]
    fn test_one_of() {
        let validator = one_of((equals(1), equals(2), equals(3)));
        assert!(validator.validate(&3).is_ok());
        assert_eq!(
            validator.validate(&4),
            Err(ValidationError::failed(ONE_OF_FAILED))
        );
    }

    fn recording<'a>(
        visited: &'a RefCell<Vec<&'static str>>,
        name: &'static str,
    ) -> FnValidator<i32, impl Fn(&i32) -> Result<(), ValidationError> + 'a> {
        from_fn(move |_: &i32| {
            visited.borrow_mut().push(name);
            Ok(())
        })
    }

    #[test]
    fn test_visits_in_order() {
        let visited = RefCell::new(Vec::new());
        let validator = accumulate((
            recording(&visited, "a"),
            recording(&visited, "b"),
            recording(&visited, "c"),
        ));
        assert!(validator.validate(&0).is_ok());
        assert_eq!(*visited.borrow(), ["a", "b", "c"]);
    }

    #[test]
    fn test_single_and_eight_children() {
        assert!(sequence((always::<i32>(),)).validate(&0).is_ok());
        let validator = accumulate((
            never::<i32>(),
            never::<i32>(),
            never::<i32>(),
            never::<i32>(),
            never::<i32>(),
            never::<i32>(),
            never::<i32>(),
            never::<i32>(),
        ));
        assert_eq!(validator.validate(&0).unwrap_err().errors().len(), 8);
    }

    #[tokio::test]
    async fn test_async_matches_sync() {
        let validator = accumulate((greater_than(10), less_than(0), equals(5)));
        for input in [-1, 5, 7, 11] {
            assert_eq!(
                validator.validate_async(&input).await,
                validator.validate(&input)
            );
        }
    }
}
