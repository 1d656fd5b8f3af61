//! Composition over a dynamic list of validators
//!
//! [`Many`] holds any number of validators of the same type. Insertion order
//! is evaluation order; for [`Policy::OneOf`] it is preference order.
//!
//! # Examples
//!
//! ```rust
//! use tessera_validator::prelude::*;
//!
//! let allowed = or_any(vec![equals(80), equals(443), equals(8080)]);
//! assert!(allowed.validate(&443).is_ok());
//! assert!(allowed.validate(&22).is_err());
//! ```

use std::future::Future;
use std::ops::ControlFlow;

use crate::foundation::{AsyncValidate, Evaluation, Policy, Validate, ValidationError, evaluate};

/// Combines a list of validators under a composition policy.
///
/// An empty list passes under [`Policy::EarlyExit`] and
/// [`Policy::Accumulate`] and fails under [`Policy::OneOf`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Many<V> {
    validators: Vec<V>,
    policy: Policy,
}

impl<V> Many<V> {
    /// Creates a node over `validators`.
    #[must_use]
    pub fn new(validators: Vec<V>, policy: Policy) -> Self {
        Self { validators, policy }
    }

    /// Appends a validator; it runs after the existing ones.
    #[must_use]
    pub fn with(mut self, validator: V) -> Self {
        self.validators.push(validator);
        self
    }

    /// The child validators in evaluation order.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }

    /// The composition policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of child validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if there are no child validators.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl<V> Validate for Many<V>
where
    V: Validate,
{
    type Input = <V as Validate>::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        evaluate(
            self.policy,
            self.validators.iter().map(|validator| validator.validate(input)),
        )
    }
}

impl<V> AsyncValidate for Many<V>
where
    V: AsyncValidate,
{
    type Input = <V as AsyncValidate>::Input;

    fn validate_async(
        &self,
        input: &Self::Input,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move {
            let mut evaluation = Evaluation::new(self.policy);
            for validator in &self.validators {
                if let ControlFlow::Break(result) =
                    evaluation.step(validator.validate_async(input).await)
                {
                    return result;
                }
            }
            evaluation.finish()
        }
    }
}

/// All validators must pass; stops at the first failure.
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> Many<V> {
    Many::new(validators, Policy::EarlyExit)
}

/// Runs every validator and aggregates all failures.
#[must_use]
pub fn accumulate_all<V>(validators: Vec<V>) -> Many<V> {
    Many::new(validators, Policy::Accumulate)
}

/// At least one validator must pass; stops at the first success.
///
/// An empty list always fails.
#[must_use]
pub fn or_any<V>(validators: Vec<V>) -> Many<V> {
    Many::new(validators, Policy::OneOf)
}
