//! Evaluation driver shared by every composition node.
//!
//! A node with several children feeds each child's outcome into an
//! [`Evaluation`], which decides after every step whether the node is
//! already settled. The synchronous driver pulls outcomes from a lazy
//! iterator; async nodes await their children one after another and step
//! the same state machine.
//!
//! Foreign errors are not validation outcomes. Early-exit and one-of nodes
//! stop at the first one and return it unchanged; accumulating nodes collect
//! it like any other failure and keep going.

use std::ops::ControlFlow;

use super::error::{ONE_OF_FAILED, ValidationError, ValidationErrors};

/// How the outcomes of a node's children combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    /// Stop at the first failure and return it unchanged.
    #[default]
    EarlyExit,
    /// Evaluate every child and aggregate all failures.
    Accumulate,
    /// Stop at the first success; fail if no child succeeds.
    OneOf,
}

/// The in-progress state of one node's evaluation.
///
/// ```rust
/// use tessera_validator::foundation::{Evaluation, Policy, ValidationError};
///
/// let mut evaluation = Evaluation::new(Policy::Accumulate);
/// assert!(evaluation.step(Err(ValidationError::failed("a"))).is_continue());
/// assert!(evaluation.step(Ok(())).is_continue());
///
/// let error = evaluation.finish().unwrap_err();
/// assert_eq!(error.errors().len(), 1);
/// ```
#[derive(Debug)]
pub struct Evaluation {
    policy: Policy,
    errors: ValidationErrors,
}

impl Evaluation {
    /// Starts evaluating a node with the given policy.
    #[must_use]
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            errors: ValidationErrors::new(),
        }
    }

    /// Records one child's outcome.
    ///
    /// Returns `Break` with the node's result once it is decided; remaining
    /// children must not be evaluated.
    pub fn step(
        &mut self,
        outcome: Result<(), ValidationError>,
    ) -> ControlFlow<Result<(), ValidationError>> {
        match (self.policy, outcome) {
            (Policy::EarlyExit, Err(error)) => ControlFlow::Break(Err(error)),
            (Policy::Accumulate, Err(error)) => {
                self.errors.add(error);
                ControlFlow::Continue(())
            }
            (Policy::OneOf, Ok(())) => ControlFlow::Break(Ok(())),
            (Policy::OneOf, Err(error)) if error.is_foreign() => ControlFlow::Break(Err(error)),
            (Policy::EarlyExit | Policy::Accumulate, Ok(())) | (Policy::OneOf, Err(_)) => {
                ControlFlow::Continue(())
            }
        }
    }

    /// Produces the node's result after every child was evaluated.
    ///
    /// A one-of node with no children fails.
    pub fn finish(self) -> Result<(), ValidationError> {
        match self.policy {
            Policy::EarlyExit => Ok(()),
            Policy::Accumulate => self.errors.into_result(),
            Policy::OneOf => Err(ValidationError::failed(ONE_OF_FAILED)),
        }
    }
}

/// Drives child outcomes produced lazily by `outcomes`.
///
/// Children after the deciding one are never pulled from the iterator.
pub fn evaluate<I>(policy: Policy, outcomes: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = Result<(), ValidationError>>,
{
    let mut evaluation = Evaluation::new(policy);
    for outcome in outcomes {
        if let ControlFlow::Break(result) = evaluation.step(outcome) {
            return result;
        }
    }
    evaluation.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn fail(summary: &'static str) -> Result<(), ValidationError> {
        Err(ValidationError::failed(summary))
    }

    #[test]
    fn test_early_exit_stops_pulling() {
        let pulled = Cell::new(0);
        let outcomes = [fail("a"), fail("b")].into_iter().inspect(|_| {
            pulled.set(pulled.get() + 1);
        });
        let error = evaluate(Policy::EarlyExit, outcomes).unwrap_err();
        assert_eq!(error, ValidationError::failed("a"));
        assert_eq!(pulled.get(), 1);
    }

    #[test]
    fn test_accumulate_keeps_order() {
        let error = evaluate(Policy::Accumulate, [fail("a"), Ok(()), fail("b")]).unwrap_err();
        assert_eq!(
            error,
            ValidationError::many([ValidationError::failed("a"), ValidationError::failed("b")])
        );
    }

    #[test]
    fn test_accumulate_all_pass() {
        assert!(evaluate(Policy::Accumulate, [Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn test_one_of_first_success_wins() {
        assert!(evaluate(Policy::OneOf, [fail("a"), Ok(()), fail("b")]).is_ok());
    }

    #[test]
    fn test_one_of_discards_attempts() {
        let error = evaluate(Policy::OneOf, [fail("a"), fail("b")]).unwrap_err();
        assert_eq!(error, ValidationError::failed(ONE_OF_FAILED));
    }

    #[derive(Debug, thiserror::Error)]
    #[error("connection reset")]
    struct ConnectionReset;

    #[test]
    fn test_one_of_stops_at_foreign_error() {
        let pulled = Cell::new(0);
        let outcomes = [
            fail("a"),
            Err(ValidationError::foreign(ConnectionReset)),
            Ok(()),
        ]
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1));

        let error = evaluate(Policy::OneOf, outcomes).unwrap_err();
        assert!(error.downcast_foreign_ref::<ConnectionReset>().is_some());
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_accumulate_collects_foreign_error() {
        let foreign = ValidationError::foreign(ConnectionReset);
        let error =
            evaluate(Policy::Accumulate, [Err(foreign.clone()), fail("b")]).unwrap_err();
        assert_eq!(error, ValidationError::many([foreign, ValidationError::failed("b")]));
    }

    #[test]
    fn test_empty_children() {
        assert!(evaluate(Policy::EarlyExit, std::iter::empty()).is_ok());
        assert!(evaluate(Policy::Accumulate, std::iter::empty()).is_ok());
        assert!(evaluate(Policy::OneOf, std::iter::empty()).is_err());
    }

    #[test]
    fn test_default_policy_is_early_exit() {
        assert_eq!(Policy::default(), Policy::EarlyExit);
    }
}
