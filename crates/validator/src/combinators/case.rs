//! CASE combinator - validates one variant of an enum
//!
//! A [`Case`] pairs an extractor returning the payload of one variant with
//! a validator for that payload. Meeting any other variant is an
//! unhandled case, which produces two independent signals:
//!
//! - a validation failure naming the expected variant and the place the
//!   case validator was built
//! - a `tracing` warning on target `tessera_validator::case`, unless the
//!   effective [`UnhandledCasePolicy`] is `Silent`
//!
//! The policy is taken from [`config::current`](crate::config::current)
//! at validation time unless one was set with [`Case::with_policy`].
//!
//! # Examples
//!
//! ```rust
//! use tessera_validator::prelude::*;
//!
//! enum Payment {
//!     Card { last4: String },
//!     Cash,
//! }
//!
//! let card = case(
//!     "Card",
//!     |p: &Payment| match p {
//!         Payment::Card { last4 } => Some(last4),
//!         _ => None,
//!     },
//!     not_empty::<String>(),
//! )
//! .with_policy(UnhandledCasePolicy::Silent);
//!
//! assert!(card.validate(&Payment::Card { last4: "4242".into() }).is_ok());
//! assert!(card.validate(&Payment::Cash).is_err());
//! ```

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::panic::Location;

use crate::config::{self, UnhandledCasePolicy};
use crate::foundation::{AsyncValidate, Validate, ValidationError};

/// Validates the payload of one enum variant.
pub struct Case<T, U: ?Sized, V, F> {
    variant: &'static str,
    extract: F,
    validator: V,
    location: &'static Location<'static>,
    policy: Option<UnhandledCasePolicy>,
    _phantom: PhantomData<fn(&T) -> Option<&U>>,
}

impl<T, U: ?Sized, V, F> Case<T, U, V, F> {
    /// Creates a case validator, recording the caller's location.
    #[track_caller]
    pub fn new(variant: &'static str, extract: F, validator: V) -> Self {
        Self {
            variant,
            extract,
            validator,
            location: Location::caller(),
            policy: None,
            _phantom: PhantomData,
        }
    }

    /// Fixes the unhandled-case policy instead of reading it from the
    /// current settings.
    #[must_use]
    pub fn with_policy(mut self, policy: UnhandledCasePolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Name of the handled variant.
    pub fn variant(&self) -> &'static str {
        self.variant
    }

    /// Where the case validator was built.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    fn unhandled(&self) -> ValidationError {
        let policy = self
            .policy
            .unwrap_or_else(|| config::current().unhandled_case_policy());
        if policy == UnhandledCasePolicy::Warn {
            tracing::warn!(
                target: "tessera_validator::case",
                variant = self.variant,
                location = %self.location,
                "unhandled case reached a case validator"
            );
        }
        ValidationError::failed(format!(
            "unhandled case: expected `{}` (case validator at {})",
            self.variant, self.location
        ))
    }
}

impl<T, U: ?Sized, V: Clone, F: Clone> Clone for Case<T, U, V, F> {
    fn clone(&self) -> Self {
        Self {
            variant: self.variant,
            extract: self.extract.clone(),
            validator: self.validator.clone(),
            location: self.location,
            policy: self.policy,
            _phantom: PhantomData,
        }
    }
}

impl<T, U: ?Sized, V: fmt::Debug, F> fmt::Debug for Case<T, U, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("variant", &self.variant)
            .field("validator", &self.validator)
            .field("location", &self.location)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<T, U, V, F> Validate for Case<T, U, V, F>
where
    U: ?Sized,
    V: Validate<Input = U>,
    F: Fn(&T) -> Option<&U>,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        match (self.extract)(input) {
            Some(payload) => self.validator.validate(payload),
            None => Err(self.unhandled()),
        }
    }
}

impl<T, U, V, F> AsyncValidate for Case<T, U, V, F>
where
    T: Sync,
    U: ?Sized + Sync,
    V: AsyncValidate<Input = U>,
    F: Fn(&T) -> Option<&U> + Send + Sync,
{
    type Input = T;

    fn validate_async(
        &self,
        input: &T,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move {
            match (self.extract)(input) {
                Some(payload) => self.validator.validate_async(payload).await,
                None => Err(self.unhandled()),
            }
        }
    }
}

/// Validates the payload `extract` returns for the `variant` case.
#[track_caller]
pub fn case<T, U, V, F>(variant: &'static str, extract: F, validator: V) -> Case<T, U, V, F>
where
    U: ?Sized,
    V: Validate<Input = U>,
    F: Fn(&T) -> Option<&U>,
{
    Case::new(variant, extract, validator)
}
