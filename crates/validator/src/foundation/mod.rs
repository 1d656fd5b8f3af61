//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`AsyncValidate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ForeignError`]
//! - **Driver**: [`Policy`], [`Evaluation`], [`evaluate`]
//! - **Closures**: [`from_fn`], [`from_async_fn`]
//! - **Self-validation**: [`Validatable`], [`AsyncValidatable`]
//!
//! # Architecture
//!
//! ## 1. One input type per tree
//!
//! Every node of a composed validator checks the same input type. Changing
//! the type happens only through projections such as
//! [`field`](crate::combinators::field) or
//! [`map_value`](crate::combinators::map_value).
//!
//! ## 2. Two evaluation modes
//!
//! Combinators implement [`Validate`] when their children do and
//! [`AsyncValidate`] when their children do. Both modes run children
//! strictly in order through the same [`Evaluation`] state machine, so a
//! tree gives the same answer either way.
//!
//! ## 3. Structured errors
//!
//! Failures form a tree that compares structurally and renders
//! deterministically:
//!
//! ```rust
//! use tessera_validator::prelude::*;
//!
//! let validator = not_empty::<String>().accumulate(contains::<String, _>("@"));
//! let error = validator.validate(&String::new()).unwrap_err();
//! assert_eq!(error.total_error_count(), 2);
//! ```

pub mod driver;
pub mod error;
pub mod function;
mod render;
pub mod traits;
pub mod validatable;

pub use driver::{Evaluation, Policy, evaluate};
pub use error::{
    EXPECTED_NONE, EXPECTED_SOME, ErrorContext, ForeignError, NOT_FAILED, ONE_OF_FAILED,
    ValidationError, ValidationErrors,
};
pub use function::{AsyncFnValidator, FnValidator, from_async_fn, from_fn};
pub use traits::{AsyncValidate, Validate, ValidateExt};
pub use validatable::{AsyncValidatable, Validatable};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value against a validator tree.
///
/// # Examples
///
/// ```rust
/// use tessera_validator::foundation::validate_value;
/// use tessera_validator::prelude::*;
///
/// assert!(validate_value(&5, &greater_than(3)).is_ok());
/// ```
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &V::Input, validator: &V) -> ValidationResult<()>
where
    V: Validate + ?Sized,
{
    let result = validator.validate(value);
    if let Err(error) = &result {
        tracing::debug!(
            errors = error.total_error_count(),
            foreign = error.is_foreign(),
            "validation failed"
        );
    }
    result
}

/// Validates a value against an async validator tree.
pub async fn validate_value_async<V>(
    value: &<V as AsyncValidate>::Input,
    validator: &V,
) -> ValidationResult<()>
where
    V: AsyncValidate + ?Sized,
{
    let result = validator.validate_async(value).await;
    if let Err(error) = &result {
        tracing::debug!(
            errors = error.total_error_count(),
            foreign = error.is_foreign(),
            "async validation failed"
        );
    }
    result
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
