//! Prelude module for convenient imports.
//!
//! Provides a single `use tessera_validator::prelude::*;` import that brings
//! in all commonly needed traits, types, validators, and combinators.
//!
//! # Examples
//!
//! ```rust
//! use tessera_validator::prelude::*;
//!
//! let age = greater_than_or_equals(18).and(less_than(130));
//! let tags = not_empty::<Vec<String>>().labeled_inline("tags");
//! let contact = or(email(), Pattern::new(r"\+\d{6,15}")?);
//!
//! assert!(age.validate(&42).is_ok());
//! assert!(tags.validate(&Vec::new()).is_err());
//! assert!(contact.validate("+31612345678").is_ok());
//! # Ok::<(), PatternError>(())
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, driver
// ============================================================================

pub use crate::foundation::{
    AsyncFnValidator, AsyncValidatable, AsyncValidate, ErrorContext, FnValidator, ForeignError,
    Policy, Validatable, Validate, ValidateExt, ValidationError, ValidationErrors,
    ValidationResult, from_async_fn, from_fn, validate_value, validate_value_async,
};

// ============================================================================
// CONFIG: Unhandled case handling
// ============================================================================

pub use crate::config::UnhandledCasePolicy;

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    AnyAsyncValidator, AnyValidator, Case, Either, ErrorLabel, Field, Group, Lift, Many, Map,
    MapError, MapOptional, MapValue, Nested, Not, Optional, Pair, ReplaceError, accumulate,
    accumulate_all, and, and_all, case, either, error_label, field, lift, map, map_error,
    map_optional, map_value, named_field, nested, not, one_of, optional, optional_branch, or,
    or_any, replace_error, sequence,
};
