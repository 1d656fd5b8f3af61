//! Built-in validators
//!
//! The primitive leaves of a validator tree. Each one implements both
//! [`Validate`](crate::foundation::Validate) and
//! [`AsyncValidate`](crate::foundation::AsyncValidate).
//!
//! # Categories
//!
//! - **Comparison**: greater than, less than, equality, and the inclusive
//!   forms built from them
//! - **Collection**: membership and emptiness
//! - **Pattern**: full-match regular expressions, email addresses
//! - **Logical**: boolean checks, nullable checks, constants
//!
//! # Examples
//!
//! ```rust
//! use tessera_validator::prelude::*;
//!
//! let age = greater_than_or_equals(18).and(less_than(130));
//! assert!(age.validate(&30).is_ok());
//!
//! let tags = not_empty::<Vec<String>>();
//! assert!(tags.validate(&vec!["rust".to_owned()]).is_ok());
//!
//! let contact = not_empty::<str>().and(email());
//! assert!(contact.validate("blob@example.com").is_ok());
//! ```

// Comparison validators
pub mod comparison;

// Collection validators
pub mod collection;

// String validators
pub mod pattern;

// Logical validators
pub mod boolean;
pub mod constant;
pub mod nullable;

// ============================================================================
// RE-EXPORTS: Comparison validators
// ============================================================================

pub use comparison::{
    Equals, GreaterThan, GreaterThanOrEquals, LessThan, LessThanOrEquals, Operand, equals,
    equals_by, greater_than, greater_than_by, greater_than_or_equals, greater_than_or_equals_by,
    less_than, less_than_by, less_than_or_equals, less_than_or_equals_by,
};

// ============================================================================
// RE-EXPORTS: Collection validators
// ============================================================================

pub use collection::{
    Collection, Container, Contains, ContainsField, Empty, NotEmpty, contains, contains_field,
    empty, not_empty,
};

// ============================================================================
// RE-EXPORTS: String validators
// ============================================================================

pub use pattern::{
    EMAIL_LOCAL_PART_MAX_LENGTH, EMAIL_MAX_LENGTH, Email, Pattern, PatternError, email, pattern,
};

// ============================================================================
// RE-EXPORTS: Logical validators
// ============================================================================

pub use boolean::{BoolValidator, IsFalse, IsTrue, expect_bool, is_false, is_true};
pub use constant::{Always, NEVER_FAILED, Never, always, never};
pub use nullable::{IsNil, NotNil, is_nil, not_nil};
