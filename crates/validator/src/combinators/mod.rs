//! Validator combinators
//!
//! Every combinator is a plain struct owning its children. It implements
//! [`Validate`](crate::foundation::Validate) when its children do and
//! [`AsyncValidate`](crate::foundation::AsyncValidate) when its children do.
//!
//! # Categories
//!
//! - **Composition nodes**: [`Pair`], [`Many`], [`Group`] under a [`Policy`]
//! - **Conditional**: [`Either`], `Option<V>`, [`Optional`], [`MapOptional`]
//! - **Logical**: [`Not`]
//! - **Projection**: [`Field`], [`Case`], [`Map`], [`MapValue`], [`Nested`]
//! - **Errors**: [`MapError`], [`ReplaceError`], [`ErrorLabel`]
//! - **Erasure and lifting**: [`AnyValidator`], [`AnyAsyncValidator`], [`Lift`]
//!
//! # Examples
//!
//! ```rust
//! use tessera_validator::prelude::*;
//!
//! let percentage = greater_than_or_equals(0)
//!     .and(less_than_or_equals(100))
//!     .labeled_inline("percentage");
//! assert!(percentage.validate(&100).is_ok());
//! assert_eq!(
//!     percentage.validate(&101).unwrap_err().to_string(),
//!     "percentage: did not pass any of the validations"
//! );
//! ```

// Composition nodes
pub mod group;
pub mod many;
pub mod pair;

// Conditional
pub mod branch;
pub mod optional;

// Logical
pub mod not;

// Projection
pub mod case;
pub mod field;
pub mod map;
pub mod nested;

// Errors
pub mod label;
pub mod map_error;

// Erasure and lifting
pub mod erased;
pub mod lift;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use crate::foundation::Policy;

pub use branch::{Either, either, optional_branch};
pub use case::{Case, case};
pub use erased::{AnyAsyncValidator, AnyValidator};
pub use field::{Field, field, named_field};
pub use group::{Group, accumulate, one_of, sequence};
pub use label::{ErrorLabel, error_label};
pub use lift::{Lift, lift};
pub use many::{Many, accumulate_all, and_all, or_any};
pub use map::{Map, MapValue, map, map_value};
pub use map_error::{MapError, ReplaceError, map_error, replace_error};
pub use nested::{Nested, nested};
pub use not::{Not, not};
pub use optional::{MapOptional, Optional, map_optional, optional};
pub use pair::{Pair, and, or};
