//! # tessera-validator
//!
//! Composable validation combinators with synchronous and async evaluation.
//!
//! ## Quick Start
//!
//! ```rust
//! use tessera_validator::prelude::*;
//!
//! // Compose validators with .and() / .accumulate() / .or() / .not()
//! let username = not_empty::<str>().and(Pattern::new("[a-z0-9_]{3,20}")?);
//! assert!(username.validate("alice").is_ok());
//! assert!(username.validate("Alice!").is_err());
//! # Ok::<(), PatternError>(())
//! ```
//!
//! ## Evaluation
//!
//! A validator tree is a value. Its nodes run their children under one of
//! three policies ([`Policy`](foundation::Policy)): stop at the first
//! failure, collect every failure, or succeed at the first success. Every
//! node implements [`Validate`](foundation::Validate) when its children do
//! and [`AsyncValidate`](foundation::AsyncValidate) when its children do,
//! and both modes produce the same error tree.
//!
//! ```rust
//! use tessera_validator::prelude::*;
//!
//! struct Signup {
//!     name: String,
//!     email: String,
//! }
//!
//! let signup = named_field("name", |s: &Signup| &s.name, not_empty::<String>())
//!     .accumulate(named_field("email", |s: &Signup| &s.email, email()));
//!
//! let error = signup
//!     .validate(&Signup { name: String::new(), email: "nope".into() })
//!     .unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "- name: Not validator did not succeed\n- email: \"nope\" is not a valid email address"
//! );
//!
//! let async_error = futures::executor::block_on(
//!     signup.validate_async(&Signup { name: String::new(), email: "nope".into() }),
//! )
//! .unwrap_err();
//! assert_eq!(async_error, error);
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate leaf validators,
//! [`from_fn`](foundation::from_fn) / [`from_async_fn`](foundation::from_async_fn)
//! for closures, or implement [`Validate`](foundation::Validate) manually for
//! complex cases.
//!
//! ## Built-in Validators
//!
//! - **Comparison**: [`GreaterThan`](validators::GreaterThan),
//!   [`LessThan`](validators::LessThan), [`Equals`](validators::Equals) and the
//!   inclusive forms
//! - **Collection**: [`Contains`](validators::Contains),
//!   [`ContainsField`](validators::ContainsField), [`Empty`](validators::Empty),
//!   [`NotEmpty`](validators::NotEmpty)
//! - **Pattern**: [`Pattern`](validators::Pattern), [`Email`](validators::Email)
//! - **Logical**: [`BoolValidator`](validators::BoolValidator),
//!   [`IsTrue`](validators::IsTrue), [`IsFalse`](validators::IsFalse),
//!   [`Always`](validators::Always), [`Never`](validators::Never)
//! - **Nullable**: [`NotNil`](validators::NotNil), [`IsNil`](validators::IsNil)

// ValidationError is the fundamental error type for all validators; boxing
// it would add indirection to every validation call.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (Pair<Pair<Not<...>, ...>, ...>) produces complex
// types that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
