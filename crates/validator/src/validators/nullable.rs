//! Nullable validators for Option types
//!
//! [`NotNil`] and [`IsNil`] only look at presence. To validate the value
//! inside a present `Option`, wrap a validator with
//! [`required`](crate::foundation::ValidateExt::required) (absent fails) or
//! [`optional`](crate::foundation::ValidateExt::optional) (absent passes).
//!
//! # Examples
//!
//! ```rust
//! use tessera_validator::prelude::*;
//!
//! let validator = not_nil::<String>();
//! assert!(validator.validate(&Some("hello".to_string())).is_ok());
//! assert!(validator.validate(&None).is_err());
//! ```

use crate::foundation::{EXPECTED_NONE, EXPECTED_SOME, ValidationError};

crate::validator! {
    /// Validates that an `Option` is `Some`.
    pub NotNil<T> for Option<T>;
    rule(input) { input.is_some() }
    error(input) { ValidationError::failed(EXPECTED_SOME) }
    fn not_nil();
}

crate::validator! {
    /// Validates that an `Option` is `None`.
    pub IsNil<T> for Option<T>;
    rule(input) { input.is_none() }
    error(input) { ValidationError::failed(EXPECTED_NONE) }
    fn is_nil();
}
