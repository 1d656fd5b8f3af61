//! FIELD combinator - validates specific fields of structs
//!
//! The FIELD combinator projects a parent value onto one of its fields with
//! a plain accessor function and validates the field. A named field nests
//! its failures under the field name, rendered inline.

use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

use crate::foundation::{AsyncValidate, Validate, ValidationError};

// ============================================================================
// FIELD COMBINATOR
// ============================================================================

/// Validates a specific field of a struct.
///
/// # Type Parameters
///
/// * `T` - The parent struct type
/// * `U` - The field type (can be `?Sized`)
/// * `V` - The validator type
/// * `F` - The accessor function type
///
/// # Examples
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// struct User {
///     email: String,
/// }
///
/// let validator = named_field("email", |u: &User| &u.email, contains::<String, _>("@"));
/// let error = validator
///     .validate(&User { email: "blob.example.com".into() })
///     .unwrap_err();
/// assert_eq!(error.to_string(), r#"email: "blob.example.com" does not contain "@""#);
/// ```
pub struct Field<T, U, V, F>
where
    U: ?Sized,
{
    name: Option<Cow<'static, str>>,
    validator: V,
    accessor: F,
    _phantom: PhantomData<fn(&T) -> &U>,
}

impl<T, U, V, F> Field<T, U, V, F>
where
    U: ?Sized,
{
    /// Creates a new field validator without a name.
    pub fn new(validator: V, accessor: F) -> Self {
        Self {
            name: None,
            validator,
            accessor,
            _phantom: PhantomData,
        }
    }

    /// Creates a new field validator with a name.
    pub fn named(name: impl Into<Cow<'static, str>>, validator: V, accessor: F) -> Self {
        Self {
            name: Some(name.into()),
            validator,
            accessor,
            _phantom: PhantomData,
        }
    }

    /// Returns the field name, if any.
    pub fn field_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns a reference to the inner validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    fn label(&self, error: ValidationError) -> ValidationError {
        match &self.name {
            Some(name) => ValidationError::labeled(name.clone(), true, error),
            None => error,
        }
    }
}

// Manual because F might not implement Clone
impl<T, U, V, F> Clone for Field<T, U, V, F>
where
    V: Clone,
    F: Clone,
    U: ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            validator: self.validator.clone(),
            accessor: self.accessor.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, U, V, F> fmt::Debug for Field<T, U, V, F>
where
    V: fmt::Debug,
    U: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("validator", &self.validator)
            .field("accessor", &"<function>")
            .finish()
    }
}

impl<T, U, V, F> Validate for Field<T, U, V, F>
where
    U: ?Sized,
    V: Validate<Input = U>,
    F: Fn(&T) -> &U,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        self.validator
            .validate((self.accessor)(input))
            .map_err(|error| self.label(error))
    }
}

impl<T, U, V, F> AsyncValidate for Field<T, U, V, F>
where
    T: Sync,
    U: ?Sized + Sync,
    V: AsyncValidate<Input = U>,
    F: Fn(&T) -> &U + Send + Sync,
{
    type Input = T;

    fn validate_async(
        &self,
        input: &T,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move {
            self.validator
                .validate_async((self.accessor)(input))
                .await
                .map_err(|error| self.label(error))
        }
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Validates the field returned by `accessor`; failures are passed through
/// unchanged.
pub fn field<T, U, V, F>(accessor: F, validator: V) -> Field<T, U, V, F>
where
    U: ?Sized,
    V: Validate<Input = U>,
    F: Fn(&T) -> &U,
{
    Field::new(validator, accessor)
}

/// Validates the field returned by `accessor`; failures are labeled with
/// `name`, rendered inline.
pub fn named_field<T, U, V, F>(
    name: impl Into<Cow<'static, str>>,
    accessor: F,
    validator: V,
) -> Field<T, U, V, F>
where
    U: ?Sized,
    V: Validate<Input = U>,
    F: Fn(&T) -> &U,
{
    Field::named(name, validator, accessor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{greater_than, not_empty};

    #[derive(Debug)]
    struct Listing {
        title: String,
        price: u32,
    }

    fn listing(title: &str, price: u32) -> Listing {
        Listing {
            title: title.to_owned(),
            price,
        }
    }

    #[test]
    fn test_unnamed_field_passes_error_through() {
        let validator = field(|l: &Listing| &l.price, greater_than(0));
        assert!(validator.validate(&listing("lamp", 10)).is_ok());
        assert_eq!(
            validator.validate(&listing("lamp", 0)),
            Err(ValidationError::failed("0 is not greater than 0"))
        );
    }

    #[test]
    fn test_named_field_labels_inline() {
        let validator = named_field("price", |l: &Listing| &l.price, greater_than(0));
        let error = validator.validate(&listing("lamp", 0)).unwrap_err();
        assert_eq!(error.label(), Some("price"));
        assert_eq!(error.to_string(), "price: 0 is not greater than 0");
    }

    #[test]
    fn test_for_field_extension() {
        let validator = not_empty::<String>().for_field(|l: &Listing| &l.title);
        assert!(validator.validate(&listing("", 1)).is_err());
        assert_eq!(validator.field_name(), None);
    }

    #[tokio::test]
    async fn test_async_field() {
        let validator = named_field("price", |l: &Listing| &l.price, greater_than(5));
        assert_eq!(
            validator.validate_async(&listing("lamp", 1)).await,
            validator.validate(&listing("lamp", 1))
        );
    }
}
