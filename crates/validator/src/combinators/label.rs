//! ERROR LABEL combinator - nests failures under a named section

use std::borrow::Cow;
use std::future::Future;

use crate::foundation::{AsyncValidate, Validate, ValidationError};

/// Wraps failures in a labeled [`ValidationError::ManyFailed`].
///
/// `inline` only changes how the label renders; the error tree is nested
/// the same way in both forms.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// let validator = accumulate((greater_than(0), less_than(10))).labeled("quantity");
/// let error = validator.validate(&20).unwrap_err();
/// assert_eq!(error.to_string(), "quantity:\n  - 20 is not less than 10");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorLabel<V> {
    inner: V,
    label: Cow<'static, str>,
    inline: bool,
}

impl<V> ErrorLabel<V> {
    /// Creates a new `ErrorLabel` combinator.
    pub fn new(inner: V, label: impl Into<Cow<'static, str>>, inline: bool) -> Self {
        Self {
            inner,
            label: label.into(),
            inline,
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// The label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns true if the label renders inline.
    pub fn is_inline(&self) -> bool {
        self.inline
    }

    fn wrap(&self, error: ValidationError) -> ValidationError {
        ValidationError::labeled(self.label.clone(), self.inline, error)
    }
}

impl<V> Validate for ErrorLabel<V>
where
    V: Validate,
{
    type Input = <V as Validate>::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|error| self.wrap(error))
    }
}

impl<V> AsyncValidate for ErrorLabel<V>
where
    V: AsyncValidate,
{
    type Input = <V as AsyncValidate>::Input;

    fn validate_async(
        &self,
        input: &Self::Input,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move {
            self.inner
                .validate_async(input)
                .await
                .map_err(|error| self.wrap(error))
        }
    }
}

/// Nests failures of `validator` under `label`.
pub fn error_label<V>(
    validator: V,
    label: impl Into<Cow<'static, str>>,
    inline: bool,
) -> ErrorLabel<V> {
    ErrorLabel::new(validator, label, inline)
}
