//! Self-validating entities
//!
//! A type that knows how it must be validated supplies its validator once,
//! as a `'static` value, and gets a zero-argument `validate()` for free.

use std::future::Future;

use crate::foundation::{AsyncValidate, Validate, ValidationError};

/// A type that carries its own validator.
///
/// The validator is stored once (usually in a `LazyLock`) instead of being
/// rebuilt on every call.
///
/// # Examples
///
/// ```rust
/// use std::sync::LazyLock;
/// use tessera_validator::prelude::*;
///
/// struct Signup {
///     name: String,
/// }
///
/// type SignupValidator = AnyValidator<Signup>;
///
/// static SIGNUP: LazyLock<SignupValidator> = LazyLock::new(|| {
///     named_field("name", |s: &Signup| &s.name, not_empty::<String>()).erase()
/// });
///
/// impl Validatable for Signup {
///     type Validator = SignupValidator;
///
///     fn validator() -> &'static SignupValidator {
///         &SIGNUP
///     }
/// }
///
/// assert!(Signup { name: "blob".into() }.validate().is_ok());
/// assert!(Signup { name: String::new() }.validate().is_err());
/// ```
pub trait Validatable: Sized {
    /// The validator checking values of this type.
    type Validator: Validate<Input = Self> + 'static;

    /// The shared validator instance.
    fn validator() -> &'static Self::Validator;

    /// Validates `self` with [`Self::validator`].
    fn validate(&self) -> Result<(), ValidationError> {
        Self::validator().validate(self)
    }
}

/// Async counterpart of [`Validatable`].
pub trait AsyncValidatable: Sized + Sync {
    /// The async validator checking values of this type.
    type AsyncValidator: AsyncValidate<Input = Self> + 'static;

    /// The shared async validator instance.
    fn async_validator() -> &'static Self::AsyncValidator;

    /// Validates `self` with [`Self::async_validator`].
    fn validate_async(&self) -> impl Future<Output = Result<(), ValidationError>> + Send {
        Self::async_validator().validate_async(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::FnValidator;

    struct Port(u16);

    type PortCheck = FnValidator<Port, fn(&Port) -> Result<(), ValidationError>>;

    static PORT: PortCheck = FnValidator::new(check_port);

    fn check_port(port: &Port) -> Result<(), ValidationError> {
        if port.0 >= 1024 {
            Ok(())
        } else {
            Err(ValidationError::failed("privileged port"))
        }
    }

    impl Validatable for Port {
        type Validator = PortCheck;

        fn validator() -> &'static PortCheck {
            &PORT
        }
    }

    impl AsyncValidatable for Port {
        type AsyncValidator = PortCheck;

        fn async_validator() -> &'static PortCheck {
            &PORT
        }
    }

    #[test]
    fn test_validates_itself() {
        assert!(Port(8080).validate().is_ok());
        assert_eq!(
            Port(80).validate(),
            Err(ValidationError::failed("privileged port"))
        );
    }

    #[test]
    fn test_validator_is_shared() {
        assert!(std::ptr::eq(Port::validator(), Port::validator()));
    }

    #[tokio::test]
    async fn test_validates_itself_async() {
        assert!(Port(8080).validate_async().await.is_ok());
        assert!(Port(22).validate_async().await.is_err());
    }
}
