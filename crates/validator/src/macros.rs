//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: Create a leaf validator (struct + `Validate` and
//!   `AsyncValidate` impls + factory fn)
//! - [`sequence!`]: Early-exit group of differently-typed validators
//! - [`accumulate!`]: Accumulating group of differently-typed validators
//! - [`one_of!`]: Alternation group of differently-typed validators
//!
//! # Examples
//!
//! ```rust
//! use tessera_validator::validator;
//! use tessera_validator::foundation::{Validate, ValidationError};
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub Lowercase for str;
//!     rule(input) { input.chars().all(|c| !c.is_uppercase()) }
//!     error(input) { ValidationError::failed(format!("{input:?} is not lowercase")) }
//!     fn lowercase();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MaxBytes { max: usize } for str;
//!     rule(self, input) { input.len() <= self.max }
//!     error(self, input) {
//!         ValidationError::failed(format!("{} bytes exceed {}", input.len(), self.max))
//!     }
//!     fn max_bytes(max: usize);
//! }
//!
//! assert!(lowercase().validate("tessera").is_ok());
//! assert!(max_bytes(3).validate("tessera").is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete leaf validator: struct definition, `Validate` and
/// `AsyncValidate` implementations, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
/// The async implementation runs the same rule without suspending.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub NotBlank for str;
///     rule(input) { !input.trim().is_empty() }
///     error(input) { ValidationError::failed("is blank") }
///     fn not_blank();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MaxBytes { max: usize } for str;
///     rule(self, input) { input.len() <= self.max }
///     error(self, input) { ValidationError::failed("too long") }
///     fn max_bytes(max: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub Prefixed { prefix: String } for str;
///     rule(self, input) { input.starts_with(&self.prefix) }
///     error(self, input) { ValidationError::failed("missing prefix") }
///     new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
///     fn prefixed(prefix: impl Into<String>);
/// }
/// ```
///
/// **Phantom generic unit** (no fields, `PhantomData<T>` added):
/// ```rust,ignore
/// validator! {
///     pub Present<T> for Option<T>;
///     rule(input) { input.is_some() }
///     error(input) { ValidationError::failed("absent") }
///     fn present();
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Internal: Validate + AsyncValidate impls ─────────────────────────
    (
        @impls [$($gen:tt)*] $name:ty, $input:ty;
        $self_:ident, $inp:ident, $einp:ident;
        $rule:block $err:block
    ) => {
        impl<$($gen)*> $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        impl<$($gen)*> $crate::foundation::AsyncValidate for $name
        where
            Self: ::std::marker::Send + ::std::marker::Sync,
            $input: ::std::marker::Sync,
        {
            type Input = $input;

            fn validate_async(
                &self,
                input: &Self::Input,
            ) -> impl ::std::future::Future<
                Output = ::std::result::Result<(), $crate::foundation::ValidationError>,
            > + ::std::marker::Send {
                async move { <Self as $crate::foundation::Validate>::validate(self, input) }
            }
        }
    };

    // ── Variant 1a: Unit validator (no fields) + factory fn ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit validator (no fields), no factory ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        $crate::validator! {
            @impls [] $name, $input;
            self, $inp, $einp;
            $rule $err
        }
    };

    // ── Variant 3a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator! {
            @impls [] $name, $input;
            $self_, $inp, $einp;
            $rule $err
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator! {
            @impls [] $name, $input;
            $self_, $inp, $einp;
            $rule $err
        }
    };

    // ── Variant 5a: Phantom generic unit + factory fn ─────────────────
    //
    // For generic validators with no fields and no trait bounds on T.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident> for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name<$gen> for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory<$gen>() -> $name<$gen> {
            $name::new()
        }
    };

    // ── Variant 5b: Phantom generic unit, no factory ──────────────────
    //
    // The marker is `fn() -> T`, so the validator is `Copy`, `Send` and
    // `Sync` whatever `T` is.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident> for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        $vis struct $name<$gen> {
            _phantom: ::std::marker::PhantomData<fn() -> $gen>,
        }

        impl<$gen> $name<$gen> {
            #[must_use]
            pub const fn new() -> Self {
                Self { _phantom: ::std::marker::PhantomData }
            }
        }

        impl<$gen> ::std::default::Default for $name<$gen> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$gen> ::std::clone::Clone for $name<$gen> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$gen> ::std::marker::Copy for $name<$gen> {}

        impl<$gen> ::std::fmt::Debug for $name<$gen> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        $crate::validator! {
            @impls [$gen] $name<$gen>, $input;
            self, $inp, $einp;
            $rule $err
        }
    };
}

// ============================================================================
// GROUP MACROS
// ============================================================================

/// Runs validators in order and stops at the first failure.
///
/// Expands to [`combinators::sequence`](crate::combinators::sequence) over a
/// tuple, so the validators may have different types.
///
/// ```rust
/// use tessera_validator::prelude::*;
/// use tessera_validator::sequence;
///
/// let validator = sequence![greater_than(0), less_than(10), equals(5).not()];
/// assert!(validator.validate(&3).is_ok());
/// assert!(validator.validate(&5).is_err());
/// ```
#[macro_export]
macro_rules! sequence {
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::sequence(($($validator,)+))
    };
}

/// Runs every validator and aggregates the failures.
///
/// ```rust
/// use tessera_validator::prelude::*;
/// use tessera_validator::accumulate;
///
/// let validator = accumulate![greater_than(10), less_than(0)];
/// assert_eq!(validator.validate(&5).unwrap_err().errors().len(), 2);
/// ```
#[macro_export]
macro_rules! accumulate {
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::accumulate(($($validator,)+))
    };
}

/// Succeeds as soon as one validator succeeds.
///
/// ```rust
/// use tessera_validator::prelude::*;
/// use tessera_validator::one_of;
///
/// let validator = one_of![equals(5), greater_than(10)];
/// assert!(validator.validate(&11).is_ok());
/// assert!(validator.validate(&6).is_err());
/// ```
#[macro_export]
macro_rules! one_of {
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::one_of(($($validator,)+))
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{AsyncValidate, Policy, Validate, ValidationError};
    use crate::validators::{greater_than, less_than};

    // Unit validator (no fields)
    validator! {
        /// A test unit validator.
        TestNotBlank for str;
        rule(input) { !input.trim().is_empty() }
        error(input) { ValidationError::failed("must not be blank") }
        fn test_not_blank();
    }

    #[test]
    fn test_unit_validator() {
        assert!(TestNotBlank.validate("hello").is_ok());
        assert_eq!(
            test_not_blank().validate("  "),
            Err(ValidationError::failed("must not be blank"))
        );
    }

    // Struct with fields + auto new
    validator! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        TestMaxLen { max: usize } for str;
        rule(self, input) { input.len() <= self.max }
        error(self, input) {
            ValidationError::failed(format!("{} exceeds {} chars", input.len(), self.max))
        }
        fn test_max_len(max: usize);
    }

    #[test]
    fn test_struct_validator() {
        assert!(TestMaxLen { max: 3 }.validate("abc").is_ok());
        assert!(TestMaxLen::new(2).validate("abc").is_err());
        assert_eq!(
            test_max_len(1).validate("abc").unwrap_err().to_string(),
            "3 exceeds 1 chars"
        );
    }

    // Custom constructor
    validator! {
        TestSuffix { suffix: String } for str;
        rule(self, input) { input.ends_with(&self.suffix) }
        error(self, input) {
            ValidationError::failed(format!("{input:?} does not end with {:?}", self.suffix))
        }
        new(suffix: &str) { Self { suffix: suffix.to_owned() } }
        fn test_suffix(suffix: &str);
    }

    #[test]
    fn test_custom_new() {
        let v = test_suffix(".rs");
        assert_eq!(v.suffix, ".rs");
        assert!(v.validate("lib.rs").is_ok());
        assert_eq!(
            v.validate("lib.py").unwrap_err().to_string(),
            r#""lib.py" does not end with ".rs""#
        );
    }

    // Phantom generic unit
    validator! {
        TestPresent<T> for Option<T>;
        rule(input) { input.is_some() }
        error(input) { ValidationError::failed("absent") }
        fn test_present();
    }

    #[test]
    fn test_phantom_unit_validator() {
        let v = test_present::<String>();
        let copy = v;
        assert!(v.validate(&Some(String::new())).is_ok());
        assert!(copy.validate(&None).is_err());
    }

    #[tokio::test]
    async fn test_generated_async_impl() {
        assert_eq!(
            test_max_len(1).validate_async("abc").await,
            test_max_len(1).validate("abc")
        );
        assert!(test_present::<u8>().validate_async(&Some(1)).await.is_ok());
    }

    #[test]
    fn test_group_macros() {
        let seq = sequence![greater_than(0), less_than(10)];
        assert_eq!(seq.policy(), Policy::EarlyExit);
        assert!(seq.validate(&5).is_ok());

        let all = accumulate![greater_than(10), less_than(0),];
        assert_eq!(all.policy(), Policy::Accumulate);
        assert_eq!(all.validate(&5).unwrap_err().errors().len(), 2);

        let any = one_of![greater_than(10), less_than(0)];
        assert_eq!(any.policy(), Policy::OneOf);
        assert!(any.validate(&-1).is_ok());
    }
}
