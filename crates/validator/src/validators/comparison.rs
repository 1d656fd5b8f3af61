//! Comparison validators
//!
//! Every comparator evaluates two [`Operand`]s against the input and
//! compares the results. The operands can be constants, borrowed
//! projections of the input (the input itself being the identity
//! projection), or values computed from the input. The same primitive
//! therefore expresses "value greater than constant", "field greater than
//! constant" and "field greater than field".
//!
//! The inclusive comparators are not separate checks: they are the strict
//! comparator combined with [`Equals`] under [`Policy::OneOf`].
//!
//! # Examples
//!
//! ```rust
//! use tessera_validator::prelude::*;
//!
//! struct Booking {
//!     nights: u32,
//!     max_nights: u32,
//! }
//!
//! let within_limit = less_than_or_equals_by(
//!     |b: &Booking| b.nights,
//!     |b: &Booking| b.max_nights,
//! );
//! assert!(within_limit.validate(&Booking { nights: 3, max_nights: 3 }).is_ok());
//! assert!(within_limit.validate(&Booking { nights: 4, max_nights: 3 }).is_err());
//! ```

use std::fmt;
use std::future::Future;
use std::ops::Deref;
use std::sync::Arc;

use crate::combinators::Pair;
use crate::foundation::{AsyncValidate, Policy, Validate, ValidationError};

// ============================================================================
// OPERAND
// ============================================================================

/// One side of a comparison.
pub enum Operand<T: ?Sized, A> {
    /// A constant captured at construction.
    Value(A),
    /// A value borrowed from the input.
    Projected(fn(&T) -> &A),
    /// A value computed from the input.
    Computed(Arc<dyn Fn(&T) -> A + Send + Sync>),
}

fn identity<T>(input: &T) -> &T {
    input
}

impl<T> Operand<T, T> {
    /// The input itself.
    pub fn input() -> Self {
        Self::Projected(identity::<T>)
    }
}

impl<T: ?Sized, A> Operand<T, A> {
    /// A constant operand.
    pub fn value(value: A) -> Self {
        Self::Value(value)
    }

    /// An operand borrowed from the input.
    pub fn projected(projection: fn(&T) -> &A) -> Self {
        Self::Projected(projection)
    }

    /// An operand computed from the input.
    pub fn computed<F>(compute: F) -> Self
    where
        F: Fn(&T) -> A + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(compute))
    }

    fn resolve<'a>(&'a self, input: &'a T) -> Resolved<'a, A> {
        match self {
            Self::Value(value) => Resolved::Borrowed(value),
            Self::Projected(projection) => Resolved::Borrowed(projection(input)),
            Self::Computed(compute) => Resolved::Owned(compute(input)),
        }
    }
}

impl<T: ?Sized, A: Clone> Clone for Operand<T, A> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value.clone()),
            Self::Projected(projection) => Self::Projected(*projection),
            Self::Computed(compute) => Self::Computed(Arc::clone(compute)),
        }
    }
}

impl<T: ?Sized, A: fmt::Debug> fmt::Debug for Operand<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Projected(_) => f.write_str("Projected"),
            Self::Computed(_) => f.write_str("Computed"),
        }
    }
}

enum Resolved<'a, A> {
    Borrowed(&'a A),
    Owned(A),
}

impl<A> Deref for Resolved<'_, A> {
    type Target = A;

    fn deref(&self) -> &A {
        match self {
            Self::Borrowed(value) => value,
            Self::Owned(value) => value,
        }
    }
}

// ============================================================================
// COMPARATORS
// ============================================================================

macro_rules! comparator {
    (
        $(#[$meta:meta])*
        $name:ident, $bound:ident, |$lhs:ident, $rhs:ident| $check:expr, $relation:literal
    ) => {
        $(#[$meta])*
        pub struct $name<T: ?Sized, A> {
            lhs: Operand<T, A>,
            rhs: Operand<T, A>,
        }

        impl<T: ?Sized, A> $name<T, A> {
            /// Compares `lhs` to `rhs`.
            pub fn new(lhs: Operand<T, A>, rhs: Operand<T, A>) -> Self {
                Self { lhs, rhs }
            }

            /// Left-hand operand.
            pub fn lhs(&self) -> &Operand<T, A> {
                &self.lhs
            }

            /// Right-hand operand.
            pub fn rhs(&self) -> &Operand<T, A> {
                &self.rhs
            }

            fn check(&self, input: &T) -> Result<(), ValidationError>
            where
                A: $bound + fmt::Debug,
            {
                let $lhs = self.lhs.resolve(input);
                let $rhs = self.rhs.resolve(input);
                if $check {
                    Ok(())
                } else {
                    Err(ValidationError::failed(format!(
                        concat!("{:?} ", $relation, " {:?}"),
                        *$lhs, *$rhs
                    )))
                }
            }
        }

        impl<T: ?Sized, A: Clone> Clone for $name<T, A> {
            fn clone(&self) -> Self {
                Self {
                    lhs: self.lhs.clone(),
                    rhs: self.rhs.clone(),
                }
            }
        }

        impl<T: ?Sized, A: fmt::Debug> fmt::Debug for $name<T, A> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("lhs", &self.lhs)
                    .field("rhs", &self.rhs)
                    .finish()
            }
        }

        impl<T, A> Validate for $name<T, A>
        where
            T: ?Sized,
            A: $bound + fmt::Debug,
        {
            type Input = T;

            fn validate(&self, input: &T) -> Result<(), ValidationError> {
                self.check(input)
            }
        }

        impl<T, A> AsyncValidate for $name<T, A>
        where
            T: ?Sized + Sync,
            A: $bound + fmt::Debug + Send + Sync,
        {
            type Input = T;

            fn validate_async(
                &self,
                input: &T,
            ) -> impl Future<Output = Result<(), ValidationError>> + Send {
                async move { self.check(input) }
            }
        }
    };
}

comparator! {
    /// Succeeds iff `lhs > rhs`.
    GreaterThan, PartialOrd, |lhs, rhs| *lhs > *rhs, "is not greater than"
}

comparator! {
    /// Succeeds iff `lhs < rhs`.
    LessThan, PartialOrd, |lhs, rhs| *lhs < *rhs, "is not less than"
}

comparator! {
    /// Succeeds iff `lhs == rhs`.
    Equals, PartialEq, |lhs, rhs| *lhs == *rhs, "is not equal to"
}

/// `GreaterThan` or `Equals`, first success wins.
pub type GreaterThanOrEquals<T, A = T> = Pair<GreaterThan<T, A>, Equals<T, A>>;

/// `LessThan` or `Equals`, first success wins.
pub type LessThanOrEquals<T, A = T> = Pair<LessThan<T, A>, Equals<T, A>>;

// ============================================================================
// FACTORY FUNCTIONS
// ============================================================================

/// Validates that the input is greater than `bound`.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// let validator = greater_than(5);
/// assert!(validator.validate(&6).is_ok());
/// assert_eq!(
///     validator.validate(&5).unwrap_err().to_string(),
///     "5 is not greater than 5"
/// );
/// ```
#[must_use]
pub fn greater_than<T>(bound: T) -> GreaterThan<T, T> {
    GreaterThan::new(Operand::input(), Operand::value(bound))
}

/// Validates that the input is less than `bound`.
#[must_use]
pub fn less_than<T>(bound: T) -> LessThan<T, T> {
    LessThan::new(Operand::input(), Operand::value(bound))
}

/// Validates that the input equals `expected`.
#[must_use]
pub fn equals<T>(expected: T) -> Equals<T, T> {
    Equals::new(Operand::input(), Operand::value(expected))
}

/// Validates that the input is greater than or equal to `bound`.
#[must_use]
pub fn greater_than_or_equals<T: Clone>(bound: T) -> GreaterThanOrEquals<T> {
    Pair::new(greater_than(bound.clone()), equals(bound), Policy::OneOf)
}

/// Validates that the input is less than or equal to `bound`.
#[must_use]
pub fn less_than_or_equals<T: Clone>(bound: T) -> LessThanOrEquals<T> {
    Pair::new(less_than(bound.clone()), equals(bound), Policy::OneOf)
}

/// Validates that `lhs(input) > rhs(input)`.
pub fn greater_than_by<T, A, L, R>(lhs: L, rhs: R) -> GreaterThan<T, A>
where
    T: ?Sized,
    L: Fn(&T) -> A + Send + Sync + 'static,
    R: Fn(&T) -> A + Send + Sync + 'static,
{
    GreaterThan::new(Operand::computed(lhs), Operand::computed(rhs))
}

/// Validates that `lhs(input) < rhs(input)`.
pub fn less_than_by<T, A, L, R>(lhs: L, rhs: R) -> LessThan<T, A>
where
    T: ?Sized,
    L: Fn(&T) -> A + Send + Sync + 'static,
    R: Fn(&T) -> A + Send + Sync + 'static,
{
    LessThan::new(Operand::computed(lhs), Operand::computed(rhs))
}

/// Validates that `lhs(input) == rhs(input)`.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// struct Passwords {
///     password: String,
///     confirmation: String,
/// }
///
/// let matching = equals_by(
///     |p: &Passwords| p.password.clone(),
///     |p: &Passwords| p.confirmation.clone(),
/// );
/// let error = matching
///     .validate(&Passwords {
///         password: "hunter2".into(),
///         confirmation: "hunter3".into(),
///     })
///     .unwrap_err();
/// assert_eq!(error.to_string(), r#""hunter2" is not equal to "hunter3""#);
/// ```
pub fn equals_by<T, A, L, R>(lhs: L, rhs: R) -> Equals<T, A>
where
    T: ?Sized,
    L: Fn(&T) -> A + Send + Sync + 'static,
    R: Fn(&T) -> A + Send + Sync + 'static,
{
    Equals::new(Operand::computed(lhs), Operand::computed(rhs))
}

/// Validates that `lhs(input) >= rhs(input)`.
pub fn greater_than_or_equals_by<T, A, L, R>(lhs: L, rhs: R) -> GreaterThanOrEquals<T, A>
where
    T: ?Sized,
    L: Fn(&T) -> A + Send + Sync + 'static,
    R: Fn(&T) -> A + Send + Sync + 'static,
{
    let lhs: Arc<dyn Fn(&T) -> A + Send + Sync> = Arc::new(lhs);
    let rhs: Arc<dyn Fn(&T) -> A + Send + Sync> = Arc::new(rhs);
    Pair::new(
        GreaterThan::new(
            Operand::Computed(Arc::clone(&lhs)),
            Operand::Computed(Arc::clone(&rhs)),
        ),
        Equals::new(Operand::Computed(lhs), Operand::Computed(rhs)),
        Policy::OneOf,
    )
}

/// Validates that `lhs(input) <= rhs(input)`.
pub fn less_than_or_equals_by<T, A, L, R>(lhs: L, rhs: R) -> LessThanOrEquals<T, A>
where
    T: ?Sized,
    L: Fn(&T) -> A + Send + Sync + 'static,
    R: Fn(&T) -> A + Send + Sync + 'static,
{
    let lhs: Arc<dyn Fn(&T) -> A + Send + Sync> = Arc::new(lhs);
    let rhs: Arc<dyn Fn(&T) -> A + Send + Sync> = Arc::new(rhs);
    Pair::new(
        LessThan::new(
            Operand::Computed(Arc::clone(&lhs)),
            Operand::Computed(Arc::clone(&rhs)),
        ),
        Equals::new(Operand::Computed(lhs), Operand::Computed(rhs)),
        Policy::OneOf,
    )
}

// ============================================================================
// TESTS
// ============================================================================
