//! Collection validators
//!
//! [`Collection`] is what the emptiness validators need, [`Container`] what
//! the membership validators need. Both are implemented for strings and the
//! standard collections; maps are searched by key.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::future::Future;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::combinators::Not;
use crate::foundation::{AsyncValidate, Validate, ValidationError};

// ============================================================================
// TRAITS
// ============================================================================

/// A value with a number of elements.
pub trait Collection {
    /// Number of elements; bytes for strings.
    fn element_count(&self) -> usize;

    /// Returns true if there are no elements.
    fn has_no_elements(&self) -> bool {
        self.element_count() == 0
    }
}

/// A value that can be searched for an element of type `E`.
pub trait Container<E: ?Sized> {
    /// Returns true if `element` is part of the value.
    fn contains_element(&self, element: &E) -> bool;
}

impl Collection for str {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl Collection for String {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for [T] {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for Vec<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T, S> Collection for HashSet<T, S> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for BTreeSet<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl Container<str> for str {
    fn contains_element(&self, element: &str) -> bool {
        self.contains(element)
    }
}

impl Container<char> for str {
    fn contains_element(&self, element: &char) -> bool {
        self.contains(*element)
    }
}

impl Container<&str> for str {
    fn contains_element(&self, element: &&str) -> bool {
        self.contains(*element)
    }
}

impl Container<String> for str {
    fn contains_element(&self, element: &String) -> bool {
        self.contains(element.as_str())
    }
}

impl<E> Container<E> for String
where
    E: ?Sized,
    str: Container<E>,
{
    fn contains_element(&self, element: &E) -> bool {
        self.as_str().contains_element(element)
    }
}

impl<T: PartialEq> Container<T> for [T] {
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq> Container<T> for Vec<T> {
    fn contains_element(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }
}

impl<T: PartialEq> Container<T> for VecDeque<T> {
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T, Q, S> Container<Q> for HashSet<T, S>
where
    T: Borrow<Q> + Eq + Hash,
    Q: ?Sized + Eq + Hash,
    S: std::hash::BuildHasher,
{
    fn contains_element(&self, element: &Q) -> bool {
        self.contains(element)
    }
}

impl<T, Q> Container<Q> for BTreeSet<T>
where
    T: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    fn contains_element(&self, element: &Q) -> bool {
        self.contains(element)
    }
}

impl<K, V, Q, S> Container<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: ?Sized + Eq + Hash,
    S: std::hash::BuildHasher,
{
    fn contains_element(&self, element: &Q) -> bool {
        self.contains_key(element)
    }
}

impl<K, V, Q> Container<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    fn contains_element(&self, element: &Q) -> bool {
        self.contains_key(element)
    }
}

fn missing<C, E>(collection: &C, element: &E) -> ValidationError
where
    C: fmt::Debug + ?Sized,
    E: fmt::Debug + ?Sized,
{
    ValidationError::failed(format!("{collection:?} does not contain {element:?}"))
}

// ============================================================================
// CONTAINS
// ============================================================================

/// Validates that a collection contains a fixed element.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// let validator = contains::<Vec<&str>, _>("admin");
/// assert!(validator.validate(&vec!["user", "admin"]).is_ok());
/// assert_eq!(
///     validator.validate(&vec!["user"]).unwrap_err().to_string(),
///     r#"["user"] does not contain "admin""#
/// );
/// ```
pub struct Contains<C: ?Sized, E> {
    element: E,
    _phantom: PhantomData<fn(&C)>,
}

impl<C: ?Sized, E> Contains<C, E> {
    /// Creates a membership validator for `element`.
    pub const fn new(element: E) -> Self {
        Self {
            element,
            _phantom: PhantomData,
        }
    }

    /// The element looked for.
    pub fn element(&self) -> &E {
        &self.element
    }

    fn check(&self, input: &C) -> Result<(), ValidationError>
    where
        C: Container<E> + fmt::Debug,
        E: fmt::Debug,
    {
        if input.contains_element(&self.element) {
            Ok(())
        } else {
            Err(missing(input, &self.element))
        }
    }
}

impl<C: ?Sized, E: Clone> Clone for Contains<C, E> {
    fn clone(&self) -> Self {
        Self::new(self.element.clone())
    }
}

impl<C: ?Sized, E: fmt::Debug> fmt::Debug for Contains<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contains")
            .field("element", &self.element)
            .finish()
    }
}

impl<C, E> Validate for Contains<C, E>
where
    C: Container<E> + fmt::Debug + ?Sized,
    E: fmt::Debug,
{
    type Input = C;

    fn validate(&self, input: &C) -> Result<(), ValidationError> {
        self.check(input)
    }
}

impl<C, E> AsyncValidate for Contains<C, E>
where
    C: Container<E> + fmt::Debug + Sync + ?Sized,
    E: fmt::Debug + Send + Sync,
{
    type Input = C;

    fn validate_async(
        &self,
        input: &C,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move { self.check(input) }
    }
}

/// Validates that a collection of type `C` contains `element`.
#[must_use]
pub const fn contains<C: ?Sized, E>(element: E) -> Contains<C, E> {
    Contains::new(element)
}

// ============================================================================
// CONTAINS FIELD
// ============================================================================

/// Validates that one projection of a value contains another projection of
/// the same value.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// struct Ballot {
///     choices: Vec<String>,
///     vote: String,
/// }
///
/// let validator = contains_field(|b: &Ballot| &b.choices, |b: &Ballot| &b.vote);
/// let ballot = Ballot {
///     choices: vec!["tea".into(), "coffee".into()],
///     vote: "tea".into(),
/// };
/// assert!(validator.validate(&ballot).is_ok());
/// ```
pub struct ContainsField<T, C: ?Sized, E: ?Sized, FC, FE> {
    collection: FC,
    element: FE,
    _phantom: PhantomData<fn(&T) -> (&C, &E)>,
}

impl<T, C: ?Sized, E: ?Sized, FC, FE> ContainsField<T, C, E, FC, FE> {
    /// Creates the validator from the two projections.
    pub const fn new(collection: FC, element: FE) -> Self {
        Self {
            collection,
            element,
            _phantom: PhantomData,
        }
    }

    fn check(&self, input: &T) -> Result<(), ValidationError>
    where
        C: Container<E> + fmt::Debug,
        E: fmt::Debug,
        FC: Fn(&T) -> &C,
        FE: Fn(&T) -> &E,
    {
        let collection = (self.collection)(input);
        let element = (self.element)(input);
        if collection.contains_element(element) {
            Ok(())
        } else {
            Err(missing(collection, element))
        }
    }
}

impl<T, C: ?Sized, E: ?Sized, FC: Clone, FE: Clone> Clone for ContainsField<T, C, E, FC, FE> {
    fn clone(&self) -> Self {
        Self::new(self.collection.clone(), self.element.clone())
    }
}

impl<T, C: ?Sized, E: ?Sized, FC, FE> fmt::Debug for ContainsField<T, C, E, FC, FE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainsField").finish_non_exhaustive()
    }
}

impl<T, C, E, FC, FE> Validate for ContainsField<T, C, E, FC, FE>
where
    C: Container<E> + fmt::Debug + ?Sized,
    E: fmt::Debug + ?Sized,
    FC: Fn(&T) -> &C,
    FE: Fn(&T) -> &E,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        self.check(input)
    }
}

impl<T, C, E, FC, FE> AsyncValidate for ContainsField<T, C, E, FC, FE>
where
    T: Sync,
    C: Container<E> + fmt::Debug + ?Sized,
    E: fmt::Debug + ?Sized,
    FC: Fn(&T) -> &C + Send + Sync,
    FE: Fn(&T) -> &E + Send + Sync,
{
    type Input = T;

    fn validate_async(
        &self,
        input: &T,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move { self.check(input) }
    }
}

/// Validates that `collection(input)` contains `element(input)`.
pub fn contains_field<T, C, E, FC, FE>(collection: FC, element: FE) -> ContainsField<T, C, E, FC, FE>
where
    C: Container<E> + ?Sized,
    E: ?Sized,
    FC: Fn(&T) -> &C,
    FE: Fn(&T) -> &E,
{
    ContainsField::new(collection, element)
}

// ============================================================================
// EMPTY / NOT EMPTY
// ============================================================================

/// Validates that a collection has no elements.
pub struct Empty<C: ?Sized> {
    _phantom: PhantomData<fn(&C)>,
}

impl<C: ?Sized> Empty<C> {
    /// Creates an emptiness validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    fn check(input: &C) -> Result<(), ValidationError>
    where
        C: Collection,
    {
        match input.element_count() {
            0 => Ok(()),
            count => Err(ValidationError::failed(format!(
                "expected an empty value, found {count} elements"
            ))),
        }
    }
}

impl<C: ?Sized> Default for Empty<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> Clone for Empty<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Empty<C> {}

impl<C: ?Sized> fmt::Debug for Empty<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<C: Collection + ?Sized> Validate for Empty<C> {
    type Input = C;

    fn validate(&self, input: &C) -> Result<(), ValidationError> {
        Self::check(input)
    }
}

impl<C: Collection + Sync + ?Sized> AsyncValidate for Empty<C> {
    type Input = C;

    fn validate_async(
        &self,
        input: &C,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move { Self::check(input) }
    }
}

/// Validates that a collection has at least one element.
///
/// Defined as the negation of [`Empty`], so failures carry the fixed
/// negation message.
pub type NotEmpty<C> = Not<Empty<C>>;

/// Validates that a value of type `C` is empty.
#[must_use]
pub const fn empty<C: ?Sized>() -> Empty<C> {
    Empty::new()
}

/// Validates that a value of type `C` is not empty.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// let validator = not_empty::<str>();
/// assert!(validator.validate("x").is_ok());
/// assert_eq!(
///     validator.validate("").unwrap_err().to_string(),
///     "Not validator did not succeed"
/// );
/// ```
#[must_use]
pub const fn not_empty<C: ?Sized>() -> NotEmpty<C> {
    Not::new(Empty::new())
}

// ============================================================================
// TESTS
// ============================================================================
