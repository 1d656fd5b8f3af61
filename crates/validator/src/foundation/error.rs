//! Error types for validation failures
//!
//! A validation failure is a small tree: leaf [`ValidationError::Failed`]
//! summaries, [`ValidationError::ManyFailed`] aggregates (optionally
//! labeled), and [`ValidationError::Foreign`] errors raised by custom
//! validators that are not validation failures at all.
//!
//! Leaf summaries use `Cow<'static, str>` so the fixed messages emitted by
//! the built-in combinators never allocate.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

/// Summary used by one-of nodes when every alternative failed.
pub const ONE_OF_FAILED: &str = "did not pass any of the validations";

/// Summary used by [`Not`](crate::combinators::Not) when the inner validator passed.
pub const NOT_FAILED: &str = "Not validator did not succeed";

/// Summary used when a value was expected but `None` was found.
pub const EXPECTED_SOME: &str = "expected a value, found None";

/// Summary used when `None` was expected but a value was found.
pub const EXPECTED_NONE: &str = "expected None, found a value";

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// Errors compare structurally (summaries, children, labels), so tests can
/// assert on the exact shape a validator tree produced. Foreign errors
/// compare by identity.
///
/// # Examples
///
/// ```rust
/// use tessera_validator::foundation::ValidationError;
///
/// let error = ValidationError::many([
///     ValidationError::failed("name is empty"),
///     ValidationError::labeled("email", true, ValidationError::failed("missing @")),
/// ]);
///
/// assert_eq!(error.errors().len(), 2);
/// assert_eq!(error.to_string(), "- name is empty\n- email: missing @");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A single leaf failure with a human-readable description.
    Failed {
        /// What went wrong.
        summary: Cow<'static, str>,
    },

    /// An aggregate of sub-failures, in encounter order.
    ///
    /// Produced by accumulating nodes and by error labels. A `ManyFailed`
    /// with a single child is a distinct shape from the bare child.
    ManyFailed {
        /// Child errors in the order they were encountered.
        errors: Vec<ValidationError>,
        /// Optional label decorating the aggregate.
        context: ErrorContext,
    },

    /// A non-validation error raised by a custom validator.
    Foreign(ForeignError),
}

/// Label decoration carried by [`ValidationError::ManyFailed`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ErrorContext {
    /// Name of the section the children belong to.
    pub label: Option<Cow<'static, str>>,
    /// Render the label on the same line as the first child.
    ///
    /// Only affects [`Display`](fmt::Display); the tree is the same either way.
    pub inline: bool,
}

impl ErrorContext {
    /// A context with no label.
    #[must_use]
    pub const fn unlabeled() -> Self {
        Self {
            label: None,
            inline: false,
        }
    }

    /// A labeled context.
    pub fn labeled(label: impl Into<Cow<'static, str>>, inline: bool) -> Self {
        Self {
            label: Some(label.into()),
            inline,
        }
    }
}

impl ValidationError {
    /// Creates a leaf failure.
    ///
    /// ```rust
    /// use tessera_validator::foundation::ValidationError;
    ///
    /// // Static strings do not allocate:
    /// let error = ValidationError::failed("must not be empty");
    ///
    /// // Formatted summaries own their text:
    /// let error = ValidationError::failed(format!("must be at least {} characters", 5));
    /// ```
    pub fn failed(summary: impl Into<Cow<'static, str>>) -> Self {
        Self::Failed {
            summary: summary.into(),
        }
    }

    /// Creates an unlabeled aggregate from child errors.
    pub fn many(errors: impl IntoIterator<Item = ValidationError>) -> Self {
        Self::ManyFailed {
            errors: errors.into_iter().collect(),
            context: ErrorContext::unlabeled(),
        }
    }

    /// Nests `error` under `label`.
    pub fn labeled(
        label: impl Into<Cow<'static, str>>,
        inline: bool,
        error: ValidationError,
    ) -> Self {
        Self::ManyFailed {
            errors: vec![error],
            context: ErrorContext::labeled(label, inline),
        }
    }

    /// Wraps a non-validation error so it can travel through a validator tree.
    pub fn foreign<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Foreign(ForeignError::new(error))
    }

    /// The leaf summary, if this is a [`Failed`](Self::Failed) error.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Failed { summary } => Some(summary),
            _ => None,
        }
    }

    /// Child errors of an aggregate; empty for leaves.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::ManyFailed { errors, .. } => errors,
            _ => &[],
        }
    }

    /// The label of an aggregate, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::ManyFailed { context, .. } => context.label.as_deref(),
            _ => None,
        }
    }

    /// Returns true if this is a foreign (non-validation) error.
    #[must_use]
    pub fn is_foreign(&self) -> bool {
        matches!(self, Self::Foreign(_))
    }

    /// Downcasts a foreign error to its concrete type.
    #[must_use]
    pub fn downcast_foreign_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Foreign(foreign) => foreign.downcast_ref(),
            _ => None,
        }
    }

    /// Number of leaf errors in the tree.
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        match self {
            Self::ManyFailed { errors, .. } => {
                errors.iter().map(ValidationError::total_error_count).sum()
            }
            _ => 1,
        }
    }

    /// Leaf errors in depth-first order.
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a ValidationError>) {
        match self {
            Self::ManyFailed { errors, .. } => {
                for error in errors {
                    error.collect_leaves(leaves);
                }
            }
            leaf => leaves.push(leaf),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::render::render(self))
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Foreign(foreign) => Some(foreign.as_error()),
            _ => None,
        }
    }
}

// ============================================================================
// FOREIGN ERROR
// ============================================================================

/// A non-validation error carried through a validator tree unmodified.
///
/// Cloning shares the underlying error; equality is identity of that
/// shared error.
#[derive(Clone)]
pub struct ForeignError {
    inner: Arc<dyn std::error::Error + Send + Sync>,
}

impl ForeignError {
    /// Wraps an error.
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Downcasts to the concrete error type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        let error: &(dyn std::error::Error + 'static) = self.inner.as_ref();
        error.downcast_ref()
    }

    /// The wrapped error as a trait object.
    #[must_use]
    pub fn as_error(&self) -> &(dyn std::error::Error + 'static) {
        self.inner.as_ref()
    }
}

impl PartialEq for ForeignError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ForeignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ForeignError").field(&self.inner).finish()
    }
}

impl fmt::Display for ForeignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors.
///
/// Used by accumulating nodes to gather every child failure before
/// producing a single [`ValidationError::ManyFailed`].
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: SmallVec<[ValidationError; 2]>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: SmallVec::new(),
        }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds multiple errors to the collection.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Converts into a single aggregate error, even when only one error was
    /// collected.
    #[must_use]
    pub fn into_error(self) -> ValidationError {
        ValidationError::ManyFailed {
            errors: self.errors.into_vec(),
            context: ErrorContext::unlabeled(),
        }
    }

    /// `Ok(())` when empty, otherwise the aggregate error.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
