//! Pattern validators
//!
//! [`Pattern`] matches the whole input against a regular expression; a
//! match of only part of the input is a failure. [`Email`] builds on it with
//! the length limits of RFC 5321.

use std::future::Future;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::foundation::{AsyncValidate, Validate, ValidationError};

/// Maximum length of an email address.
pub const EMAIL_MAX_LENGTH: usize = 320;

/// Maximum length of the part of an email address before the `@`.
pub const EMAIL_LOCAL_PART_MAX_LENGTH: usize = 64;

const EMAIL_PATTERN_SOURCE: &str = r"[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*";

static EMAIL_PATTERN: LazyLock<Result<Pattern, PatternError>> =
    LazyLock::new(|| Pattern::new(EMAIL_PATTERN_SOURCE));

/// Error returned when a pattern cannot be compiled.
#[derive(Debug, Clone, Error)]
#[error("invalid pattern `{pattern}`: {source}")]
pub struct PatternError {
    pattern: String,
    #[source]
    source: regex::Error,
}

impl PatternError {
    /// The pattern that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

// ============================================================================
// PATTERN
// ============================================================================

/// Validates that a string matches a regular expression in full.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// let digits = Pattern::new(r"\d+")?;
/// assert!(digits.validate("2024").is_ok());
/// assert!(digits.validate("2024a").is_err());
/// # Ok::<(), PatternError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles `pattern`, anchored at both ends.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| PatternError {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self {
            source: pattern.to_owned(),
            regex,
        })
    }

    /// The pattern as given, without anchors.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    fn check(&self, input: &str) -> Result<(), ValidationError> {
        if self.regex.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::failed(format!(
                "{input:?} does not match /{}/",
                self.source
            )))
        }
    }
}

impl Validate for Pattern {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.check(input)
    }
}

impl AsyncValidate for Pattern {
    type Input = str;

    fn validate_async(
        &self,
        input: &str,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move { self.check(input) }
    }
}

/// Compiles a full-match pattern validator.
pub fn pattern(pattern: &str) -> Result<Pattern, PatternError> {
    Pattern::new(pattern)
}

// ============================================================================
// EMAIL
// ============================================================================

/// Validates an email address.
///
/// Addresses longer than 320 characters, or whose local part is longer
/// than 64 characters, fail before the pattern is consulted.
///
/// ```rust
/// use tessera_validator::prelude::*;
///
/// assert!(email().validate("blob@example.com").is_ok());
/// assert!(email().validate("blob.example.com").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Email;

impl Validate for Email {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        check_email(input)
    }
}

impl AsyncValidate for Email {
    type Input = str;

    fn validate_async(
        &self,
        input: &str,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send {
        async move { check_email(input) }
    }
}

/// Creates an email address validator.
#[must_use]
pub const fn email() -> Email {
    Email
}

fn check_email(input: &str) -> Result<(), ValidationError> {
    let length = input.chars().count();
    if length > EMAIL_MAX_LENGTH {
        return Err(ValidationError::failed(format!(
            "email address is {length} characters long, the limit is {EMAIL_MAX_LENGTH}"
        )));
    }
    if let Some((local, _)) = input.rsplit_once('@') {
        let local_length = local.chars().count();
        if local_length > EMAIL_LOCAL_PART_MAX_LENGTH {
            return Err(ValidationError::failed(format!(
                "email local part is {local_length} characters long, the limit is {EMAIL_LOCAL_PART_MAX_LENGTH}"
            )));
        }
    }
    match &*EMAIL_PATTERN {
        Ok(pattern) if pattern.regex.is_match(input) => Ok(()),
        Ok(_) => Err(ValidationError::failed(format!(
            "{input:?} is not a valid email address"
        ))),
        Err(error) => Err(ValidationError::foreign(error.clone())),
    }
}
