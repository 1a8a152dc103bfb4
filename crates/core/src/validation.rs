//! Configuration and input validation
//!
//! Provides field-oriented validation for the declarative configuration
//! documents the DevDeck tools consume. Checks are chained on a fluent
//! [`Validator`] and collected into a [`ValidationResult`] that separates
//! hard errors from non-blocking warnings.
//!
//! # Example
//!
//! ```rust,ignore
//! use devdeck_core::validation::Validator;
//!
//! let result = Validator::new()
//!     .non_empty("versionName", &config.version_name)
//!     .range("minSdk", config.min_sdk, 1, 10_000)
//!     .validate();
//!
//! if !result.is_valid() {
//!     for issue in result.errors() {
//!         eprintln!("Validation error: {}", issue);
//!     }
//! }
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Classification of a failed check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationKind {
    /// A required field is absent
    MissingField,
    /// A present field violates a type, range, pattern, or cross-field rule
    InvalidValue,
    /// A field names something that was never declared
    UnresolvedReference,
}

/// A single failed check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Field that failed validation, as a full key path
    pub field: String,
    /// Error message
    pub message: String,
    /// Classification of the failure
    pub kind: ValidationKind,
    /// Expected value (if applicable)
    pub expected: Option<String>,
    /// Actual value (if applicable)
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    /// Get all warnings
    pub fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }

    /// Add an error
    pub fn add_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    /// Add a warning
    pub fn add_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Convert to a `Result`, surfacing the first error as the caller's
    /// error type. Issues are reported in check order, so the first error
    /// identifies the offending field.
    ///
    /// # Errors
    ///
    /// Returns the first collected issue, converted via `From`.
    pub fn into_result<E>(mut self) -> Result<(), E>
    where
        E: From<ValidationIssue>,
    {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(E::from(self.errors.remove(0)))
        }
    }
}

/// Fluent validator builder
pub struct Validator {
    result: ValidationResult,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self {
            result: ValidationResult::new(),
        }
    }

    /// Validate that a field is not empty
    #[must_use]
    pub fn non_empty(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.result.add_error(ValidationIssue {
                field: field.to_string(),
                message: "must not be empty".to_string(),
                kind: ValidationKind::InvalidValue,
                expected: Some("non-empty value".to_string()),
                actual: Some("empty".to_string()),
            });
        }
        self
    }

    /// Validate against a pre-compiled regex pattern
    #[must_use]
    pub fn pattern(mut self, field: &str, value: &str, pattern: &Regex, description: &str) -> Self {
        if !pattern.is_match(value) {
            self.result.add_error(ValidationIssue {
                field: field.to_string(),
                message: format!("must be {description}"),
                kind: ValidationKind::InvalidValue,
                expected: Some(description.to_string()),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Validate a numeric range (inclusive)
    #[must_use]
    pub fn range<T: PartialOrd + std::fmt::Display>(
        mut self,
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> Self {
        if value < min || value > max {
            self.result.add_error(ValidationIssue {
                field: field.to_string(),
                message: format!("must be between {min} and {max}"),
                kind: ValidationKind::InvalidValue,
                expected: Some(format!("{min} - {max}")),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Validate that a value is in a list of allowed values
    #[must_use]
    pub fn one_of(mut self, field: &str, value: &str, allowed: &[&str]) -> Self {
        if !allowed.contains(&value) {
            self.result.add_error(ValidationIssue {
                field: field.to_string(),
                message: format!("must be one of: {}", allowed.join(", ")),
                kind: ValidationKind::InvalidValue,
                expected: Some(allowed.join(", ")),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Validate that a value names one of the declared entries
    #[must_use]
    pub fn resolves(mut self, field: &str, value: &str, declared: &[&str]) -> Self {
        if !declared.contains(&value) {
            self.result.add_error(ValidationIssue {
                field: field.to_string(),
                message: format!(
                    "references undeclared \"{value}\" (declared: {})",
                    declared.join(", ")
                ),
                kind: ValidationKind::UnresolvedReference,
                expected: Some(declared.join(", ")),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Add a custom validation
    #[must_use]
    pub fn custom<F>(mut self, field: &str, f: F) -> Self
    where
        F: FnOnce() -> Option<String>,
    {
        if let Some(message) = f() {
            self.result.add_error(ValidationIssue {
                field: field.to_string(),
                message,
                kind: ValidationKind::InvalidValue,
                expected: None,
                actual: None,
            });
        }
        self
    }

    /// Add a warning (non-blocking)
    #[must_use]
    pub fn warn_if(mut self, field: &str, condition: bool, message: &str) -> Self {
        if condition {
            self.result.add_warning(ValidationIssue {
                field: field.to_string(),
                message: message.to_string(),
                kind: ValidationKind::InvalidValue,
                expected: None,
                actual: None,
            });
        }
        self
    }

    /// Complete validation and return result
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}
