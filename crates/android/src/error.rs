use devdeck_core::validation::{ValidationIssue, ValidationKind};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors produced while loading a build-configuration document.
///
/// Validation failures identify the offending field by its full key path
/// (e.g. `android.defaultConfig.minSdk`).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("unresolved signing config reference: {0}")]
    UnresolvedReference(String),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Create a missing-field error for a key path
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Create an invalid-value error for a key path
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<ValidationIssue> for ConfigError {
    fn from(issue: ValidationIssue) -> Self {
        match issue.kind {
            ValidationKind::MissingField => Self::MissingField(issue.field),
            ValidationKind::InvalidValue => Self::InvalidValue {
                field: issue.field,
                reason: issue.message,
            },
            // The unresolved name itself is the payload, per the reference
            // taxonomy; fall back to the field path if it was not recorded.
            ValidationKind::UnresolvedReference => {
                Self::UnresolvedReference(issue.actual.unwrap_or(issue.field))
            }
        }
    }
}
