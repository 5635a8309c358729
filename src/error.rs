// src/error.rs
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failures raised while locating, parsing or decoding a configuration
/// document.
///
/// Every variant carries the context (section label, field name) needed for
/// an actionable message. Decoders fail fast: the first error encountered
/// propagates unchanged, and a process that cannot fully validate its
/// configuration must not start.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The raw text was not a well-formed document.
    #[error("malformed configuration document: {0}")]
    DocumentSyntax(#[from] serde_yaml::Error),

    /// A required key is absent from an otherwise well-formed section.
    #[error("missing required field '{field}' in section '{section}'")]
    MissingField { field: String, section: String },

    /// A key is present but has the wrong shape. `expected` names the
    /// accepted domain, which may be narrower than a plain kind (port
    /// ranges, scheme allow-list).
    #[error("field '{field}' in section '{section}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        section: String,
        expected: String,
        actual: String,
    },

    /// The secret store has no value under a required key.
    #[error("no secret named '{0}' in the secret store")]
    MissingSecret(String),
}

impl ConfigError {
    pub(crate) fn missing_field(field: impl Into<String>, section: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            section: section.into(),
        }
    }

    pub(crate) fn type_mismatch(
        field: impl Into<String>,
        section: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            section: section.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
