//! Error types for theme loading and resolution.
//!
//! - [`LoadError`]: a theme document could not be obtained
//! - [`ThemeError`]: any failure of the resolution pipeline, either a load
//!   failure or the full list of validation errors

use std::io;

use crate::validate::ValidationErrors;

/// Errors that can occur while loading a theme document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No built-in theme has this name.
    #[error("theme '{0}' not found")]
    NotFound(String),

    /// The document could not be parsed.
    #[error("malformed theme at {location}: {message}")]
    Malformed { location: String, message: String },

    /// The source could not be read.
    #[error("failed to read theme from {location}: {source}")]
    IoFailure {
        location: String,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Create a malformed-document error from a YAML parse failure.
    ///
    /// The parser's line and column are appended to `location` when known.
    pub fn malformed(location: impl Into<String>, err: &serde_yaml::Error) -> Self {
        let location = location.into();
        let location = match err.location() {
            Some(at) => format!("{}:{}:{}", location, at.line(), at.column()),
            None => location,
        };
        Self::Malformed {
            location,
            message: err.to_string(),
        }
    }
}

/// Errors returned by the resolution pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = LoadError::NotFound("neon".to_string());
        assert_eq!(err.to_string(), "theme 'neon' not found");
    }

    #[test]
    fn test_malformed_carries_position() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [1, 2").unwrap_err();
        let err = LoadError::malformed("theme.yaml", &yaml_err);
        match err {
            LoadError::Malformed { location, .. } => {
                assert!(location.starts_with("theme.yaml"));
            }
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_io_failure_has_source() {
        use std::error::Error as _;

        let err = LoadError::IoFailure {
            location: "theme.yaml".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("theme.yaml"));
    }
}
