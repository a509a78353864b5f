//! Validation error types.

use std::fmt;

/// A single constraint violation, identified by its dotted field path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The value is neither a 6 digit hex color, a color name, nor a known
    /// palette reference.
    #[error("{path}: invalid color '{value}': {reason}")]
    InvalidColor {
        path: String,
        value: String,
        reason: String,
    },

    /// A number is outside its allowed range.
    #[error("{path}: {value} is out of range ({min}..={max})")]
    OutOfRange {
        path: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A keyword is not one of the declared variants.
    #[error("{path}: unknown value '{value}' (expected one of: {expected})")]
    UnknownEnumValue {
        path: String,
        value: String,
        expected: String,
    },

    /// A key outside a fixed-key section's closed set, or an unknown footer
    /// template variable.
    #[error("{path}: unknown key '{key}'")]
    UnknownKey { path: String, key: String },

    /// A required value is absent or empty.
    #[error("{path}: missing value")]
    MissingValue { path: String },

    /// Mutually exclusive fields were combined.
    #[error("{path}: {fields} cannot be combined")]
    ConflictingFields { path: String, fields: String },
}

impl ValidationError {
    /// The dotted path of the offending field, e.g. `headings.h3.colors.foreground`.
    pub fn path(&self) -> &str {
        match self {
            ValidationError::InvalidColor { path, .. }
            | ValidationError::OutOfRange { path, .. }
            | ValidationError::UnknownEnumValue { path, .. }
            | ValidationError::UnknownKey { path, .. }
            | ValidationError::MissingValue { path }
            | ValidationError::ConflictingFields { path, .. } => path,
        }
    }
}

/// Every violation found in one document. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self(errors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }

    /// Returns the errors reported for `path`.
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.0.iter().filter(move |e| e.path() == path)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.0.len() == 1 { "error" } else { "errors" };
        write!(f, "invalid theme ({} {})", self.0.len(), noun)?;
        for error in &self.0 {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::OutOfRange {
            path: "code.minimum_margin.percent".to_string(),
            value: 150,
            min: 0,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "code.minimum_margin.percent: 150 is out of range (0..=100)"
        );
    }

    #[test]
    fn test_errors_display_lists_all() {
        let errors = ValidationErrors::new(vec![
            ValidationError::MissingValue {
                path: "footer".to_string(),
            },
            ValidationError::UnknownKey {
                path: "headings.h7".to_string(),
                key: "h7".to_string(),
            },
        ]);
        assert_eq!(
            errors.to_string(),
            "invalid theme (2 errors)\n  - footer: missing value\n  - headings.h7: unknown key 'h7'"
        );
    }

    #[test]
    fn test_path_accessor() {
        let err = ValidationError::InvalidColor {
            path: "block_quote.colors.prefix".to_string(),
            value: "zzzzzz".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(err.path(), "block_quote.colors.prefix");
    }
}
