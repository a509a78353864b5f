//! Theme source loading.
//!
//! A [`ThemeReference`] names where a theme document comes from: a built-in
//! preset, or an [`ExternalSource`] such as a file. [`load`] turns it into a
//! partial [`ThemeDocument`]. Loading parses, it does not validate: bad
//! colors, keywords and numbers are left for [`validate`](crate::validate::validate)
//! so that they are reported together with every other problem.
//!
//! # Sources
//!
//! | Source | Location in errors |
//! |--------|--------------------|
//! | [`ThemeReference::Builtin`] | `builtin:<name>` |
//! | [`FileSource`] | the file path |
//! | [`InlineSource`] | the name given to it |
//!
//! Parse failures report `<location>:<line>:<column>` when the parser knows
//! the position.
//!
//! ```rust
//! use lectern_theme::loader::{load, ThemeReference};
//!
//! let doc = load(&ThemeReference::inline("cli", "code:\n  line_numbers: true\n")).unwrap();
//! assert_eq!(doc.code.unwrap().line_numbers, Some(true));
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::document::ThemeDocument;
use crate::error::LoadError;
use crate::registry;

/// A place a theme document can be read from.
pub trait ExternalSource: Send + Sync + fmt::Debug {
    /// Human readable location used in error messages.
    fn location(&self) -> String;

    /// Reads the raw document.
    fn read(&self) -> io::Result<String>;
}

/// A theme file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExternalSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
    }
}

/// A theme document held in memory, e.g. one embedded in a larger config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSource {
    name: String,
    content: String,
}

impl InlineSource {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl ExternalSource for InlineSource {
    fn location(&self) -> String {
        self.name.clone()
    }

    fn read(&self) -> io::Result<String> {
        Ok(self.content.clone())
    }
}

/// Where a theme document comes from.
#[derive(Debug, Clone)]
pub enum ThemeReference {
    /// A preset from the [registry](crate::registry).
    Builtin(String),
    /// Any other source.
    External(Arc<dyn ExternalSource>),
}

impl ThemeReference {
    pub fn builtin(name: impl Into<String>) -> Self {
        ThemeReference::Builtin(name.into())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        ThemeReference::External(Arc::new(FileSource::new(path)))
    }

    pub fn inline(name: impl Into<String>, content: impl Into<String>) -> Self {
        ThemeReference::External(Arc::new(InlineSource::new(name, content)))
    }

    /// The location this reference reports in errors and logs.
    pub fn location(&self) -> String {
        match self {
            ThemeReference::Builtin(name) => format!("builtin:{}", name),
            ThemeReference::External(source) => source.location(),
        }
    }
}

impl fmt::Display for ThemeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location())
    }
}

/// Loads the partial document a reference points to.
///
/// # Errors
///
/// - [`LoadError::NotFound`] for an unknown preset name
/// - [`LoadError::IoFailure`] when an external source cannot be read
/// - [`LoadError::Malformed`] when the content is not a theme document
pub fn load(reference: &ThemeReference) -> Result<ThemeDocument, LoadError> {
    let doc = match reference {
        ThemeReference::Builtin(name) => registry::lookup_builtin(name)?,
        ThemeReference::External(source) => {
            let location = source.location();
            let content = source.read().map_err(|source| LoadError::IoFailure {
                location: location.clone(),
                source,
            })?;
            ThemeDocument::from_yaml(&content)
                .map_err(|e| LoadError::malformed(location, &e))?
        }
    };
    tracing::debug!(source = %reference, empty = doc.is_empty(), "loaded theme document");
    Ok(doc)
}
