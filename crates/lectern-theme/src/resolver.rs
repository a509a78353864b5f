//! The resolution pipeline: load, merge onto the default, validate.
//!
//! ```text
//! reference ──load──▶ partial ──merge onto default──▶ merged ──validate──▶ model
//!     │                                                   │
//!     └────────────── LoadError                           └── ValidationErrors
//! ```
//!
//! [`resolve`] handles the common case of one override. [`resolve_layers`]
//! folds several overrides left to right, later layers winning, and
//! [`ThemeSelection`] is the config block that builds such a layer list.

use std::path::PathBuf;

use serde::Deserialize;

use crate::document::ThemeDocument;
use crate::error::ThemeError;
use crate::loader::{load, ThemeReference};
use crate::merge::merge;
use crate::registry::default_theme;
use crate::resolved::ResolvedStyleModel;
use crate::validate::validate;

/// Resolves a single theme reference over the default theme.
///
/// # Errors
///
/// [`ThemeError::Load`] when the reference cannot be loaded, and
/// [`ThemeError::Invalid`] with every violation when the merged theme is
/// invalid.
pub fn resolve(reference: &ThemeReference) -> Result<ResolvedStyleModel, ThemeError> {
    resolve_layers(std::slice::from_ref(reference))
}

/// Resolves a stack of references, applied in order over the default theme.
///
/// Every layer is loaded before anything is merged, so a load failure in any
/// layer aborts before validation runs.
pub fn resolve_layers(layers: &[ThemeReference]) -> Result<ResolvedStyleModel, ThemeError> {
    let overrides = layers.iter().map(load).collect::<Result<Vec<_>, _>>()?;
    let model = resolve_documents(overrides)?;
    tracing::debug!(layers = layers.len(), "resolved theme");
    Ok(model)
}

/// Merges already loaded overrides onto the default theme and validates the
/// result.
pub fn resolve_documents(
    overrides: impl IntoIterator<Item = ThemeDocument>,
) -> Result<ResolvedStyleModel, ThemeError> {
    let merged = overrides
        .into_iter()
        .fold(default_theme().clone(), merge);
    validate(&merged).map_err(|errors| {
        tracing::debug!(errors = errors.len(), "theme rejected");
        ThemeError::Invalid(errors)
    })
}

/// Theme choice as written in an application's config file.
///
/// ```yaml
/// theme:
///   name: light
///   path: /etc/app/theme.yaml
///   override:
///     footer:
///       style: none
/// ```
///
/// Layers apply as default ← `name` ← `path` ← `override`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSelection {
    /// A built-in preset.
    pub name: Option<String>,
    /// A theme file.
    pub path: Option<PathBuf>,
    /// Inline overrides applied last.
    #[serde(rename = "override")]
    pub overrides: Option<ThemeDocument>,
}

impl ThemeSelection {
    /// The references this selection loads, in application order.
    ///
    /// The inline override is already parsed and is not part of this list.
    pub fn references(&self) -> Vec<ThemeReference> {
        let mut references = Vec::new();
        if let Some(name) = &self.name {
            references.push(ThemeReference::builtin(name.clone()));
        }
        if let Some(path) = &self.path {
            references.push(ThemeReference::file(path.clone()));
        }
        references
    }

    /// Resolves the selection.
    pub fn resolve(&self) -> Result<ResolvedStyleModel, ThemeError> {
        let mut overrides = self
            .references()
            .iter()
            .map(load)
            .collect::<Result<Vec<_>, _>>()?;
        overrides.extend(self.overrides.clone());
        resolve_documents(overrides)
    }
}
