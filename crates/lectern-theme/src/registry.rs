//! Built-in themes embedded at compile time.
//!
//! The registry holds two kinds of documents:
//!
//! - The **default theme** (`themes/default.yaml`), which sets every field.
//!   It is the base every resolution starts from.
//! - **Presets**, partial documents that override some of the default's
//!   fields. They are looked up by name through [`lookup_builtin`].
//!
//! Both are plain YAML theme documents bundled with `include_str!`, so they
//! go through the same parser as user themes.
//!
//! ```rust
//! use lectern_theme::registry;
//!
//! assert!(registry::builtin_names().contains(&"catppuccin-mocha"));
//! assert!(registry::lookup_builtin("neon").is_err());
//! ```

use once_cell::sync::Lazy;

use crate::document::ThemeDocument;
use crate::error::LoadError;

const DEFAULT_THEME: &str = include_str!("../themes/default.yaml");

/// Preset name and YAML source, sorted by name.
const PRESETS: &[(&str, &str)] = &[
    (
        "catppuccin-mocha",
        include_str!("../themes/catppuccin-mocha.yaml"),
    ),
    ("dark", include_str!("../themes/dark.yaml")),
    ("gruvbox-dark", include_str!("../themes/gruvbox-dark.yaml")),
    ("light", include_str!("../themes/light.yaml")),
    ("terminal-dark", include_str!("../themes/terminal-dark.yaml")),
    ("terminal-light", include_str!("../themes/terminal-light.yaml")),
    (
        "tokyonight-storm",
        include_str!("../themes/tokyonight-storm.yaml"),
    ),
];

static DEFAULT: Lazy<ThemeDocument> = Lazy::new(|| {
    ThemeDocument::from_yaml(DEFAULT_THEME).expect("embedded default theme must parse")
});

/// The complete built-in default theme.
pub fn default_theme() -> &'static ThemeDocument {
    &DEFAULT
}

/// Returns the override document of a built-in preset.
///
/// # Errors
///
/// [`LoadError::NotFound`] when no preset has this name.
pub fn lookup_builtin(name: &str) -> Result<ThemeDocument, LoadError> {
    let (_, source) = PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .ok_or_else(|| LoadError::NotFound(name.to_string()))?;
    ThemeDocument::from_yaml(source)
        .map_err(|e| LoadError::malformed(format!("builtin:{}", name), &e))
}

/// Names of every built-in preset, sorted.
pub fn builtin_names() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}
