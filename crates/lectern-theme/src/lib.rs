//! Theme resolution for terminal presentations.
//!
//! A theme is a YAML document describing how every element of a slide is
//! drawn: colors, alignment, margins, heading prefixes, the footer and so
//! on. This crate turns a theme reference into a [`ResolvedStyleModel`] with
//! every value present and checked:
//!
//! 1. **Load** the referenced document ([`loader`]): a built-in preset, a
//!    file, or an inline string. Loaded documents are partial; any field may
//!    be missing.
//! 2. **Merge** it onto the complete built-in default ([`registry`],
//!    [`merge`]). Sections merge field by field and heading levels, alert
//!    kinds and execution states merge per key.
//! 3. **Validate** the merged document ([`validate`]). Every violation is
//!    collected, each with a dotted path such as
//!    `headings.h3.colors.foreground`.
//!
//! ```rust
//! use lectern_theme::{resolve, HeadingLevel, ThemeReference};
//!
//! let model = resolve(&ThemeReference::inline("cli", r#"
//! headings:
//!   h2:
//!     colors:
//!       foreground: "f5a97f"
//! "#)).unwrap();
//!
//! let h2 = model.headings.get(HeadingLevel::H2);
//! assert_eq!(h2.block.colors.foreground.to_string(), "f5a97f");
//! ```
//!
//! Invalid themes are rejected as a whole:
//!
//! ```rust
//! use lectern_theme::{resolve, ThemeError, ThemeReference};
//!
//! let err = resolve(&ThemeReference::inline("cli", r#"
//! slide_title:
//!   alignment: diagonal
//! code:
//!   minimum_margin:
//!     percent: 150
//! "#)).unwrap_err();
//!
//! match err {
//!     ThemeError::Invalid(errors) => assert_eq!(errors.len(), 2),
//!     other => panic!("unexpected error: {}", other),
//! }
//! ```
//!
//! Applications that switch themes at runtime keep the model in an
//! [`ActiveTheme`].

// Lets `#[derive(Merge)]` output refer to `::lectern_theme` inside this crate.
extern crate self as lectern_theme;

pub mod active;
pub mod document;
mod error;
pub mod loader;
pub mod merge;
pub mod registry;
pub mod resolved;
pub mod resolver;
pub mod style;
mod util;
pub mod validate;

pub use active::ActiveTheme;
pub use document::ThemeDocument;
pub use error::{LoadError, ThemeError};
pub use loader::{load, ExternalSource, FileSource, InlineSource, ThemeReference};
pub use resolved::ResolvedStyleModel;
pub use resolver::{resolve, resolve_layers, ThemeSelection};
pub use style::{
    AlertKind, Alignment, ColorValue, ExecutionStatus, HeadingLevel, NamedColor, Spacing,
};
pub use util::rgb_to_ansi256;
pub use validate::{ValidationError, ValidationErrors};
