//! Typed style primitives produced by validation.
//!
//! - [`ColorValue`]: hex or named colors, convertible to `console::Color`
//! - [`Alignment`], [`FooterMode`], [`AuthorPositioning`], [`MermaidTheme`]:
//!   keyword enums implementing [`Keyword`]
//! - [`Percent`] and [`Spacing`]: margins and paddings
//! - [`HeadingLevel`], [`AlertKind`], [`ExecutionStatus`]: keys of the
//!   fixed-key sections

mod color;
mod keys;
mod value;

pub use color::{ColorReference, ColorValue, NamedColor};
pub use keys::{AlertKind, ExecutionStatus, HeadingLevel};
pub use value::{
    Alignment, AuthorPositioning, D2Theme, FooterMode, Keyword, MermaidTheme, Percent, Spacing,
    D2_THEME_IDS,
};
