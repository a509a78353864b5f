//! Proc macros for Lectern.
//!
//! # Available Macros
//!
//! - [`Merge`] - Generate the field-by-field deep merge for partial theme sections
//!
//! Generated code refers to `::lectern_theme::merge`, so the derive is meant to be
//! used on types that live in (or depend on) the `lectern-theme` crate.

mod merge;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Merge` trait for a partial theme section.
///
/// Every field is merged according to its `#[merge(...)]` annotation:
///
/// | Attribute | Field type | Behavior |
/// |-----------|------------|----------|
/// | *(none)* | `Option<T>` | Override value replaces the base value when present |
/// | `nested` | `Option<T: Merge>` | Recurse into the section field by field |
/// | `extend` | `BTreeMap<K, V>` | Insert every override entry, keeping other base entries |
///
/// # Example
///
/// ```ignore
/// use lectern_macros::Merge;
///
/// #[derive(Default, Merge)]
/// struct HeadingSection {
///     prefix: Option<String>,
///
///     #[merge(nested)]
///     colors: Option<ColorPairSection>,
/// }
/// ```
///
/// # Generated Code
///
/// ```ignore
/// impl ::lectern_theme::merge::Merge for HeadingSection {
///     fn merge(&mut self, over: Self) {
///         let Self { prefix, colors } = over;
///         ::lectern_theme::merge::leaf(&mut self.prefix, prefix);
///         ::lectern_theme::merge::nested(&mut self.colors, colors);
///     }
/// }
/// ```
#[proc_macro_derive(Merge, attributes(merge))]
pub fn merge_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    merge::merge_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
