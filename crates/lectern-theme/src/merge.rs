//! Deep merging of partial theme documents.
//!
//! [`merge`] folds an override document into a base document:
//!
//! - **Leaf fields**: a value present in the override replaces the base value;
//!   an absent one keeps the base value.
//! - **Nested sections**: merged field by field, so overriding
//!   `slide_title.colors.foreground` leaves `slide_title.alignment` alone.
//! - **Fixed-key sections** (heading levels, alert kinds, execution states):
//!   merged per key, so overriding `h2` leaves `h1` and `h3`..`h6` alone.
//! - **Open maps** (palette colors, captured unknown keys): override entries
//!   are inserted, other base entries stay.
//!
//! The per-type implementations are generated by `#[derive(Merge)]`, which
//! picks one of [`leaf`], [`nested`] or [`extend`] per field.
//!
//! ```rust
//! use lectern_theme::{merge::merge, ThemeDocument};
//!
//! let base = ThemeDocument::from_yaml(r#"
//! slide_title:
//!   alignment: center
//!   colors: { foreground: "beeeff", background: "040312" }
//! "#).unwrap();
//! let over = ThemeDocument::from_yaml(r#"
//! slide_title:
//!   colors: { foreground: "ff0000" }
//! "#).unwrap();
//!
//! let merged = merge(base, over);
//! let title = merged.slide_title.unwrap();
//! assert_eq!(title.alignment.as_deref(), Some("center"));
//! let colors = title.colors.unwrap();
//! assert_eq!(colors.foreground.as_deref(), Some("ff0000"));
//! assert_eq!(colors.background.as_deref(), Some("040312"));
//! ```

use std::collections::BTreeMap;

pub use lectern_macros::Merge;

use crate::document::ThemeDocument;

/// A partial value that can absorb an override of the same type.
pub trait Merge {
    /// Folds `over` into `self`. Values present in `over` win.
    fn merge(&mut self, over: Self);
}

/// Merges `over` onto `base` and returns the combined document.
pub fn merge(base: ThemeDocument, over: ThemeDocument) -> ThemeDocument {
    let mut merged = base;
    merged.merge(over);
    merged
}

/// Replaces `base` when `over` holds a value.
pub fn leaf<T>(base: &mut Option<T>, over: Option<T>) {
    if over.is_some() {
        *base = over;
    }
}

/// Recurses into a nested section, adopting `over` whole when the base has none.
pub fn nested<T: Merge>(base: &mut Option<T>, over: Option<T>) {
    let Some(over) = over else {
        return;
    };
    match base {
        Some(base) => base.merge(over),
        None => *base = Some(over),
    }
}

/// Inserts every entry of `over`, replacing base entries with the same key.
pub fn extend<K: Ord, V>(base: &mut BTreeMap<K, V>, over: BTreeMap<K, V>) {
    base.extend(over);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{
        ColorPairSection, HeadingSection, HeadingsSection, SlideTitleSection, SpacingSection,
    };
    use crate::style::HeadingLevel;

    fn heading(prefix: &str, fg: &str) -> HeadingSection {
        HeadingSection {
            prefix: Some(prefix.to_string()),
            colors: Some(ColorPairSection {
                foreground: Some(fg.to_string()),
                background: Some("000000".to_string()),
            }),
            font_size: Some(1),
        }
    }

    fn base_headings() -> ThemeDocument {
        let mut headings = HeadingsSection::default();
        for (i, level) in [
            HeadingLevel::H1,
            HeadingLevel::H2,
            HeadingLevel::H3,
            HeadingLevel::H4,
            HeadingLevel::H5,
            HeadingLevel::H6,
        ]
        .into_iter()
        .enumerate()
        {
            *headings.entry(level) = heading(&"#".repeat(i + 1), "ffffff");
        }
        ThemeDocument {
            headings: Some(headings),
            ..ThemeDocument::default()
        }
    }

    #[test]
    fn test_leaf_override_wins() {
        let mut base = Some(1);
        leaf(&mut base, Some(2));
        assert_eq!(base, Some(2));
    }

    #[test]
    fn test_leaf_absent_keeps_base() {
        let mut base = Some(1);
        leaf(&mut base, None);
        assert_eq!(base, Some(1));
    }

    #[test]
    fn test_nested_adopts_override_without_base() {
        let mut base: Option<ColorPairSection> = None;
        nested(&mut base, Some(ColorPairSection::foreground("ff0000")));
        assert_eq!(base, Some(ColorPairSection::foreground("ff0000")));
    }

    #[test]
    fn test_nested_recurses() {
        let mut base = Some(SlideTitleSection {
            alignment: Some("center".into()),
            colors: Some(ColorPairSection {
                foreground: Some("beeeff".into()),
                background: Some("040312".into()),
            }),
            ..SlideTitleSection::default()
        });
        let over = SlideTitleSection {
            colors: Some(ColorPairSection::foreground("ff0000")),
            ..SlideTitleSection::default()
        };
        nested(&mut base, Some(over));

        let title = base.unwrap();
        assert_eq!(title.alignment.as_deref(), Some("center"));
        let colors = title.colors.unwrap();
        assert_eq!(colors.foreground.as_deref(), Some("ff0000"));
        assert_eq!(colors.background.as_deref(), Some("040312"));
    }

    #[test]
    fn test_single_heading_override_leaves_siblings() {
        let base = base_headings();
        let mut over = HeadingsSection::default();
        over.entry(HeadingLevel::H2).colors = Some(ColorPairSection::foreground("f5a97f"));
        let over = ThemeDocument {
            headings: Some(over),
            ..ThemeDocument::default()
        };

        let merged = merge(base.clone(), over);
        let merged_headings = merged.headings.unwrap();
        let base_headings = base.headings.unwrap();

        for level in [
            HeadingLevel::H1,
            HeadingLevel::H3,
            HeadingLevel::H4,
            HeadingLevel::H5,
            HeadingLevel::H6,
        ] {
            assert_eq!(merged_headings.get(level), base_headings.get(level));
        }

        let h2 = merged_headings.get(HeadingLevel::H2).unwrap();
        assert_eq!(h2.prefix.as_deref(), Some("##"));
        let colors = h2.colors.as_ref().unwrap();
        assert_eq!(colors.foreground.as_deref(), Some("f5a97f"));
        assert_eq!(colors.background.as_deref(), Some("000000"));
    }

    #[test]
    fn test_spacing_is_replaced_whole() {
        let base = ThemeDocument::from_yaml("default: { margin: { percent: 8 } }").unwrap();
        let over =
            ThemeDocument::from_yaml("default: { margin: { horizontal: 2, vertical: 1 } }")
                .unwrap();
        let merged = merge(base, over);
        assert_eq!(
            merged.default_style.unwrap().margin,
            Some(SpacingSection::cells(2, 1))
        );
    }

    #[test]
    fn test_unknown_keys_are_carried() {
        let base = base_headings();
        let over = ThemeDocument::from_yaml("headings: { h7: { prefix: x } }").unwrap();
        let merged = merge(base, over);
        assert!(merged.headings.unwrap().unknown.contains_key("h7"));
    }

    #[test]
    fn test_palette_merges_per_entry() {
        let base =
            ThemeDocument::from_yaml("palette: { colors: { red: \"ff0000\", blue: \"0000ff\" } }")
                .unwrap();
        let over =
            ThemeDocument::from_yaml("palette: { colors: { red: \"aa0000\" } }").unwrap();
        let colors = merge(base, over).palette.unwrap().colors;
        assert_eq!(colors["red"], "aa0000");
        assert_eq!(colors["blue"], "0000ff");
    }
}
