//! Typed leaf values of a resolved theme.
//!
//! Theme documents keep these values raw (strings and integers) until
//! validation, so that a bad value becomes a validation error with a field
//! path instead of a parse failure. The types here are what validation
//! produces.

use std::fmt;

/// An enum spelled as a fixed lowercase keyword in theme documents.
pub trait Keyword: Sized + Copy + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The keyword for this variant.
    fn keyword(self) -> &'static str;

    /// Looks up a variant by its keyword.
    fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.keyword() == s)
    }

    /// All keywords, comma separated, for error messages.
    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|v| v.keyword())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $kw:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::style::Keyword for $name {
            const ALL: &'static [Self] = &[$( $name::$variant ),+];

            fn keyword(self) -> &'static str {
                match self {
                    $( $name::$variant => $kw ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::style::Keyword::keyword(*self))
            }
        }
    };
}

pub(crate) use keyword_enum;

keyword_enum! {
    /// Horizontal alignment of a block.
    pub enum Alignment {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

keyword_enum! {
    /// What the footer shows.
    pub enum FooterMode {
        /// Left/center/right text templates.
        Template => "template",
        /// A bar that fills up as the presentation advances.
        ProgressBar => "progress_bar",
        /// No footer.
        None => "none",
    }
}

keyword_enum! {
    /// Where the author is placed on the intro slide.
    pub enum AuthorPositioning {
        BelowTitle => "below_title",
        PageBottom => "page_bottom",
    }
}

keyword_enum! {
    /// Built-in mermaid themes.
    pub enum MermaidTheme {
        Default => "default",
        Dark => "dark",
        Forest => "forest",
        Neutral => "neutral",
        Base => "base",
    }
}

/// Theme ids understood by the d2 diagram renderer.
pub const D2_THEME_IDS: &[u16] = &[
    0, 1, 3, 4, 5, 6, 7, 8, 100, 101, 102, 103, 104, 105, 200, 300, 301,
];

/// A d2 theme id, guaranteed to be one of [`D2_THEME_IDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct D2Theme(u16);

impl D2Theme {
    /// Returns the theme if `id` is a known d2 theme id.
    pub fn new(id: i64) -> Option<Self> {
        D2_THEME_IDS
            .iter()
            .copied()
            .find(|known| i64::from(*known) == id)
            .map(D2Theme)
    }

    pub fn id(self) -> u16 {
        self.0
    }
}

/// An integer percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    pub const MAX: i64 = 100;

    /// Returns the percentage if `value` is in range.
    pub fn new(value: i64) -> Option<Self> {
        (0..=Self::MAX).contains(&value).then(|| Percent(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Applies the percentage to `total`, rounding down.
    pub fn of(self, total: u16) -> u16 {
        (u32::from(total) * u32::from(self.0) / 100) as u16
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A margin or padding.
///
/// Either relative to the available width, or a fixed number of cells on
/// each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spacing {
    Percent(Percent),
    Cells { horizontal: u8, vertical: u8 },
}

impl Spacing {
    /// Horizontal spacing in cells for a surface `width` cells wide.
    pub fn horizontal_cells(&self, width: u16) -> u16 {
        match self {
            Spacing::Percent(percent) => percent.of(width),
            Spacing::Cells { horizontal, .. } => u16::from(*horizontal),
        }
    }

    /// Vertical spacing in rows. Percentages only apply horizontally.
    pub fn vertical_cells(&self) -> u16 {
        match self {
            Spacing::Percent(_) => 0,
            Spacing::Cells { vertical, .. } => u16::from(*vertical),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Alignment::from_keyword("center"), Some(Alignment::Center));
        assert_eq!(Alignment::from_keyword("diagonal"), None);
        assert_eq!(Alignment::from_keyword("Center"), None);
    }

    #[test]
    fn test_keyword_expected_list() {
        assert_eq!(Alignment::expected(), "left, center, right");
        assert_eq!(FooterMode::expected(), "template, progress_bar, none");
    }

    #[test]
    fn test_keyword_display() {
        assert_eq!(AuthorPositioning::PageBottom.to_string(), "page_bottom");
    }

    #[test]
    fn test_percent_bounds() {
        assert_eq!(Percent::new(0).map(Percent::get), Some(0));
        assert_eq!(Percent::new(100).map(Percent::get), Some(100));
        assert!(Percent::new(101).is_none());
        assert!(Percent::new(150).is_none());
        assert!(Percent::new(-1).is_none());
    }

    #[test]
    fn test_percent_of() {
        let eight = Percent::new(8).unwrap();
        assert_eq!(eight.of(100), 8);
        assert_eq!(eight.of(80), 6);
    }

    #[test]
    fn test_spacing_cells() {
        let spacing = Spacing::Cells {
            horizontal: 2,
            vertical: 1,
        };
        assert_eq!(spacing.horizontal_cells(200), 2);
        assert_eq!(spacing.vertical_cells(), 1);
    }

    #[test]
    fn test_d2_theme_ids() {
        assert_eq!(D2Theme::new(200).map(D2Theme::id), Some(200));
        assert!(D2Theme::new(2).is_none());
        assert!(D2Theme::new(-1).is_none());
    }
}
