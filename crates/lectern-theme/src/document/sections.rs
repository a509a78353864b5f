//! Partial section types.
//!
//! Every leaf is optional and kept in its raw form: colors and keywords as
//! strings, numbers as `i64`. Unknown fields are rejected by the parser.

use serde::Deserialize;

use crate::merge::Merge;

/// A foreground/background color pair.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct ColorPairSection {
    pub foreground: Option<String>,
    pub background: Option<String>,
}

impl ColorPairSection {
    pub fn foreground(color: impl Into<String>) -> Self {
        Self {
            foreground: Some(color.into()),
            background: None,
        }
    }
}

/// A margin or padding, either `{ percent }` or `{ horizontal, vertical }`.
///
/// Merged as a single value: an override replaces the base spacing as a whole.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpacingSection {
    pub percent: Option<i64>,
    pub horizontal: Option<i64>,
    pub vertical: Option<i64>,
}

impl SpacingSection {
    pub fn percent(percent: i64) -> Self {
        Self {
            percent: Some(percent),
            ..Self::default()
        }
    }

    pub fn cells(horizontal: i64, vertical: i64) -> Self {
        Self {
            percent: None,
            horizontal: Some(horizontal),
            vertical: Some(vertical),
        }
    }
}

/// The `default` section: base margin and colors of every slide.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultSection {
    pub margin: Option<SpacingSection>,
    #[merge(nested)]
    pub colors: Option<ColorPairSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct SlideTitleSection {
    pub alignment: Option<String>,
    pub separator: Option<bool>,
    pub padding_top: Option<i64>,
    pub padding_bottom: Option<i64>,
    #[merge(nested)]
    pub colors: Option<ColorPairSection>,
    pub bold: Option<bool>,
    pub italics: Option<bool>,
    pub underlined: Option<bool>,
    pub font_size: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct CodeBlockSection {
    pub alignment: Option<String>,
    pub minimum_size: Option<i64>,
    pub minimum_margin: Option<SpacingSection>,
    /// Name of the syntax highlighting theme.
    pub theme_name: Option<String>,
    pub padding: Option<SpacingSection>,
    pub background: Option<bool>,
    pub line_numbers: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct ExecutionOutputSection {
    #[merge(nested)]
    pub colors: Option<ColorPairSection>,
    #[merge(nested)]
    pub status: Option<super::StatusColorsSection>,
    pub padding: Option<SpacingSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct InlineCodeSection {
    #[merge(nested)]
    pub colors: Option<ColorPairSection>,
}

/// One text element of the intro slide.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct IntroElementSection {
    pub alignment: Option<String>,
    #[merge(nested)]
    pub colors: Option<ColorPairSection>,
    pub font_size: Option<i64>,
}

/// The author element, which can also be moved to the bottom of the page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct IntroAuthorSection {
    pub alignment: Option<String>,
    #[merge(nested)]
    pub colors: Option<ColorPairSection>,
    pub font_size: Option<i64>,
    pub positioning: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct IntroSlideSection {
    #[merge(nested)]
    pub title: Option<IntroElementSection>,
    #[merge(nested)]
    pub subtitle: Option<IntroElementSection>,
    #[merge(nested)]
    pub event: Option<IntroElementSection>,
    #[merge(nested)]
    pub location: Option<IntroElementSection>,
    #[merge(nested)]
    pub date: Option<IntroElementSection>,
    #[merge(nested)]
    pub author: Option<IntroAuthorSection>,
    /// Whether the footer is drawn on the intro slide.
    pub footer: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct HeadingSection {
    pub prefix: Option<String>,
    #[merge(nested)]
    pub colors: Option<ColorPairSection>,
    pub font_size: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct BlockQuoteColorsSection {
    pub foreground: Option<String>,
    pub background: Option<String>,
    /// Color of the prefix, separate from the text.
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct BlockQuoteSection {
    pub prefix: Option<String>,
    #[merge(nested)]
    pub colors: Option<BlockQuoteColorsSection>,
}

/// Per-kind alert settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct AlertKindSection {
    pub color: Option<String>,
    pub title: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct AlertSection {
    pub prefix: Option<String>,
    #[merge(nested)]
    pub base_colors: Option<ColorPairSection>,
    #[merge(nested)]
    pub styles: Option<super::AlertStylesSection>,
}

/// Colors and margins of rendered typst/latex formulas.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct TypstSection {
    #[merge(nested)]
    pub colors: Option<ColorPairSection>,
    pub horizontal_margin: Option<i64>,
    pub vertical_margin: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct FooterSection {
    pub style: Option<String>,
    pub left: Option<String>,
    pub center: Option<String>,
    pub right: Option<String>,
    pub height: Option<i64>,
    /// Glyph used to draw the progress bar.
    pub character: Option<String>,
    #[merge(nested)]
    pub colors: Option<ColorPairSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct ModalSection {
    #[merge(nested)]
    pub colors: Option<ColorPairSection>,
    #[merge(nested)]
    pub selection_colors: Option<ColorPairSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct MermaidSection {
    /// Any CSS color, including `transparent`.
    pub background: Option<String>,
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct D2Section {
    pub theme: Option<i64>,
}
