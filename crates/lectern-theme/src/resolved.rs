//! The fully resolved style model.
//!
//! Every type here has the same shape as its partial counterpart in
//! [`document`](crate::document), with every value concrete and validated.
//! A [`ResolvedStyleModel`] is built once by
//! [`validate`](crate::validate::validate) and never mutated; share it with
//! `Arc` when several consumers need it.

use crate::style::{
    AlertKind, Alignment, AuthorPositioning, ColorValue, D2Theme, ExecutionStatus, FooterMode,
    HeadingLevel, MermaidTheme, Spacing,
};

/// A foreground/background color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub foreground: ColorValue,
    pub background: ColorValue,
}

/// A prefix string drawn before a block, with the block's colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixedBlock {
    pub prefix: String,
    pub colors: Colors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultStyle {
    pub margin: Spacing,
    pub colors: Colors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideTitleStyle {
    pub alignment: Alignment,
    pub separator: bool,
    pub padding_top: u8,
    pub padding_bottom: u8,
    pub colors: Colors,
    pub bold: bool,
    pub italics: bool,
    pub underlined: bool,
    pub font_size: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlockStyle {
    pub alignment: Alignment,
    pub minimum_size: u16,
    pub minimum_margin: Spacing,
    pub theme_name: String,
    pub padding: Spacing,
    pub background: bool,
    pub line_numbers: bool,
}

/// One color per execution state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusColors {
    pub running: ColorValue,
    pub success: ColorValue,
    pub failure: ColorValue,
    pub not_started: ColorValue,
}

impl StatusColors {
    pub fn get(&self, status: ExecutionStatus) -> ColorValue {
        match status {
            ExecutionStatus::Running => self.running,
            ExecutionStatus::Success => self.success,
            ExecutionStatus::Failure => self.failure,
            ExecutionStatus::NotStarted => self.not_started,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutputStyle {
    pub colors: Colors,
    pub status: StatusColors,
    pub padding: Spacing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineCodeStyle {
    pub colors: Colors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroElementStyle {
    pub alignment: Alignment,
    pub colors: Colors,
    pub font_size: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroAuthorStyle {
    pub alignment: Alignment,
    pub colors: Colors,
    pub font_size: u8,
    pub positioning: AuthorPositioning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroSlideStyle {
    pub title: IntroElementStyle,
    pub subtitle: IntroElementStyle,
    pub event: IntroElementStyle,
    pub location: IntroElementStyle,
    pub date: IntroElementStyle,
    pub author: IntroAuthorStyle,
    pub footer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingStyle {
    pub block: PrefixedBlock,
    pub font_size: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingStyles {
    pub h1: HeadingStyle,
    pub h2: HeadingStyle,
    pub h3: HeadingStyle,
    pub h4: HeadingStyle,
    pub h5: HeadingStyle,
    pub h6: HeadingStyle,
}

impl HeadingStyles {
    pub fn get(&self, level: HeadingLevel) -> &HeadingStyle {
        match level {
            HeadingLevel::H1 => &self.h1,
            HeadingLevel::H2 => &self.h2,
            HeadingLevel::H3 => &self.h3,
            HeadingLevel::H4 => &self.h4,
            HeadingLevel::H5 => &self.h5,
            HeadingLevel::H6 => &self.h6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockQuoteStyle {
    pub block: PrefixedBlock,
    pub prefix_color: ColorValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertKindStyle {
    pub color: ColorValue,
    pub title: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertStyle {
    pub base: PrefixedBlock,
    pub note: AlertKindStyle,
    pub tip: AlertKindStyle,
    pub important: AlertKindStyle,
    pub warning: AlertKindStyle,
    pub caution: AlertKindStyle,
}

impl AlertStyle {
    pub fn kind(&self, kind: AlertKind) -> &AlertKindStyle {
        match kind {
            AlertKind::Note => &self.note,
            AlertKind::Tip => &self.tip,
            AlertKind::Important => &self.important,
            AlertKind::Warning => &self.warning,
            AlertKind::Caution => &self.caution,
        }
    }

    /// Colors for an alert of `kind`: the kind's color over the base background.
    pub fn colors(&self, kind: AlertKind) -> Colors {
        Colors {
            foreground: self.kind(kind).color,
            background: self.base.colors.background,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypstStyle {
    pub colors: Colors,
    pub horizontal_margin: u16,
    pub vertical_margin: u16,
}

/// A variable that footer templates can reference as `{name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FooterVariable {
    CurrentSlide,
    TotalSlides,
    Author,
    Title,
    SubTitle,
    Event,
    Location,
    Date,
}

impl FooterVariable {
    pub const ALL: &'static [FooterVariable] = &[
        FooterVariable::CurrentSlide,
        FooterVariable::TotalSlides,
        FooterVariable::Author,
        FooterVariable::Title,
        FooterVariable::SubTitle,
        FooterVariable::Event,
        FooterVariable::Location,
        FooterVariable::Date,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FooterVariable::CurrentSlide => "current_slide",
            FooterVariable::TotalSlides => "total_slides",
            FooterVariable::Author => "author",
            FooterVariable::Title => "title",
            FooterVariable::SubTitle => "sub_title",
            FooterVariable::Event => "event",
            FooterVariable::Location => "location",
            FooterVariable::Date => "date",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    Literal(String),
    Variable(FooterVariable),
}

/// A footer template split into literal text and variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FooterTemplate {
    pub source: String,
    pub segments: Vec<TemplateSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterStyle {
    pub mode: FooterMode,
    pub left: FooterTemplate,
    pub center: FooterTemplate,
    pub right: FooterTemplate,
    pub height: u8,
    pub character: char,
    pub colors: Colors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalStyle {
    pub colors: Colors,
    pub selection_colors: Colors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MermaidStyle {
    pub background: String,
    pub theme: MermaidTheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct D2Style {
    pub theme: D2Theme,
}

/// A validated, render-ready theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyleModel {
    pub default_style: DefaultStyle,
    pub slide_title: SlideTitleStyle,
    pub code: CodeBlockStyle,
    pub execution_output: ExecutionOutputStyle,
    pub inline_code: InlineCodeStyle,
    pub intro_slide: IntroSlideStyle,
    pub headings: HeadingStyles,
    pub block_quote: BlockQuoteStyle,
    pub alert: AlertStyle,
    pub typst: TypstStyle,
    pub footer: FooterStyle,
    pub modals: ModalStyle,
    pub mermaid: MermaidStyle,
    pub d2: D2Style,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_variable_names() {
        assert_eq!(
            FooterVariable::from_name("current_slide"),
            Some(FooterVariable::CurrentSlide)
        );
        assert_eq!(FooterVariable::from_name("slide"), None);
        for variable in FooterVariable::ALL {
            assert_eq!(FooterVariable::from_name(variable.name()), Some(*variable));
        }
    }

    #[test]
    fn test_model_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResolvedStyleModel>();
    }
}
