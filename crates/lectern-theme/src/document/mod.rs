//! Partial theme documents.
//!
//! A [`ThemeDocument`] mirrors the YAML theme schema with every field
//! optional. Absence means "inherit from the base document". Documents are
//! produced by the [loader](crate::loader), combined with
//! [`merge`](crate::merge::merge) and turned into a
//! [`ResolvedStyleModel`](crate::ResolvedStyleModel) by
//! [`validate`](crate::validate::validate).
//!
//! ```rust
//! use lectern_theme::ThemeDocument;
//!
//! let doc = ThemeDocument::from_yaml(r#"
//! headings:
//!   h2:
//!     colors:
//!       foreground: "f5a97f"
//! "#).unwrap();
//!
//! let h2 = doc.headings.as_ref().and_then(|h| h.h2.as_ref()).unwrap();
//! assert_eq!(h2.prefix, None);
//! ```

mod keyed;
mod sections;

use serde::Deserialize;

use crate::merge::Merge;

pub use keyed::{
    AlertStylesSection, HeadingsSection, PaletteSection, StatusColorsSection, UnknownKeys,
};
pub use sections::{
    AlertKindSection, AlertSection, BlockQuoteColorsSection, BlockQuoteSection, CodeBlockSection,
    ColorPairSection, D2Section, DefaultSection, ExecutionOutputSection, FooterSection,
    HeadingSection, InlineCodeSection, IntroAuthorSection, IntroElementSection, IntroSlideSection,
    MermaidSection, ModalSection, SlideTitleSection, SpacingSection, TypstSection,
};

/// The root of a theme document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeDocument {
    #[serde(rename = "default")]
    #[merge(nested)]
    pub default_style: Option<DefaultSection>,
    #[merge(nested)]
    pub slide_title: Option<SlideTitleSection>,
    #[merge(nested)]
    pub code: Option<CodeBlockSection>,
    #[merge(nested)]
    pub execution_output: Option<ExecutionOutputSection>,
    #[merge(nested)]
    pub inline_code: Option<InlineCodeSection>,
    #[merge(nested)]
    pub intro_slide: Option<IntroSlideSection>,
    #[merge(nested)]
    pub headings: Option<HeadingsSection>,
    #[merge(nested)]
    pub block_quote: Option<BlockQuoteSection>,
    #[merge(nested)]
    pub alert: Option<AlertSection>,
    #[merge(nested)]
    pub typst: Option<TypstSection>,
    #[merge(nested)]
    pub footer: Option<FooterSection>,
    #[merge(nested)]
    pub modals: Option<ModalSection>,
    #[merge(nested)]
    pub mermaid: Option<MermaidSection>,
    #[merge(nested)]
    pub d2: Option<D2Section>,
    #[merge(nested)]
    pub palette: Option<PaletteSection>,
}

impl ThemeDocument {
    /// Parses a document from YAML.
    ///
    /// A document that is empty or only holds comments parses as an empty
    /// override.
    ///
    /// # Errors
    ///
    /// Returns the parser error for malformed YAML, wrong value types, or
    /// unknown fields outside the fixed-key sections.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if is_blank_document(yaml) {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Returns true if the document overrides nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn is_blank_document(yaml: &str) -> bool {
    yaml.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::HeadingLevel;

    #[test]
    fn test_empty_document() {
        assert!(ThemeDocument::from_yaml("").unwrap().is_empty());
        assert!(ThemeDocument::from_yaml("# only a comment\n\n")
            .unwrap()
            .is_empty());
        assert!(ThemeDocument::from_yaml("---\n").unwrap().is_empty());
    }

    #[test]
    fn test_default_section_is_renamed() {
        let doc = ThemeDocument::from_yaml(
            r#"
            default:
                colors:
                    foreground: "e6e6e6"
            "#,
        )
        .unwrap();
        let colors = doc.default_style.unwrap().colors.unwrap();
        assert_eq!(colors.foreground.as_deref(), Some("e6e6e6"));
        assert_eq!(colors.background, None);
    }

    #[test]
    fn test_raw_values_survive_parsing() {
        let doc = ThemeDocument::from_yaml(
            r#"
            slide_title:
                alignment: diagonal
            code:
                minimum_margin:
                    percent: 150
            "#,
        )
        .unwrap();
        assert_eq!(
            doc.slide_title.unwrap().alignment.as_deref(),
            Some("diagonal")
        );
        assert_eq!(doc.code.unwrap().minimum_margin.unwrap().percent, Some(150));
    }

    #[test]
    fn test_unknown_heading_key_is_kept() {
        let doc = ThemeDocument::from_yaml(
            r#"
            headings:
                h2:
                    prefix: '##'
                h7:
                    prefix: '#######'
            "#,
        )
        .unwrap();
        let headings = doc.headings.unwrap();
        assert_eq!(
            headings.get(HeadingLevel::H2).unwrap().prefix.as_deref(),
            Some("##")
        );
        assert!(headings.unknown.contains_key("h7"));
    }

    #[test]
    fn test_unknown_section_field_is_rejected() {
        let result = ThemeDocument::from_yaml(
            r#"
            slide_title:
                colour: red
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_top_level_section_is_rejected() {
        assert!(ThemeDocument::from_yaml("tables: {}").is_err());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(ThemeDocument::from_yaml("code: { minimum_size: wide }").is_err());
    }

    #[test]
    fn test_heading_entry_inserts() {
        let mut headings = HeadingsSection::default();
        headings.entry(HeadingLevel::H4).prefix = Some("####".into());
        assert!(headings.h4.is_some());
        assert!(headings.h1.is_none());
    }
}
