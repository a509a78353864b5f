//! Exhaustive validation of merged theme documents.
//!
//! [`validate`] walks every field of a [`ThemeDocument`], checks it against its
//! typed constraint and builds the matching [`ResolvedStyleModel`]. Problems
//! do not stop the walk: each one is pushed onto an error list, and the
//! document is rejected with the complete list at the end. A model is only
//! returned when the list is empty.
//!
//! Every check returns `Option<T>`; `None` always comes with a recorded
//! error. Composite values evaluate all of their fields before combining them,
//! so one bad field never hides its siblings.
//!
//! ```rust
//! use lectern_theme::{merge::merge, registry, validate::validate, ThemeDocument};
//!
//! let over = ThemeDocument::from_yaml(r#"
//! slide_title:
//!   alignment: diagonal
//! block_quote:
//!   colors:
//!     prefix: "zzzzzz"
//! "#).unwrap();
//!
//! let errors = validate(&merge(registry::default_theme().clone(), over)).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

mod error;

use std::collections::BTreeMap;

use unicode_width::UnicodeWidthStr;

use crate::document::{
    AlertKindSection, AlertSection, BlockQuoteSection, CodeBlockSection, ColorPairSection,
    D2Section, DefaultSection, ExecutionOutputSection, FooterSection, HeadingsSection,
    InlineCodeSection, IntroAuthorSection, IntroElementSection, IntroSlideSection, MermaidSection,
    ModalSection, SlideTitleSection, SpacingSection, StatusColorsSection, ThemeDocument,
    TypstSection, UnknownKeys,
};
use crate::resolved::{
    AlertKindStyle, AlertStyle, BlockQuoteStyle, CodeBlockStyle, Colors, D2Style, DefaultStyle,
    ExecutionOutputStyle, FooterStyle, FooterTemplate, FooterVariable, HeadingStyle,
    HeadingStyles, InlineCodeStyle, IntroAuthorStyle, IntroElementStyle, IntroSlideStyle,
    MermaidStyle, ModalStyle, PrefixedBlock, ResolvedStyleModel, SlideTitleStyle, StatusColors,
    TemplateSegment, TypstStyle,
};
use crate::style::{
    AlertKind, ColorReference, ColorValue, D2Theme, HeadingLevel, Keyword, Percent, Spacing,
    D2_THEME_IDS,
};

pub use error::{ValidationError, ValidationErrors};

const FONT_SIZE: (i64, i64) = (1, 7);
const CELLS: (i64, i64) = (0, u8::MAX as i64);
const WIDE_CELLS: (i64, i64) = (0, u16::MAX as i64);

/// Validates a merged document and resolves it into a [`ResolvedStyleModel`].
///
/// # Errors
///
/// Returns every violation in the document when there is at least one.
pub fn validate(doc: &ThemeDocument) -> Result<ResolvedStyleModel, ValidationErrors> {
    let palette = doc.palette.as_ref().map(|p| &p.colors);
    let mut validator = Validator::new(palette);
    let model = validator.document(doc);
    validator.palette_entries();
    validator.finish(model)
}

fn join(path: &str, field: &str) -> String {
    format!("{}.{}", path, field)
}

/// Error accumulator threaded through the traversal.
struct Validator<'a> {
    palette: Option<&'a BTreeMap<String, String>>,
    errors: Vec<ValidationError>,
}

impl<'a> Validator<'a> {
    fn new(palette: Option<&'a BTreeMap<String, String>>) -> Self {
        Self {
            palette,
            errors: Vec::new(),
        }
    }

    fn finish(
        self,
        model: Option<ResolvedStyleModel>,
    ) -> Result<ResolvedStyleModel, ValidationErrors> {
        match model {
            Some(model) if self.errors.is_empty() => Ok(model),
            Some(_) => Err(ValidationErrors::new(self.errors)),
            None if self.errors.is_empty() => Err(ValidationErrors::new(vec![
                ValidationError::MissingValue {
                    path: String::from("<document>"),
                },
            ])),
            None => Err(ValidationErrors::new(self.errors)),
        }
    }

    fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    // =========================================================================
    // Leaf checks
    // =========================================================================

    fn require<'v, T: ?Sized>(&mut self, path: &str, value: Option<&'v T>) -> Option<&'v T> {
        if value.is_none() {
            self.push(ValidationError::MissingValue {
                path: path.to_string(),
            });
        }
        value
    }

    fn flag(&mut self, path: &str, value: Option<bool>) -> Option<bool> {
        self.require(path, value.as_ref()).copied()
    }

    fn text(&mut self, path: &str, value: Option<&String>) -> Option<String> {
        self.require(path, value).cloned()
    }

    fn non_empty(&mut self, path: &str, value: Option<&String>) -> Option<String> {
        let value = self.require(path, value)?;
        if value.trim().is_empty() {
            self.push(ValidationError::MissingValue {
                path: path.to_string(),
            });
            return None;
        }
        Some(value.clone())
    }

    fn int_in(&mut self, path: &str, value: Option<i64>, (min, max): (i64, i64)) -> Option<i64> {
        let value = *self.require(path, value.as_ref())?;
        if value < min || value > max {
            self.push(ValidationError::OutOfRange {
                path: path.to_string(),
                value,
                min,
                max,
            });
            return None;
        }
        Some(value)
    }

    fn small(&mut self, path: &str, value: Option<i64>, range: (i64, i64)) -> Option<u8> {
        self.int_in(path, value, range).map(|v| v as u8)
    }

    fn wide(&mut self, path: &str, value: Option<i64>) -> Option<u16> {
        self.int_in(path, value, WIDE_CELLS).map(|v| v as u16)
    }

    fn keyword<K: Keyword>(&mut self, path: &str, value: Option<&String>) -> Option<K> {
        let value = self.require(path, value)?;
        let parsed = K::from_keyword(value);
        if parsed.is_none() {
            self.push(ValidationError::UnknownEnumValue {
                path: path.to_string(),
                value: value.clone(),
                expected: K::expected(),
            });
        }
        parsed
    }

    fn color(&mut self, path: &str, value: Option<&String>) -> Option<ColorValue> {
        let raw = self.require(path, value)?;
        let invalid = |reason: String| ValidationError::InvalidColor {
            path: path.to_string(),
            value: raw.clone(),
            reason,
        };
        match ColorValue::parse_reference(raw) {
            Ok(ColorReference::Value(color)) => Some(color),
            Ok(ColorReference::Palette(name)) => {
                match self.palette.and_then(|palette| palette.get(name)) {
                    // Bad palette entries are reported under `palette.colors`.
                    Some(entry) => ColorValue::parse(entry).ok(),
                    None => {
                        self.push(invalid(format!("unknown palette color '{}'", name)));
                        None
                    }
                }
            }
            Err(reason) => {
                self.push(invalid(reason));
                None
            }
        }
    }

    fn colors(&mut self, path: &str, value: Option<&ColorPairSection>) -> Option<Colors> {
        let value = self.require(path, value)?;
        let foreground = self.color(&join(path, "foreground"), value.foreground.as_ref());
        let background = self.color(&join(path, "background"), value.background.as_ref());
        Some(Colors {
            foreground: foreground?,
            background: background?,
        })
    }

    fn spacing(&mut self, path: &str, value: Option<&SpacingSection>) -> Option<Spacing> {
        let value = self.require(path, value)?;
        let has_cells = value.horizontal.is_some() || value.vertical.is_some();
        match (value.percent, has_cells) {
            (Some(_), true) => {
                self.push(ValidationError::ConflictingFields {
                    path: path.to_string(),
                    fields: "percent and horizontal/vertical".to_string(),
                });
                None
            }
            (Some(percent), false) => {
                let percent_path = join(path, "percent");
                let percent = self.int_in(&percent_path, Some(percent), (0, Percent::MAX))?;
                Percent::new(percent).map(Spacing::Percent)
            }
            (None, true) => {
                let horizontal =
                    self.small(&join(path, "horizontal"), Some(value.horizontal.unwrap_or(0)), CELLS);
                let vertical =
                    self.small(&join(path, "vertical"), Some(value.vertical.unwrap_or(0)), CELLS);
                Some(Spacing::Cells {
                    horizontal: horizontal?,
                    vertical: vertical?,
                })
            }
            (None, false) => {
                self.push(ValidationError::MissingValue {
                    path: path.to_string(),
                });
                None
            }
        }
    }

    fn unknown_keys(&mut self, path: &str, unknown: &UnknownKeys) {
        for key in unknown.keys() {
            self.push(ValidationError::UnknownKey {
                path: join(path, key),
                key: key.clone(),
            });
        }
    }

    fn template(&mut self, path: &str, value: Option<&String>) -> Option<FooterTemplate> {
        let source = self.require(path, value)?;
        let (segments, unknown) = split_template(source);
        if !unknown.is_empty() {
            for key in unknown {
                self.push(ValidationError::UnknownKey {
                    path: path.to_string(),
                    key,
                });
            }
            return None;
        }
        Some(FooterTemplate {
            source: source.clone(),
            segments,
        })
    }

    fn glyph(&mut self, path: &str, value: Option<&String>) -> Option<char> {
        let value = self.require(path, value)?;
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if value.width() == 1 => Some(c),
            _ => {
                self.push(ValidationError::OutOfRange {
                    path: path.to_string(),
                    value: value.width() as i64,
                    min: 1,
                    max: 1,
                });
                None
            }
        }
    }

    fn palette_entries(&mut self) {
        let Some(palette) = self.palette else {
            return;
        };
        for (name, raw) in palette {
            if let Err(reason) = ColorValue::parse(raw) {
                self.push(ValidationError::InvalidColor {
                    path: format!("palette.colors.{}", name),
                    value: raw.clone(),
                    reason,
                });
            }
        }
    }

    // =========================================================================
    // Sections
    // =========================================================================

    fn document(&mut self, doc: &ThemeDocument) -> Option<ResolvedStyleModel> {
        let default_style = self.default_style(doc.default_style.as_ref());
        let slide_title = self.slide_title(doc.slide_title.as_ref());
        let code = self.code(doc.code.as_ref());
        let execution_output = self.execution_output(doc.execution_output.as_ref());
        let inline_code = self.inline_code(doc.inline_code.as_ref());
        let intro_slide = self.intro_slide(doc.intro_slide.as_ref());
        let headings = self.headings(doc.headings.as_ref());
        let block_quote = self.block_quote(doc.block_quote.as_ref());
        let alert = self.alert(doc.alert.as_ref());
        let typst = self.typst(doc.typst.as_ref());
        let footer = self.footer(doc.footer.as_ref());
        let modals = self.modals(doc.modals.as_ref());
        let mermaid = self.mermaid(doc.mermaid.as_ref());
        let d2 = self.d2(doc.d2.as_ref());

        Some(ResolvedStyleModel {
            default_style: default_style?,
            slide_title: slide_title?,
            code: code?,
            execution_output: execution_output?,
            inline_code: inline_code?,
            intro_slide: intro_slide?,
            headings: headings?,
            block_quote: block_quote?,
            alert: alert?,
            typst: typst?,
            footer: footer?,
            modals: modals?,
            mermaid: mermaid?,
            d2: d2?,
        })
    }

    fn default_style(&mut self, raw: Option<&DefaultSection>) -> Option<DefaultStyle> {
        let raw = self.require("default", raw)?;
        let margin = self.spacing("default.margin", raw.margin.as_ref());
        let colors = self.colors("default.colors", raw.colors.as_ref());
        Some(DefaultStyle {
            margin: margin?,
            colors: colors?,
        })
    }

    fn slide_title(&mut self, raw: Option<&SlideTitleSection>) -> Option<SlideTitleStyle> {
        let raw = self.require("slide_title", raw)?;
        let alignment = self.keyword("slide_title.alignment", raw.alignment.as_ref());
        let separator = self.flag("slide_title.separator", raw.separator);
        let padding_top = self.small("slide_title.padding_top", raw.padding_top, CELLS);
        let padding_bottom = self.small("slide_title.padding_bottom", raw.padding_bottom, CELLS);
        let colors = self.colors("slide_title.colors", raw.colors.as_ref());
        let bold = self.flag("slide_title.bold", raw.bold);
        let italics = self.flag("slide_title.italics", raw.italics);
        let underlined = self.flag("slide_title.underlined", raw.underlined);
        let font_size = self.small("slide_title.font_size", raw.font_size, FONT_SIZE);
        Some(SlideTitleStyle {
            alignment: alignment?,
            separator: separator?,
            padding_top: padding_top?,
            padding_bottom: padding_bottom?,
            colors: colors?,
            bold: bold?,
            italics: italics?,
            underlined: underlined?,
            font_size: font_size?,
        })
    }

    fn code(&mut self, raw: Option<&CodeBlockSection>) -> Option<CodeBlockStyle> {
        let raw = self.require("code", raw)?;
        let alignment = self.keyword("code.alignment", raw.alignment.as_ref());
        let minimum_size = self.wide("code.minimum_size", raw.minimum_size);
        let minimum_margin = self.spacing("code.minimum_margin", raw.minimum_margin.as_ref());
        let theme_name = self.non_empty("code.theme_name", raw.theme_name.as_ref());
        let padding = self.spacing("code.padding", raw.padding.as_ref());
        let background = self.flag("code.background", raw.background);
        let line_numbers = self.flag("code.line_numbers", raw.line_numbers);
        Some(CodeBlockStyle {
            alignment: alignment?,
            minimum_size: minimum_size?,
            minimum_margin: minimum_margin?,
            theme_name: theme_name?,
            padding: padding?,
            background: background?,
            line_numbers: line_numbers?,
        })
    }

    fn status_colors(&mut self, raw: Option<&StatusColorsSection>) -> Option<StatusColors> {
        let path = "execution_output.status";
        let raw = self.require(path, raw)?;
        self.unknown_keys(path, &raw.unknown);
        let running = self.color(&join(path, "running"), raw.running.as_ref());
        let success = self.color(&join(path, "success"), raw.success.as_ref());
        let failure = self.color(&join(path, "failure"), raw.failure.as_ref());
        let not_started = self.color(&join(path, "not_started"), raw.not_started.as_ref());
        Some(StatusColors {
            running: running?,
            success: success?,
            failure: failure?,
            not_started: not_started?,
        })
    }

    fn execution_output(
        &mut self,
        raw: Option<&ExecutionOutputSection>,
    ) -> Option<ExecutionOutputStyle> {
        let raw = self.require("execution_output", raw)?;
        let colors = self.colors("execution_output.colors", raw.colors.as_ref());
        let status = self.status_colors(raw.status.as_ref());
        let padding = self.spacing("execution_output.padding", raw.padding.as_ref());
        Some(ExecutionOutputStyle {
            colors: colors?,
            status: status?,
            padding: padding?,
        })
    }

    fn inline_code(&mut self, raw: Option<&InlineCodeSection>) -> Option<InlineCodeStyle> {
        let raw = self.require("inline_code", raw)?;
        let colors = self.colors("inline_code.colors", raw.colors.as_ref());
        Some(InlineCodeStyle { colors: colors? })
    }

    fn intro_element(
        &mut self,
        path: &str,
        raw: Option<&IntroElementSection>,
    ) -> Option<IntroElementStyle> {
        let raw = self.require(path, raw)?;
        let alignment = self.keyword(&join(path, "alignment"), raw.alignment.as_ref());
        let colors = self.colors(&join(path, "colors"), raw.colors.as_ref());
        let font_size = self.small(&join(path, "font_size"), raw.font_size, FONT_SIZE);
        Some(IntroElementStyle {
            alignment: alignment?,
            colors: colors?,
            font_size: font_size?,
        })
    }

    fn intro_author(&mut self, raw: Option<&IntroAuthorSection>) -> Option<IntroAuthorStyle> {
        let path = "intro_slide.author";
        let raw = self.require(path, raw)?;
        let alignment = self.keyword(&join(path, "alignment"), raw.alignment.as_ref());
        let colors = self.colors(&join(path, "colors"), raw.colors.as_ref());
        let font_size = self.small(&join(path, "font_size"), raw.font_size, FONT_SIZE);
        let positioning = self.keyword(&join(path, "positioning"), raw.positioning.as_ref());
        Some(IntroAuthorStyle {
            alignment: alignment?,
            colors: colors?,
            font_size: font_size?,
            positioning: positioning?,
        })
    }

    fn intro_slide(&mut self, raw: Option<&IntroSlideSection>) -> Option<IntroSlideStyle> {
        let raw = self.require("intro_slide", raw)?;
        let title = self.intro_element("intro_slide.title", raw.title.as_ref());
        let subtitle = self.intro_element("intro_slide.subtitle", raw.subtitle.as_ref());
        let event = self.intro_element("intro_slide.event", raw.event.as_ref());
        let location = self.intro_element("intro_slide.location", raw.location.as_ref());
        let date = self.intro_element("intro_slide.date", raw.date.as_ref());
        let author = self.intro_author(raw.author.as_ref());
        let footer = self.flag("intro_slide.footer", raw.footer);
        Some(IntroSlideStyle {
            title: title?,
            subtitle: subtitle?,
            event: event?,
            location: location?,
            date: date?,
            author: author?,
            footer: footer?,
        })
    }

    fn heading(&mut self, raw: &HeadingsSection, level: HeadingLevel) -> Option<HeadingStyle> {
        let path = join("headings", level.keyword());
        let section = self.require(&path, raw.get(level))?;
        let prefix = self.text(&join(&path, "prefix"), section.prefix.as_ref());
        let colors = self.colors(&join(&path, "colors"), section.colors.as_ref());
        let font_size = self.small(&join(&path, "font_size"), section.font_size, FONT_SIZE);
        Some(HeadingStyle {
            block: PrefixedBlock {
                prefix: prefix?,
                colors: colors?,
            },
            font_size: font_size?,
        })
    }

    fn headings(&mut self, raw: Option<&HeadingsSection>) -> Option<HeadingStyles> {
        let raw = self.require("headings", raw)?;
        self.unknown_keys("headings", &raw.unknown);
        let h1 = self.heading(raw, HeadingLevel::H1);
        let h2 = self.heading(raw, HeadingLevel::H2);
        let h3 = self.heading(raw, HeadingLevel::H3);
        let h4 = self.heading(raw, HeadingLevel::H4);
        let h5 = self.heading(raw, HeadingLevel::H5);
        let h6 = self.heading(raw, HeadingLevel::H6);
        Some(HeadingStyles {
            h1: h1?,
            h2: h2?,
            h3: h3?,
            h4: h4?,
            h5: h5?,
            h6: h6?,
        })
    }

    fn block_quote(&mut self, raw: Option<&BlockQuoteSection>) -> Option<BlockQuoteStyle> {
        let raw = self.require("block_quote", raw)?;
        let prefix = self.text("block_quote.prefix", raw.prefix.as_ref());
        let colors = self.require("block_quote.colors", raw.colors.as_ref());
        let (foreground, background, prefix_color) = match colors {
            Some(colors) => (
                self.color("block_quote.colors.foreground", colors.foreground.as_ref()),
                self.color("block_quote.colors.background", colors.background.as_ref()),
                self.color("block_quote.colors.prefix", colors.prefix.as_ref()),
            ),
            None => (None, None, None),
        };
        Some(BlockQuoteStyle {
            block: PrefixedBlock {
                prefix: prefix?,
                colors: Colors {
                    foreground: foreground?,
                    background: background?,
                },
            },
            prefix_color: prefix_color?,
        })
    }

    fn alert_kind(
        &mut self,
        raw: Option<&AlertKindSection>,
        kind: AlertKind,
    ) -> Option<AlertKindStyle> {
        let path = join("alert.styles", kind.keyword());
        let raw = self.require(&path, raw)?;
        let color = self.color(&join(&path, "color"), raw.color.as_ref());
        let title = self.text(&join(&path, "title"), raw.title.as_ref());
        let icon = self.text(&join(&path, "icon"), raw.icon.as_ref());
        Some(AlertKindStyle {
            color: color?,
            title: title?,
            icon: icon?,
        })
    }

    fn alert(&mut self, raw: Option<&AlertSection>) -> Option<AlertStyle> {
        let raw = self.require("alert", raw)?;
        let prefix = self.text("alert.prefix", raw.prefix.as_ref());
        let base_colors = self.colors("alert.base_colors", raw.base_colors.as_ref());
        let styles = self.require("alert.styles", raw.styles.as_ref())?;
        self.unknown_keys("alert.styles", &styles.unknown);
        let note = self.alert_kind(styles.get(AlertKind::Note), AlertKind::Note);
        let tip = self.alert_kind(styles.get(AlertKind::Tip), AlertKind::Tip);
        let important = self.alert_kind(styles.get(AlertKind::Important), AlertKind::Important);
        let warning = self.alert_kind(styles.get(AlertKind::Warning), AlertKind::Warning);
        let caution = self.alert_kind(styles.get(AlertKind::Caution), AlertKind::Caution);
        Some(AlertStyle {
            base: PrefixedBlock {
                prefix: prefix?,
                colors: base_colors?,
            },
            note: note?,
            tip: tip?,
            important: important?,
            warning: warning?,
            caution: caution?,
        })
    }

    fn typst(&mut self, raw: Option<&TypstSection>) -> Option<TypstStyle> {
        let raw = self.require("typst", raw)?;
        let colors = self.colors("typst.colors", raw.colors.as_ref());
        let horizontal_margin = self.wide("typst.horizontal_margin", raw.horizontal_margin);
        let vertical_margin = self.wide("typst.vertical_margin", raw.vertical_margin);
        Some(TypstStyle {
            colors: colors?,
            horizontal_margin: horizontal_margin?,
            vertical_margin: vertical_margin?,
        })
    }

    fn footer(&mut self, raw: Option<&FooterSection>) -> Option<FooterStyle> {
        let raw = self.require("footer", raw)?;
        let mode = self.keyword("footer.style", raw.style.as_ref());
        let left = self.template("footer.left", raw.left.as_ref());
        let center = self.template("footer.center", raw.center.as_ref());
        let right = self.template("footer.right", raw.right.as_ref());
        let height = self.small("footer.height", raw.height, CELLS);
        let character = self.glyph("footer.character", raw.character.as_ref());
        let colors = self.colors("footer.colors", raw.colors.as_ref());
        Some(FooterStyle {
            mode: mode?,
            left: left?,
            center: center?,
            right: right?,
            height: height?,
            character: character?,
            colors: colors?,
        })
    }

    fn modals(&mut self, raw: Option<&ModalSection>) -> Option<ModalStyle> {
        let raw = self.require("modals", raw)?;
        let colors = self.colors("modals.colors", raw.colors.as_ref());
        let selection_colors =
            self.colors("modals.selection_colors", raw.selection_colors.as_ref());
        Some(ModalStyle {
            colors: colors?,
            selection_colors: selection_colors?,
        })
    }

    fn mermaid(&mut self, raw: Option<&MermaidSection>) -> Option<MermaidStyle> {
        let raw = self.require("mermaid", raw)?;
        let background = self.non_empty("mermaid.background", raw.background.as_ref());
        let theme = self.keyword("mermaid.theme", raw.theme.as_ref());
        Some(MermaidStyle {
            background: background?,
            theme: theme?,
        })
    }

    fn d2(&mut self, raw: Option<&D2Section>) -> Option<D2Style> {
        let raw = self.require("d2", raw)?;
        let id = *self.require("d2.theme", raw.theme.as_ref())?;
        let theme = D2Theme::new(id);
        if theme.is_none() {
            self.push(ValidationError::UnknownEnumValue {
                path: "d2.theme".to_string(),
                value: id.to_string(),
                expected: D2_THEME_IDS
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
        Some(D2Style { theme: theme? })
    }
}

/// Splits a footer template into segments.
///
/// `{name}` with a lowercase name is a variable; any other brace is literal
/// text. Returns the unknown variable names alongside the segments.
fn split_template(source: &str) -> (Vec<TemplateSegment>, Vec<String>) {
    let mut segments = Vec::new();
    let mut unknown = Vec::new();
    let mut literal = String::new();
    let mut rest = source;

    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let name = after.find('}').map(|end| &after[..end]).filter(|name| {
            !name.is_empty() && name.bytes().all(|b| b.is_ascii_lowercase() || b == b'_')
        });
        match name {
            Some(name) => {
                literal.push_str(&rest[..start]);
                match FooterVariable::from_name(name) {
                    Some(variable) => {
                        if !literal.is_empty() {
                            segments.push(TemplateSegment::Literal(std::mem::take(&mut literal)));
                        }
                        segments.push(TemplateSegment::Variable(variable));
                    }
                    None => unknown.push(name.to_string()),
                }
                rest = &after[name.len() + 1..];
            }
            None => {
                literal.push_str(&rest[..=start]);
                rest = after;
            }
        }
    }
    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(TemplateSegment::Literal(literal));
    }

    (segments, unknown)
}
