//! Integration tests for lectern-theme.
//!
//! These exercise the public pipeline end to end: theme files on disk, the
//! built-in presets, layered resolution and runtime reloads.

use std::fs;
use std::sync::Arc;

use lectern_theme::registry::{builtin_names, default_theme};
use lectern_theme::resolved::{FooterVariable, TemplateSegment};
use lectern_theme::{
    load, resolve, resolve_layers, ActiveTheme, AlertKind, Alignment, ColorValue,
    ExecutionStatus, HeadingLevel, LoadError, NamedColor, Spacing, ThemeError, ThemeReference,
    ThemeSelection, ValidationError,
};
use tempfile::TempDir;

fn write_theme(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Test: Resolving from files
// ============================================================================

#[test]
fn test_file_theme_inherits_unset_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(
        &dir,
        "theme.yaml",
        r#"
headings:
  h2:
    colors:
      foreground: "f5a97f"
"#,
    );

    let model = resolve(&ThemeReference::file(&path)).unwrap();
    let defaults = resolve(&ThemeReference::builtin("dark")).unwrap();

    let h2 = model.headings.get(HeadingLevel::H2);
    assert_eq!(h2.block.colors.foreground, ColorValue::Rgb(0xf5, 0xa9, 0x7f));
    assert_eq!(h2.block.prefix, defaults.headings.h2.block.prefix);
    assert_eq!(model.headings.h1, defaults.headings.h1);
    assert_eq!(model.headings.h3, defaults.headings.h3);
    assert_eq!(model.footer, defaults.footer);
}

#[test]
fn test_same_reference_resolves_equal() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(&dir, "theme.yaml", "code:\n  line_numbers: true\n");
    let reference = ThemeReference::file(&path);

    assert_eq!(resolve(&reference).unwrap(), resolve(&reference).unwrap());
}

#[test]
fn test_malformed_file_location() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(&dir, "broken.yaml", "code:\n  alignment: [left\n");

    match load(&ThemeReference::file(&path)).unwrap_err() {
        LoadError::Malformed { location, .. } => {
            assert!(location.starts_with(&path.display().to_string()));
        }
        other => panic!("expected Malformed, got {:?}", other),
    }
}

#[test]
fn test_every_violation_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(
        &dir,
        "bad.yaml",
        r#"
slide_title:
  alignment: diagonal
block_quote:
  colors:
    foreground: "zzzzzz"
headings:
  h7:
    prefix: '#######'
footer:
  right: "{current_slide} of {slides}"
intro_slide:
  author:
    positioning: sideways
d2:
  theme: 2
"#,
    );

    let err = resolve(&ThemeReference::file(&path)).unwrap_err();
    let ThemeError::Invalid(errors) = err else {
        panic!("expected validation errors");
    };

    let paths: Vec<_> = errors.iter().map(ValidationError::path).collect();
    assert_eq!(
        paths,
        [
            "slide_title.alignment",
            "intro_slide.author.positioning",
            "headings.h7",
            "block_quote.colors.foreground",
            "footer.right",
            "d2.theme",
        ]
    );

    let message = errors.to_string();
    assert!(message.starts_with("invalid theme (6 errors)"));
    assert!(message.contains("slide_title.alignment: unknown value 'diagonal'"));
}

// ============================================================================
// Test: Presets and layering
// ============================================================================

#[test]
fn test_all_presets_resolve() {
    for name in builtin_names() {
        let result = resolve(&ThemeReference::builtin(name));
        assert!(result.is_ok(), "{}: {}", name, result.unwrap_err());
    }
}

#[test]
fn test_preset_then_file() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(
        &dir,
        "tweaks.yaml",
        "default:\n  margin:\n    horizontal: 4\n",
    );

    let model = resolve_layers(&[
        ThemeReference::builtin("terminal-dark"),
        ThemeReference::file(&path),
    ])
    .unwrap();

    assert_eq!(
        model.default_style.colors.background,
        ColorValue::Named(NamedColor::Black)
    );
    assert_eq!(
        model.default_style.margin,
        Spacing::Cells {
            horizontal: 4,
            vertical: 0
        }
    );
    assert_eq!(
        model.execution_output.status.get(ExecutionStatus::Failure),
        ColorValue::Named(NamedColor::DarkRed)
    );
}

#[test]
fn test_selection_from_config() {
    let selection: ThemeSelection = serde_yaml::from_str(
        r#"
name: tokyonight-storm
override:
  footer:
    style: template
    left: "{title}: {sub_title}"
  alert:
    styles:
      warning:
        title: Careful
"#,
    )
    .unwrap();

    let model = selection.resolve().unwrap();
    assert_eq!(
        model.footer.left.segments,
        vec![
            TemplateSegment::Variable(FooterVariable::Title),
            TemplateSegment::Literal(": ".into()),
            TemplateSegment::Variable(FooterVariable::SubTitle),
        ]
    );
    assert_eq!(model.alert.kind(AlertKind::Warning).title, "Careful");
    assert_eq!(model.alert.kind(AlertKind::Note).title, "Note");
}

#[test]
fn test_unknown_preset_in_selection() {
    let selection: ThemeSelection = serde_yaml::from_str("name: neon\n").unwrap();
    assert!(matches!(
        selection.resolve(),
        Err(ThemeError::Load(LoadError::NotFound(name))) if name == "neon"
    ));
}

// ============================================================================
// Test: Runtime reloads
// ============================================================================

#[test]
fn test_reload_from_edited_file() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(&dir, "live.yaml", "code:\n  alignment: left\n");
    let reference = ThemeReference::file(&path);

    let active = ActiveTheme::resolve(&reference).unwrap();
    assert_eq!(active.current().code.alignment, Alignment::Left);

    fs::write(&path, "code:\n  alignment: right\n").unwrap();
    active.reload(&reference).unwrap();
    assert_eq!(active.current().code.alignment, Alignment::Right);

    let before = active.current();
    fs::write(&path, "code:\n  alignment: diagonal\n").unwrap();
    assert!(active.reload(&reference).is_err());
    assert!(Arc::ptr_eq(&before, &active.current()));

    fs::remove_file(&path).unwrap();
    assert!(matches!(
        active.reload(&reference),
        Err(ThemeError::Load(LoadError::IoFailure { .. }))
    ));
    assert_eq!(active.current().code.alignment, Alignment::Right);
}

#[test]
fn test_default_theme_is_not_mutated() {
    let before = default_theme().clone();
    resolve(&ThemeReference::inline("cli", "code:\n  alignment: left\n")).unwrap();
    assert_eq!(*default_theme(), before);
}
