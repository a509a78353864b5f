//! Fixed-key sections.
//!
//! Each known key is its own field, so a partial override of one key merges
//! into that key alone. Keys outside the closed set are captured in
//! `unknown` rather than rejected by the parser, which lets validation report
//! them as [`UnknownKey`](crate::ValidationError::UnknownKey) alongside every
//! other problem in the document.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::sections::{AlertKindSection, HeadingSection};
use crate::merge::Merge;
use crate::style::{AlertKind, ExecutionStatus, HeadingLevel};

/// Keys that are not part of a fixed-key section, with their raw values.
pub type UnknownKeys = BTreeMap<String, serde_yaml::Value>;

/// Heading styles, one per level.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default)]
pub struct HeadingsSection {
    #[merge(nested)]
    pub h1: Option<HeadingSection>,
    #[merge(nested)]
    pub h2: Option<HeadingSection>,
    #[merge(nested)]
    pub h3: Option<HeadingSection>,
    #[merge(nested)]
    pub h4: Option<HeadingSection>,
    #[merge(nested)]
    pub h5: Option<HeadingSection>,
    #[merge(nested)]
    pub h6: Option<HeadingSection>,
    #[serde(flatten)]
    #[merge(extend)]
    pub unknown: UnknownKeys,
}

impl HeadingsSection {
    pub fn get(&self, level: HeadingLevel) -> Option<&HeadingSection> {
        match level {
            HeadingLevel::H1 => self.h1.as_ref(),
            HeadingLevel::H2 => self.h2.as_ref(),
            HeadingLevel::H3 => self.h3.as_ref(),
            HeadingLevel::H4 => self.h4.as_ref(),
            HeadingLevel::H5 => self.h5.as_ref(),
            HeadingLevel::H6 => self.h6.as_ref(),
        }
    }

    /// Returns the style for `level`, inserting an empty one if absent.
    pub fn entry(&mut self, level: HeadingLevel) -> &mut HeadingSection {
        let slot = match level {
            HeadingLevel::H1 => &mut self.h1,
            HeadingLevel::H2 => &mut self.h2,
            HeadingLevel::H3 => &mut self.h3,
            HeadingLevel::H4 => &mut self.h4,
            HeadingLevel::H5 => &mut self.h5,
            HeadingLevel::H6 => &mut self.h6,
        };
        slot.get_or_insert_with(HeadingSection::default)
    }
}

/// Per-kind alert overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default)]
pub struct AlertStylesSection {
    #[merge(nested)]
    pub note: Option<AlertKindSection>,
    #[merge(nested)]
    pub tip: Option<AlertKindSection>,
    #[merge(nested)]
    pub important: Option<AlertKindSection>,
    #[merge(nested)]
    pub warning: Option<AlertKindSection>,
    #[merge(nested)]
    pub caution: Option<AlertKindSection>,
    #[serde(flatten)]
    #[merge(extend)]
    pub unknown: UnknownKeys,
}

impl AlertStylesSection {
    pub fn get(&self, kind: AlertKind) -> Option<&AlertKindSection> {
        match kind {
            AlertKind::Note => self.note.as_ref(),
            AlertKind::Tip => self.tip.as_ref(),
            AlertKind::Important => self.important.as_ref(),
            AlertKind::Warning => self.warning.as_ref(),
            AlertKind::Caution => self.caution.as_ref(),
        }
    }
}

/// One color per execution state.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default)]
pub struct StatusColorsSection {
    pub running: Option<String>,
    pub success: Option<String>,
    pub failure: Option<String>,
    pub not_started: Option<String>,
    #[serde(flatten)]
    #[merge(extend)]
    pub unknown: UnknownKeys,
}

impl StatusColorsSection {
    pub fn get(&self, status: ExecutionStatus) -> Option<&str> {
        match status {
            ExecutionStatus::Running => self.running.as_deref(),
            ExecutionStatus::Success => self.success.as_deref(),
            ExecutionStatus::Failure => self.failure.as_deref(),
            ExecutionStatus::NotStarted => self.not_started.as_deref(),
        }
    }
}

/// Named colors that other sections can refer to as `palette:<name>`.
///
/// Palette names are user-defined, so this is an open map merged per entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Merge)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteSection {
    #[merge(extend)]
    pub colors: BTreeMap<String, String>,
}
