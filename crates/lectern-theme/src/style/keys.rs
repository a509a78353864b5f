//! Keys of the fixed-key sections.
//!
//! Heading levels, alert kinds and execution states form closed sets. Theme
//! documents spell them as map keys, and any other key in those sections is
//! reported as unknown.

use super::value::keyword_enum;

keyword_enum! {
    /// A markdown heading level.
    pub enum HeadingLevel {
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        H5 => "h5",
        H6 => "h6",
    }
}

keyword_enum! {
    /// A GitHub-style alert kind (`> [!note]`).
    pub enum AlertKind {
        Note => "note",
        Tip => "tip",
        Important => "important",
        Warning => "warning",
        Caution => "caution",
    }
}

keyword_enum! {
    /// State of an executed code snippet.
    pub enum ExecutionStatus {
        Running => "running",
        Success => "success",
        Failure => "failure",
        NotStarted => "not_started",
    }
}

impl HeadingLevel {
    /// Returns the level for a `#` count in `1..=6`.
    pub fn from_depth(depth: u8) -> Option<Self> {
        match depth {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            4 => Some(HeadingLevel::H4),
            5 => Some(HeadingLevel::H5),
            6 => Some(HeadingLevel::H6),
            _ => None,
        }
    }
}
