pub mod entry;
pub mod refs;
pub mod walker;
pub mod workflow;

use serde::{Deserialize, Serialize};

/// Where spacers for entries inside an expanded branch checklist go.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpacerMode {
    /// One spacer per branch entry, sized by the branching entry's
    /// `blanksBelow` and appended to the enclosing list after the branch.
    /// Matches the output of existing conversions.
    #[default]
    Legacy,
    /// Each branch entry's own `blanksBelow`, right after it inside the branch.
    PerEntry,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConvertOptions {
    pub spacer_mode: SpacerMode,
    pub detect_uid_collisions: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            spacer_mode: SpacerMode::Legacy,
            detect_uid_collisions: true,
        }
    }
}

/// Replaces literal newlines with the two characters `\n`.
pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}
