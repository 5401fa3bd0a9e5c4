//! Placeholder text shared between the bundled templates and the
//! substitution engine.
//!
//! These literals are a contract: editing a template's placeholder without
//! updating this module makes the matching answer a no-op for that document.

use std::fmt;
use std::path::Path;

/// Emphasised project name token, present in both target documents.
pub const SYSTEM_NAME: &str = "**[System Name]**";

/// Emphasis markup wrapped around the name token.
pub const SYSTEM_NAME_EMPHASIS: &str = "**";

/// Purpose sentence in the vision document.
pub const PURPOSE: &str =
    "The long-term objective is to [describe the outcome this system exists to achieve].";

/// Prefix kept in front of the operator's purpose answer.
pub const PURPOSE_PREFIX: &str = "The long-term objective is to ";

/// Component block in the project brief.
pub const LAYERS: &str = "- [Component] = [role]\n- [Component] = [role]\n- [Component] = [role]";

/// Role suffix rendered after each layer.
pub const LAYER_ROLE: &str = "[role]";

/// Boundary rule block in the project brief.
pub const BOUNDARY: &str = "- [Boundary rule]\n- [Boundary rule]\n- [Boundary rule]";

/// Non-goal block in the vision document.
pub const NON_GOALS: &str = "- [Non-goal]\n- [Non-goal]\n- [Non-goal]\n- [Non-goal]";

/// A document the substitution engine edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TargetDocument {
    /// `docs/vision.md`
    Vision,
    /// `project-brief.md`
    ProjectBrief,
}

impl TargetDocument {
    /// Every target document, in processing order.
    pub const ALL: [TargetDocument; 2] = [TargetDocument::Vision, TargetDocument::ProjectBrief];

    /// Path relative to the project root.
    pub fn relative_path(self) -> &'static Path {
        match self {
            TargetDocument::Vision => Path::new("docs/vision.md"),
            TargetDocument::ProjectBrief => Path::new("project-brief.md"),
        }
    }
}

impl fmt::Display for TargetDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.relative_path().display())
    }
}
