//! Output formatting for the CLI.

use crate::config::OutputFormat;
use agentland_core::{CopyAction, CopyNotice, Field, TargetDocument};
use colored::*;
use serde_json::json;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Whether banners and hints should be printed.
    pub fn is_text(&self) -> bool {
        self.format == OutputFormat::Text
    }

    /// Format one copy notice. `None` means print nothing.
    pub fn copy_notice(&self, notice: &CopyNotice) -> Option<String> {
        let path = notice.path.display().to_string();
        match (self.format, notice.action) {
            (OutputFormat::Text, CopyAction::Copied) => {
                Some(format!("  {} {}", self.colorize("COPY:", "green"), path))
            }
            (OutputFormat::Text, CopyAction::Skipped) => Some(format!(
                "  {} {} (already exists, use --force to overwrite)",
                self.colorize("SKIP:", "yellow"),
                path
            )),
            (OutputFormat::Json, CopyAction::Copied) => {
                Some(json!({ "action": "copy", "path": path }).to_string())
            }
            (OutputFormat::Json, CopyAction::Skipped) => {
                Some(json!({ "action": "skip", "path": path }).to_string())
            }
            (OutputFormat::Quiet, CopyAction::Copied) => Some(path),
            (OutputFormat::Quiet, CopyAction::Skipped) => None,
        }
    }

    /// Format the confirmation for an updated document.
    pub fn document_updated(&self, document: TargetDocument) -> Option<String> {
        let path = document.to_string();
        match self.format {
            OutputFormat::Text => Some(self.success(&format!("Updated: {}", path))),
            OutputFormat::Json => Some(json!({ "action": "update", "path": path }).to_string()),
            OutputFormat::Quiet => Some(path),
        }
    }

    /// Format a placeholder that could not be found in an existing document.
    pub fn placeholder_missing(&self, document: TargetDocument, field: Field) -> Option<String> {
        match self.format {
            OutputFormat::Text => Some(self.warning(&format!(
                "{}: placeholder for {} not found, left unchanged",
                document, field
            ))),
            OutputFormat::Json => Some(
                json!({
                    "action": "unmatched",
                    "path": document.to_string(),
                    "field": field.to_string(),
                })
                .to_string(),
            ),
            OutputFormat::Quiet => None,
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a heading.
    pub fn heading(&self, message: &str) -> String {
        self.colorize(message, "cyan")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn notice(action: CopyAction) -> CopyNotice {
        CopyNotice {
            action,
            path: PathBuf::from("docs/vision.md"),
        }
    }

    #[test]
    fn test_text_notices() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        assert_eq!(
            formatter.copy_notice(&notice(CopyAction::Copied)).unwrap(),
            "  COPY: docs/vision.md"
        );
        assert_eq!(
            formatter.copy_notice(&notice(CopyAction::Skipped)).unwrap(),
            "  SKIP: docs/vision.md (already exists, use --force to overwrite)"
        );
    }

    #[test]
    fn test_json_notices() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let line = formatter.copy_notice(&notice(CopyAction::Skipped)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["action"], "skip");
        assert_eq!(value["path"], "docs/vision.md");
    }

    #[test]
    fn test_quiet_hides_skips() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(
            formatter.copy_notice(&notice(CopyAction::Copied)).as_deref(),
            Some("docs/vision.md")
        );
        assert!(formatter.copy_notice(&notice(CopyAction::Skipped)).is_none());
    }

    #[test]
    fn test_document_updated() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        assert_eq!(
            formatter.document_updated(TargetDocument::ProjectBrief).unwrap(),
            "✓ Updated: project-brief.md"
        );
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
