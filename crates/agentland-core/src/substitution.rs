//! Prompted substitution engine.
//!
//! Answers become literal search/replace pairs, which are applied per target
//! document in field order with global replacement.

use crate::answers::{AnswerSet, Field};
use crate::error::{CoreError, Result};
use crate::fs::FileSystem;
use crate::placeholders::{self, TargetDocument};
use std::path::Path;

/// A literal search/replace pair derived from one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Field the pair came from
    pub field: Field,
    /// Document the pair applies to
    pub document: TargetDocument,
    /// Literal placeholder text
    pub search: String,
    /// Literal replacement text
    pub replace: String,
}

impl Replacement {
    fn new(field: Field, document: TargetDocument, search: &str, replace: String) -> Self {
        Self {
            field,
            document,
            search: search.to_string(),
            replace,
        }
    }
}

/// Result of a configure pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigureReport {
    /// Documents that received at least one replacement, in processing order
    pub updated: Vec<TargetDocument>,
    /// Answered fields whose placeholder was absent from an existing document
    pub unmatched: Vec<(TargetDocument, Field)>,
}

impl ConfigureReport {
    /// Whether no document changed.
    pub fn is_unchanged(&self) -> bool {
        self.updated.is_empty()
    }
}

/// Split a comma-separated answer into trimmed, non-empty items.
pub fn split_items(answer: &str) -> Vec<&str> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Render the layer block, one `- <item> = [role]` line per item.
pub fn render_layers(answer: &str) -> Option<String> {
    render_list(answer, |item| format!("- {} = {}", item, placeholders::LAYER_ROLE))
}

/// Render the non-goal block, one `- <item>` line per item.
pub fn render_non_goals(answer: &str) -> Option<String> {
    render_list(answer, |item| format!("- {}", item))
}

fn render_list(answer: &str, line: impl Fn(&str) -> String) -> Option<String> {
    let items = split_items(answer);
    if items.is_empty() {
        return None;
    }
    Some(items.into_iter().map(line).collect::<Vec<_>>().join("\n"))
}

/// Derive every replacement pair for `answers`, in field declaration order.
///
/// Skipped fields contribute nothing. A list answer made only of commas and
/// whitespace contributes nothing either.
pub fn derive_replacements(answers: &AnswerSet) -> Vec<Replacement> {
    let mut pairs = Vec::new();

    if let Some(name) = answers.get(Field::SystemName) {
        let emphasised = format!(
            "{0}{1}{0}",
            placeholders::SYSTEM_NAME_EMPHASIS,
            name
        );
        for document in TargetDocument::ALL {
            pairs.push(Replacement::new(
                Field::SystemName,
                document,
                placeholders::SYSTEM_NAME,
                emphasised.clone(),
            ));
        }
    }

    if let Some(purpose) = answers.get(Field::Purpose) {
        pairs.push(Replacement::new(
            Field::Purpose,
            TargetDocument::Vision,
            placeholders::PURPOSE,
            format!("{}{}", placeholders::PURPOSE_PREFIX, purpose),
        ));
    }

    if let Some(block) = answers.get(Field::Layers).and_then(render_layers) {
        pairs.push(Replacement::new(
            Field::Layers,
            TargetDocument::ProjectBrief,
            placeholders::LAYERS,
            block,
        ));
    }

    if let Some(rule) = answers.get(Field::Boundary) {
        pairs.push(Replacement::new(
            Field::Boundary,
            TargetDocument::ProjectBrief,
            placeholders::BOUNDARY,
            format!("- {}", rule),
        ));
    }

    if let Some(block) = answers.get(Field::NonGoals).and_then(render_non_goals) {
        pairs.push(Replacement::new(
            Field::NonGoals,
            TargetDocument::Vision,
            placeholders::NON_GOALS,
            block,
        ));
    }

    pairs
}

/// Apply pairs to `text`, returning the new text and the fields that matched
/// and did not match.
///
/// Each placeholder is searched literally first. Only when the literal form is
/// absent is its CRLF form tried, so documents saved with Windows line endings
/// still match multi-line placeholders.
pub fn apply_to_text(text: &str, pairs: &[&Replacement]) -> (String, Vec<Field>, Vec<Field>) {
    let mut result = text.to_string();
    let mut matched = Vec::new();
    let mut missed = Vec::new();

    for pair in pairs {
        if result.contains(&pair.search) {
            result = result.replace(&pair.search, &pair.replace);
            matched.push(pair.field);
            continue;
        }

        let crlf_search = pair.search.replace('\n', "\r\n");
        if crlf_search != pair.search && result.contains(&crlf_search) {
            result = result.replace(&crlf_search, &pair.replace.replace('\n', "\r\n"));
            matched.push(pair.field);
        } else {
            missed.push(pair.field);
        }
    }

    (result, matched, missed)
}

/// Apply the answers to the target documents under `root`.
///
/// A missing document is skipped silently. A document is written back only if
/// at least one pair matched.
///
/// # Errors
///
/// [`CoreError::Io`] when an existing document cannot be read or written.
pub fn configure<F>(fs: &mut F, root: &Path, answers: &AnswerSet) -> Result<ConfigureReport>
where
    F: FileSystem + ?Sized,
{
    let pairs = derive_replacements(answers);
    let mut report = ConfigureReport::default();

    for document in TargetDocument::ALL {
        let for_document: Vec<&Replacement> =
            pairs.iter().filter(|p| p.document == document).collect();
        if for_document.is_empty() {
            continue;
        }

        let path = root.join(document.relative_path());
        if !fs.exists(&path).map_err(|e| CoreError::io(&path, e))? {
            tracing::debug!("{} not found, skipping", path.display());
            continue;
        }

        let text = fs.read_to_string(&path).map_err(|e| CoreError::io(&path, e))?;
        let (updated, matched, missed) = apply_to_text(&text, &for_document);

        for field in missed {
            tracing::warn!("Placeholder for {} not found in {}", field, document);
            report.unmatched.push((document, field));
        }

        if !matched.is_empty() {
            fs.write(&path, updated.as_bytes())
                .map_err(|e| CoreError::io(&path, e))?;
            tracing::debug!("Updated {} ({} field(s))", document, matched.len());
            report.updated.push(document);
        }
    }

    Ok(report)
}
