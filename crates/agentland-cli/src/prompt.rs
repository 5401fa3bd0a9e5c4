//! Interactive terminal prompts.

use crate::error::{CliError, Result};
use agentland_core::Prompter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Line-oriented prompter over the terminal.
///
/// The editor is created on the first question, so runs that never prompt
/// never touch the terminal.
#[derive(Default)]
pub struct TerminalPrompter {
    editor: Option<DefaultEditor>,
}

impl TerminalPrompter {
    /// Create a prompter.
    pub fn new() -> Self {
        Self::default()
    }

    fn editor(&mut self) -> Result<&mut DefaultEditor> {
        if self.editor.is_none() {
            let editor = DefaultEditor::new()
                .map_err(|e| CliError::Prompt(format!("Failed to initialize editor: {}", e)))?;
            self.editor = Some(editor);
        }
        self.editor
            .as_mut()
            .ok_or_else(|| CliError::Prompt("editor unavailable".to_string()))
    }
}

impl Prompter for TerminalPrompter {
    type Error = CliError;

    fn ask(&mut self, question: &str) -> Result<String> {
        let prompt = format!("{} ", question);
        let line = self.editor()?.readline(&prompt);
        answer_from(line)
    }
}

/// Map a readline outcome to an answer. End of input counts as an empty answer.
fn answer_from(line: std::result::Result<String, ReadlineError>) -> Result<String> {
    match line {
        Ok(line) => Ok(line),
        Err(ReadlineError::Eof) => Ok(String::new()),
        Err(ReadlineError::Interrupted) => Err(CliError::Cancelled),
        Err(err) => Err(CliError::Prompt(err.to_string())),
    }
}
