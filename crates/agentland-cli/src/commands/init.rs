//! Init command implementation.

use crate::cli::InitArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use agentland_core::{
    collect_answers, configure, confirm, copy_tree, ConfigureReport, CopySummary, FileSystem,
    Prompter, ReadFileSystem,
};
use std::path::Path;

const CONFIRM_QUESTION: &str = "Configure your project now? [Y/n]";

const NEXT_STEPS: [&str; 4] = [
    "1. Review and customize CLAUDE.md for your project",
    "2. Fill in docs/vision.md with your system intent",
    "3. Describe components and boundaries in project-brief.md",
    "4. Update implementation-plan.md with your phases",
];

/// What an init run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    /// Copy phase counts
    pub copy: CopySummary,
    /// Configure phase result, `None` when configuration did not run
    pub configure: Option<ConfigureReport>,
}

/// Execute the init command.
///
/// Copies `template_root` from `templates` into `destination` on `fs`, then
/// either runs the interactive configuration or prints the manual editing hint.
pub fn execute_init<S, F, P>(
    args: InitArgs,
    templates: &S,
    template_root: &Path,
    destination: &Path,
    fs: &mut F,
    prompter: &mut P,
    formatter: &Formatter,
) -> Result<InitReport>
where
    S: ReadFileSystem + ?Sized,
    F: FileSystem + ?Sized,
    P: Prompter + ?Sized,
    CliError: From<P::Error>,
{
    if formatter.is_text() {
        println!();
        println!("{}", formatter.heading("Initializing spec-driven documentation..."));
        println!();
    }

    let copy = copy_tree(templates, template_root, fs, destination, args.force, |notice| {
        if let Some(line) = formatter.copy_notice(notice) {
            println!("{}", line);
        }
    })?;
    tracing::info!("Copied {} file(s), skipped {}", copy.copied, copy.skipped);

    if formatter.is_text() {
        println!();
        println!(
            "{}",
            formatter.success("Done! Documentation templates have been added to your project.")
        );
    }

    let configure = if args.no_configure || !confirm(prompter, CONFIRM_QUESTION)? {
        print_next_steps(formatter);
        None
    } else {
        Some(run_configuration(destination, fs, prompter, formatter)?)
    };

    Ok(InitReport { copy, configure })
}

fn run_configuration<F, P>(
    destination: &Path,
    fs: &mut F,
    prompter: &mut P,
    formatter: &Formatter,
) -> Result<ConfigureReport>
where
    F: FileSystem + ?Sized,
    P: Prompter + ?Sized,
    CliError: From<P::Error>,
{
    if formatter.is_text() {
        println!();
        println!(
            "{}",
            formatter.info("Answer a few questions (press Enter to skip any of them).")
        );
    }

    let answers = collect_answers(prompter)?;
    let report = configure(fs, destination, &answers)?;

    if formatter.is_text() {
        println!();
    }
    for (document, field) in &report.unmatched {
        if let Some(line) = formatter.placeholder_missing(*document, *field) {
            println!("{}", line);
        }
    }
    for document in &report.updated {
        if let Some(line) = formatter.document_updated(*document) {
            println!("{}", line);
        }
    }
    if report.is_unchanged() && formatter.is_text() {
        println!("{}", formatter.info("No changes made."));
    }

    Ok(report)
}

fn print_next_steps(formatter: &Formatter) {
    if !formatter.is_text() {
        return;
    }
    println!();
    println!("Next steps:");
    for step in NEXT_STEPS {
        println!("  {}", step);
    }
    println!();
}
