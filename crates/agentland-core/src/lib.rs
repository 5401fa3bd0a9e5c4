//! Agentland Core
//!
//! Template materialization and placeholder substitution for the
//! `agentland-docs` scaffolding tool. This crate knows nothing about terminals,
//! argument parsing or process exit codes; those live in `agentland-cli`.
//!
//! ## Key Concepts
//!
//! - **Template root**: the bundled, read-only directory tree copied into projects
//! - **Force mode**: overwrite policy allowing existing destination files to be replaced
//! - **Placeholder**: fixed literal text in a template document the engine searches for
//! - **Target document**: one of the two files eligible for substitution after copying
//!
//! ## Architecture
//!
//! Template trees are read through [`ReadFileSystem`], destinations are written
//! through [`FileSystem`], and operator input goes through the [`Prompter`]
//! trait, so both engines run against [`MemoryFs`] and [`ScriptedPrompter`] in
//! tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod answers;
pub mod copier;
pub mod error;
pub mod fs;
pub mod placeholders;
pub mod substitution;

// Re-exports for convenience
pub use answers::{collect_answers, confirm, AnswerSet, Field, Prompter, Question, ScriptedPrompter, QUESTIONS};
pub use copier::{copy_tree, CopyAction, CopyDecision, CopyNotice, CopySummary};
pub use error::{CoreError, Result};
pub use fs::{DiskFs, EntryKind, FileSystem, MemoryFs, ReadFileSystem};
pub use placeholders::TargetDocument;
pub use substitution::{configure, derive_replacements, ConfigureReport, Replacement};
