//! Tree copier: reproduce a template tree under a destination root.
//!
//! Directories are always ensured; regular files are written, overwritten or
//! skipped according to the overwrite policy. One [`CopyNotice`] is emitted
//! per visited file, never per directory.

use crate::error::{CoreError, Result};
use crate::fs::{EntryKind, FileSystem, ReadFileSystem};
use std::path::{Path, PathBuf};

/// What happens to a single destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDecision {
    /// Destination absent
    Write,
    /// Destination present, force mode on
    Overwrite,
    /// Destination present, force mode off
    Skip,
}

impl CopyDecision {
    /// Decide the policy for one regular file.
    pub fn decide(exists: bool, overwrite: bool) -> Self {
        match (exists, overwrite) {
            (false, _) => CopyDecision::Write,
            (true, true) => CopyDecision::Overwrite,
            (true, false) => CopyDecision::Skip,
        }
    }
}

/// Outcome reported for a visited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyAction {
    /// File contents were written
    Copied,
    /// File already existed and was left alone
    Skipped,
}

/// Status notice for one visited file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyNotice {
    /// What happened
    pub action: CopyAction,
    /// Destination path relative to the destination root
    pub path: PathBuf,
}

/// Counts for a finished copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    /// Files written
    pub copied: usize,
    /// Files left untouched
    pub skipped: usize,
}

impl CopySummary {
    /// Total files visited.
    pub fn total(&self) -> usize {
        self.copied + self.skipped
    }
}

/// Copy `source` in `from` to `destination` in `to`, recursing into directories.
///
/// The source tree is only read, so it can live somewhere other than the
/// destination (an embedded bundle, another disk location). `on_notice`
/// receives one notice per file in visit order. Siblings are visited in sorted
/// name order. Any failure aborts the walk; files already written stay written.
///
/// # Errors
///
/// [`CoreError::SourceMissing`] when `source` does not exist, [`CoreError::Io`]
/// for any storage failure.
pub fn copy_tree<S, D, N>(
    from: &S,
    source: &Path,
    to: &mut D,
    destination: &Path,
    overwrite: bool,
    mut on_notice: N,
) -> Result<CopySummary>
where
    S: ReadFileSystem + ?Sized,
    D: FileSystem + ?Sized,
    N: FnMut(&CopyNotice),
{
    let exists = from
        .exists(source)
        .map_err(|e| CoreError::io(source, e))?;
    if !exists {
        return Err(CoreError::SourceMissing(source.to_path_buf()));
    }

    tracing::debug!(
        "Copying {} -> {} (overwrite: {})",
        source.display(),
        destination.display(),
        overwrite
    );

    let mut walk = Walk {
        from,
        to,
        root: destination,
        overwrite,
        summary: CopySummary::default(),
        on_notice: &mut on_notice,
    };
    walk.visit(source, destination)?;
    Ok(walk.summary)
}

struct Walk<'a, S: ?Sized, D: ?Sized, N> {
    from: &'a S,
    to: &'a mut D,
    root: &'a Path,
    overwrite: bool,
    summary: CopySummary,
    on_notice: &'a mut N,
}

impl<S, D, N> Walk<'_, S, D, N>
where
    S: ReadFileSystem + ?Sized,
    D: FileSystem + ?Sized,
    N: FnMut(&CopyNotice),
{
    fn visit(&mut self, source: &Path, destination: &Path) -> Result<()> {
        let kind = self
            .from
            .kind(source)
            .map_err(|e| CoreError::io(source, e))?
            .ok_or_else(|| {
                CoreError::io(
                    source,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "entry vanished during copy"),
                )
            })?;

        match kind {
            EntryKind::Directory => self.visit_dir(source, destination),
            EntryKind::File => self.visit_file(source, destination),
        }
    }

    fn visit_dir(&mut self, source: &Path, destination: &Path) -> Result<()> {
        if self.to.kind(destination).map_err(|e| CoreError::io(destination, e))?
            != Some(EntryKind::Directory)
        {
            self.to
                .create_dir_all(destination)
                .map_err(|e| CoreError::io(destination, e))?;
        }

        let entries = self.from.list(source).map_err(|e| CoreError::io(source, e))?;
        for name in entries {
            self.visit(&source.join(&name), &destination.join(&name))?;
        }
        Ok(())
    }

    fn visit_file(&mut self, source: &Path, destination: &Path) -> Result<()> {
        let exists = self
            .to
            .exists(destination)
            .map_err(|e| CoreError::io(destination, e))?;
        let decision = CopyDecision::decide(exists, self.overwrite);
        tracing::debug!("{}: {:?}", destination.display(), decision);

        if decision == CopyDecision::Skip {
            self.summary.skipped += 1;
            self.notify(CopyAction::Skipped, destination);
            return Ok(());
        }

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty()
                && !self.to.exists(parent).map_err(|e| CoreError::io(parent, e))?
            {
                self.to
                    .create_dir_all(parent)
                    .map_err(|e| CoreError::io(parent, e))?;
            }
        }

        let contents = self.from.read(source).map_err(|e| CoreError::io(source, e))?;
        self.to
            .write(destination, &contents)
            .map_err(|e| CoreError::io(destination, e))?;
        self.summary.copied += 1;
        self.notify(CopyAction::Copied, destination);
        Ok(())
    }

    fn notify(&mut self, action: CopyAction, destination: &Path) {
        // A file root strips to nothing; name it instead
        let path = match destination.strip_prefix(self.root) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
            _ => destination
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| destination.to_path_buf()),
        };
        (self.on_notice)(&CopyNotice { action, path });
    }
}
