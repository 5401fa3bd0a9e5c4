//! The template tree: embedded in the binary, or overridden from disk.

use crate::config::Config;
use agentland_core::{DiskFs, EntryKind, ReadFileSystem};
use include_dir::{include_dir, Dir, DirEntry};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Templates compiled into the binary.
pub static TEMPLATES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Read-only view over an embedded directory. The root is the empty path.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedTemplates {
    dir: &'static Dir<'static>,
}

impl EmbeddedTemplates {
    /// View over `dir`.
    pub fn new(dir: &'static Dir<'static>) -> Self {
        Self { dir }
    }

    fn dir_at(&self, path: &Path) -> Option<&'static Dir<'static>> {
        if path.as_os_str().is_empty() {
            Some(self.dir)
        } else {
            self.dir.get_dir(path)
        }
    }
}

impl Default for EmbeddedTemplates {
    fn default() -> Self {
        Self::new(&TEMPLATES)
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no embedded template at {}", path.display()),
    )
}

impl ReadFileSystem for EmbeddedTemplates {
    fn kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        if path.as_os_str().is_empty() {
            return Ok(Some(EntryKind::Directory));
        }
        Ok(self.dir.get_entry(path).map(|entry| match entry {
            DirEntry::Dir(_) => EntryKind::Directory,
            DirEntry::File(_) => EntryKind::File,
        }))
    }

    fn list(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let dir = self.dir_at(dir).ok_or_else(|| not_found(dir))?;
        let mut names: Vec<OsString> = dir
            .entries()
            .iter()
            .filter_map(|entry| entry.path().file_name().map(|n| n.to_os_string()))
            .collect();
        names.sort();
        Ok(names)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.dir
            .get_file(path)
            .map(|file| file.contents().to_vec())
            .ok_or_else(|| not_found(path))
    }
}

/// Where `init` copies templates from.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// The tree compiled into the binary
    Embedded(EmbeddedTemplates),
    /// A directory on disk
    Disk(PathBuf),
}

impl TemplateSource {
    /// Root path to hand to the copier.
    pub fn root(&self) -> &Path {
        match self {
            TemplateSource::Embedded(_) => Path::new(""),
            TemplateSource::Disk(path) => path,
        }
    }
}

impl Default for TemplateSource {
    fn default() -> Self {
        TemplateSource::Embedded(EmbeddedTemplates::default())
    }
}

impl ReadFileSystem for TemplateSource {
    fn kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        match self {
            TemplateSource::Embedded(embedded) => embedded.kind(path),
            TemplateSource::Disk(_) => DiskFs.kind(path),
        }
    }

    fn list(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        match self {
            TemplateSource::Embedded(embedded) => embedded.list(dir),
            TemplateSource::Disk(_) => DiskFs.list(dir),
        }
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        match self {
            TemplateSource::Embedded(embedded) => embedded.read(path),
            TemplateSource::Disk(_) => DiskFs.read(path),
        }
    }
}

/// Pick the template source: command line (or environment), then config file,
/// then the embedded tree.
pub fn resolve_template_source(cli_override: Option<&Path>, config: &Config) -> TemplateSource {
    cli_override
        .map(Path::to_path_buf)
        .or_else(|| config.settings.templates.clone())
        .map(TemplateSource::Disk)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentland_core::placeholders;

    fn embedded(rel: &str) -> String {
        EmbeddedTemplates::default()
            .read_to_string(Path::new(rel))
            .unwrap()
    }

    #[test]
    fn test_override_wins() {
        let mut config = Config::default();
        config.settings.templates = Some(PathBuf::from("/from/config"));

        let source = resolve_template_source(Some(Path::new("/from/cli")), &config);
        assert_eq!(source.root(), Path::new("/from/cli"));

        let source = resolve_template_source(None, &config);
        assert_eq!(source.root(), Path::new("/from/config"));
    }

    #[test]
    fn test_default_is_embedded() {
        let source = resolve_template_source(None, &Config::default());
        assert!(matches!(source, TemplateSource::Embedded(_)));
        assert_eq!(source.kind(source.root()).unwrap(), Some(EntryKind::Directory));
    }

    #[test]
    fn test_embedded_tree_layout() {
        let templates = EmbeddedTemplates::default();
        assert_eq!(
            templates.list(Path::new("")).unwrap(),
            vec!["CLAUDE.md", "docs", "implementation-plan.md", "project-brief.md"]
        );
        assert_eq!(templates.list(Path::new("docs")).unwrap(), vec!["vision.md"]);
        assert_eq!(
            templates.kind(Path::new("docs")).unwrap(),
            Some(EntryKind::Directory)
        );
        assert_eq!(
            templates.kind(Path::new("docs/vision.md")).unwrap(),
            Some(EntryKind::File)
        );
        assert_eq!(templates.kind(Path::new("missing.md")).unwrap(), None);
    }

    #[test]
    fn test_vision_carries_its_placeholders() {
        let vision = embedded("docs/vision.md");
        assert!(vision.contains(placeholders::SYSTEM_NAME));
        assert!(vision.contains(placeholders::PURPOSE));
        assert!(vision.contains(placeholders::NON_GOALS));
    }

    #[test]
    fn test_brief_carries_its_placeholders() {
        let brief = embedded("project-brief.md");
        assert!(brief.contains(placeholders::SYSTEM_NAME));
        assert!(brief.contains(placeholders::LAYERS));
        assert!(brief.contains(placeholders::BOUNDARY));
    }
}
