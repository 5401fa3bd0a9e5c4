//! Filesystem capabilities used by the copier and the substitution engine.
//!
//! The engines only ever ask four questions of storage: what is at a path,
//! what is inside a directory, what are a file's bytes, and please write these
//! bytes. [`DiskFs`] answers them with `std::fs`; [`MemoryFs`] answers them
//! from a map so tests never touch the disk.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// What a path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory
    Directory,
    /// A regular file (or anything else that is not a directory)
    File,
}

/// Read-only view of a tree: enough to walk templates.
pub trait ReadFileSystem {
    /// Kind of entry at `path`, or `None` when nothing exists there.
    fn kind(&self, path: &Path) -> io::Result<Option<EntryKind>>;

    /// Names of the entries directly inside `dir`, sorted.
    fn list(&self, dir: &Path) -> io::Result<Vec<OsString>>;

    /// Full contents of the file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> io::Result<bool> {
        Ok(self.kind(path)?.is_some())
    }

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        String::from_utf8(self.read(path)?)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Writable storage for destination trees.
pub trait FileSystem: ReadFileSystem {
    /// Replace the file at `path` with `contents`. The parent must exist.
    fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Create `path` and every missing ancestor as directories.
    fn create_dir_all(&mut self, path: &Path) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFs;

impl ReadFileSystem for DiskFs {
    fn kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(Some(EntryKind::Directory)),
            Ok(_) => Ok(Some(EntryKind::File)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn list(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let mut names = std::fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

impl FileSystem for DiskFs {
    fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(Vec<u8>),
}

/// In-memory filesystem for tests.
///
/// Behaves like a disk for the operations the engines use: writes fail when the
/// parent directory is missing, and paths registered with
/// [`MemoryFs::deny_writes`] fail with `PermissionDenied`.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    nodes: BTreeMap<PathBuf, Node>,
    denied: BTreeSet<PathBuf>,
}

impl MemoryFs {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, creating its ancestors.
    pub fn with_file(mut self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.insert_dirs(parent);
        }
        self.nodes
            .insert(path.to_path_buf(), Node::File(contents.as_ref().to_vec()));
        self
    }

    /// Insert an empty directory, creating its ancestors.
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.insert_dirs(path.as_ref());
        self
    }

    /// Make every write or directory creation at `path` fail.
    pub fn deny_writes(mut self, path: impl AsRef<Path>) -> Self {
        self.denied.insert(path.as_ref().to_path_buf());
        self
    }

    /// Contents of a file, if one exists at `path`.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<&[u8]> {
        match self.nodes.get(path.as_ref()) {
            Some(Node::File(bytes)) => Some(bytes),
            _ => None,
        }
    }

    /// All file paths, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.nodes
            .iter()
            .filter(|(_, node)| matches!(node, Node::File(_)))
            .map(|(path, _)| path.clone())
            .collect()
    }

    fn insert_dirs(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }

    fn check_allowed(&self, path: &Path) -> io::Result<()> {
        if self.denied.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }
        Ok(())
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file or directory: {}", path.display()),
    )
}

impl ReadFileSystem for MemoryFs {
    fn kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        Ok(self.nodes.get(path).map(|node| match node {
            Node::Dir => EntryKind::Directory,
            Node::File(_) => EntryKind::File,
        }))
    }

    fn list(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        match self.nodes.get(dir) {
            Some(Node::Dir) => {}
            Some(Node::File(_)) => {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!("not a directory: {}", dir.display()),
                ))
            }
            None => return Err(not_found(dir)),
        }

        let mut names: Vec<OsString> = self
            .nodes
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name().map(|n| n.to_os_string()))
            .collect();
        names.sort();
        Ok(names)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        match self.nodes.get(path) {
            Some(Node::File(bytes)) => Ok(bytes.clone()),
            Some(Node::Dir) => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("is a directory: {}", path.display()),
            )),
            None => Err(not_found(path)),
        }
    }
}

impl FileSystem for MemoryFs {
    fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.check_allowed(path)?;
        let parent_is_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                matches!(self.nodes.get(parent), Some(Node::Dir))
            }
            _ => true,
        };
        if !parent_is_dir {
            return Err(not_found(path));
        }
        if matches!(self.nodes.get(path), Some(Node::Dir)) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("is a directory: {}", path.display()),
            ));
        }
        self.nodes
            .insert(path.to_path_buf(), Node::File(contents.to_vec()));
        Ok(())
    }

    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        for ancestor in path.ancestors() {
            self.check_allowed(ancestor)?;
            if let Some(Node::File(_)) = self.nodes.get(ancestor) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("file exists: {}", ancestor.display()),
                ));
            }
        }
        self.insert_dirs(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fs_lists_direct_children_sorted() {
        let fs = MemoryFs::new()
            .with_file("/t/b.md", "b")
            .with_file("/t/a.md", "a")
            .with_file("/t/docs/vision.md", "v");

        let names = fs.list(Path::new("/t")).unwrap();
        assert_eq!(names, vec!["a.md", "b.md", "docs"]);
    }

    #[test]
    fn test_memory_fs_write_requires_parent() {
        let mut fs = MemoryFs::new().with_dir("/dest");
        assert!(fs.write(Path::new("/dest/x.md"), b"x").is_ok());

        let err = fs.write(Path::new("/dest/missing/x.md"), b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_memory_fs_create_dir_all_builds_ancestors() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all(Path::new("/a/b/c")).unwrap();
        assert_eq!(fs.kind(Path::new("/a")).unwrap(), Some(EntryKind::Directory));
        assert_eq!(fs.kind(Path::new("/a/b/c")).unwrap(), Some(EntryKind::Directory));
        assert_eq!(fs.kind(Path::new("/a/b/d")).unwrap(), None);
    }

    #[test]
    fn test_memory_fs_denied_write() {
        let mut fs = MemoryFs::new().with_dir("/dest").deny_writes("/dest/x.md");
        let err = fs.write(Path::new("/dest/x.md"), b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_read_to_string_rejects_invalid_utf8() {
        let fs = MemoryFs::new().with_file("/bin.dat", [0xff, 0xfe]);
        let err = fs.read_to_string(Path::new("/bin.dat")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_disk_fs_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut fs = DiskFs;
        let nested = dir.path().join("docs");
        fs.create_dir_all(&nested).unwrap();
        fs.write(&nested.join("vision.md"), b"# Vision").unwrap();

        assert_eq!(fs.kind(&nested).unwrap(), Some(EntryKind::Directory));
        assert_eq!(fs.read(&nested.join("vision.md")).unwrap(), b"# Vision");
        assert_eq!(fs.kind(&dir.path().join("nope")).unwrap(), None);
        assert_eq!(fs.list(dir.path()).unwrap(), vec!["docs"]);
    }
}
