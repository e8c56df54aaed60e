//! Writer collaborators that store generated artifacts.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::emit::GeneratedArtifact;

/// Stores generated artifacts under an output root.
pub trait Writer {
    /// Where `artifact` would be written.
    fn target(&self, artifact: &GeneratedArtifact) -> PathBuf;

    /// Store `artifact`.
    fn write(&mut self, artifact: &GeneratedArtifact) -> io::Result<()>;
}

/// Writes artifacts into a directory, creating it as needed.
///
/// Files whose contents are unchanged are left alone so cargo does not
/// rebuild dependents.
#[derive(Debug, Clone)]
pub struct FsWriter {
    root: PathBuf,
}

impl FsWriter {
    /// Write into `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The output root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Writer for FsWriter {
    fn target(&self, artifact: &GeneratedArtifact) -> PathBuf {
        self.root.join(&artifact.file_name)
    }

    fn write(&mut self, artifact: &GeneratedArtifact) -> io::Result<()> {
        let path = self.target(artifact);

        if fs::read_to_string(&path).is_ok_and(|existing| existing == artifact.contents) {
            tracing::trace!(path = %path.display(), "fielder unchanged");
            return Ok(());
        }

        fs::create_dir_all(&self.root)?;
        fs::write(&path, &artifact.contents)
    }
}

/// Keeps artifacts in memory, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    files: BTreeMap<String, String>,
}

impl MemoryWriter {
    /// An empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents written under `file_name`.
    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.files.get(file_name).map(String::as_str)
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Stored file names, sorted.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl Writer for MemoryWriter {
    fn target(&self, artifact: &GeneratedArtifact) -> PathBuf {
        PathBuf::from(&artifact.file_name)
    }

    fn write(&mut self, artifact: &GeneratedArtifact) -> io::Result<()> {
        self.files
            .insert(artifact.file_name.clone(), artifact.contents.clone());
        Ok(())
    }
}
