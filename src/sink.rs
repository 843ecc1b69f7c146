//! Destinations for generated files.

use crate::serializer::write_to_file;
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Accepts generated files by path relative to the output root.
pub trait OutputSink {
    /// Persists `content` at `relative_path`, replacing any previous content.
    fn write(&mut self, relative_path: &Path, content: &str) -> Result<()>;
}

/// Writes generated files below a root directory on disk, creating
/// directories as needed.
pub struct FileSystemSink {
    root: PathBuf,
}

impl FileSystemSink {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for FileSystemSink {
    fn write(&mut self, relative_path: &Path, content: &str) -> Result<()> {
        write_to_file(content, &self.root.join(relative_path))
    }
}

/// Keeps generated files in memory, ordered by path.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, relative_path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(relative_path.as_ref()).map(String::as_str)
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, relative_path: &Path, content: &str) -> Result<()> {
        self.files.insert(relative_path.to_path_buf(), content.to_string());
        Ok(())
    }
}
