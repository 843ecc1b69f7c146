//! Summary of one generation run, serializable to YAML or JSON.

use serde::{Deserialize, Serialize};

/// Everything a run produced and skipped for one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Directory name the run was performed for
    pub directory: String,
    /// Files that produced a documentation entry, in processing order
    pub generated: Vec<GeneratedFile>,
    /// Files that produced no output
    pub skipped: Vec<SkippedFile>,
    /// Relative path of the index file, if one was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
}

/// A documentation entry written for one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub source: String,
    pub output: String,
    pub constant_name: String,
    pub key: String,
    pub responses: Vec<String>,
    pub params: usize,
    pub queries: usize,
    pub auth: bool,
}

/// A source file that produced no output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub source: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No recognized annotation in the file
    NoAnnotations,
    /// The file could not be read as UTF-8 text
    Unreadable,
    /// The entry would be written over the directory index
    IndexNameCollision,
}

impl RunReport {
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            ..Default::default()
        }
    }

    pub fn skip(&mut self, source: impl Into<String>, reason: SkipReason) {
        self.skipped.push(SkippedFile {
            source: source.into(),
            reason,
        });
    }
}
