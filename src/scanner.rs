use crate::error::{Error, Result};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory scanner for collecting the source files of one folder.
///
/// The `FileScanner` lists the files directly inside a directory (it does not
/// descend into sub-directories) and reads each of them as UTF-8 text. Hidden
/// entries (those starting with `.`) are skipped. Files are returned sorted by
/// name so that repeated runs over the same directory see the same order.
///
/// # Example
///
/// ```no_run
/// use apidoc_from_decorators::scanner::FileScanner;
/// use std::path::PathBuf;
///
/// let scanner = FileScanner::new(PathBuf::from("./src/users"));
/// let result = scanner.scan().unwrap();
/// println!("Found {} source files", result.files.len());
/// ```
pub struct FileScanner {
    root_path: PathBuf,
}

/// A source file read from the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name including its extension (e.g. `users.controller.ts`)
    pub file_name: String,
    /// File name without its final extension (e.g. `users.controller`)
    pub base_name: String,
    /// Full text of the file
    pub content: String,
}

impl SourceFile {
    /// Creates a source file, deriving the base name from the file name.
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let base_name = Path::new(&file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| file_name.clone());

        Self {
            file_name,
            base_name,
            content: content.into(),
        }
    }
}

/// Result of directory scanning operation.
///
/// Contains the files that could be read and any warnings encountered during scanning.
pub struct ScanResult {
    /// Readable files, sorted by file name
    pub files: Vec<SourceFile>,
    /// Names of files that exist but could not be read as UTF-8 text
    pub unreadable: Vec<String>,
    /// Warning messages for any issues encountered (e.g., unreadable files)
    pub warnings: Vec<String>,
}

impl FileScanner {
    /// Creates a new `FileScanner` for the specified directory.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Lists and reads the files of the directory.
    ///
    /// Files that cannot be read are logged, recorded in
    /// [`ScanResult::unreadable`] and skipped; scanning continues.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryRead`] if the directory itself cannot be
    /// listed (missing, not a directory, or inaccessible).
    pub fn scan(&self) -> Result<ScanResult> {
        let mut files = Vec::new();
        let mut unreadable = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path).max_depth(1).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(Error::DirectoryRead {
                        path: self.root_path.clone(),
                        source: e.into(),
                    });
                }
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                    continue;
                }
            };

            if entry.depth() == 0 {
                if !entry.path().is_dir() {
                    return Err(Error::DirectoryRead {
                        path: self.root_path.clone(),
                        source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
                    });
                }
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().to_string();
            if file_name.starts_with('.') || !entry.path().is_file() {
                debug!("Skipping entry: {}", entry.path().display());
                continue;
            }

            match fs::read_to_string(entry.path()) {
                Ok(content) => files.push(SourceFile::new(file_name, content)),
                Err(e) => {
                    let warning = format!("Failed to read file {}: {}", entry.path().display(), e);
                    warn!("{}", warning);
                    warnings.push(warning);
                    unreadable.push(file_name);
                }
            }
        }

        debug!(
            "Scanned {}: {} readable, {} unreadable",
            self.root_path.display(),
            files.len(),
            unreadable.len()
        );

        Ok(ScanResult {
            files,
            unreadable,
            warnings,
        })
    }
}
