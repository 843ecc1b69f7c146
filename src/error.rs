use std::path::PathBuf;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the application
#[derive(Debug)]
pub enum Error {
    DirectoryRead { path: PathBuf, source: std::io::Error },
    InvalidDirectoryName(String),
    Prompt(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::DirectoryRead { path, source } => {
                write!(f, "Error reading directory {}: {}", path.display(), source)
            }
            Error::InvalidDirectoryName(name) => {
                write!(f, "Invalid directory name: {:?}", name)
            }
            Error::Prompt(msg) => write!(f, "Failed to read user input: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DirectoryRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}
