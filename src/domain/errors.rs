use thiserror::Error;

/// Workspace enumeration failed; the catalog request yields no entries.
#[derive(Error, Debug)]
pub enum FileSystemError {
    #[error("workspace root is not a directory: {0}")]
    InvalidRoot(String),

    #[error("failed to enumerate workspace files: {0}")]
    EnumerationFailed(String),
}

/// Writing the combined artifact failed. The save has no other side effect.
#[derive(Error, Debug)]
#[error("failed to save file: {message}")]
pub struct PersistenceError {
    pub message: String,
}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        PersistenceError {
            message: err.to_string(),
        }
    }
}
