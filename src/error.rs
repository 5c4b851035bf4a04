use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SlsError {
    #[error("cannot open directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read metadata of {}: {source}", .path.display())]
    MetadataUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
}
impl SlsError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SlsError::DirectoryUnreadable {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn metadata(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SlsError::MetadataUnavailable {
            path: path.into(),
            source,
        }
    }
    /// The path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            SlsError::DirectoryUnreadable { path, .. } => path,
            SlsError::MetadataUnavailable { path, .. } => path,
        }
    }
}
