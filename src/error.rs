//! Error types for the packer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving, loading, or packaging build outputs.
#[derive(Debug, Error)]
pub enum PackError {
    #[error(
        "malformed variant '{input}': expected 'flavor/subsystem' with exactly one '/' and no '.' or '..' parts"
    )]
    MalformedVariant { input: String },

    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("malformed configuration '{}': {message}", path.display())]
    ConfigFormat { path: PathBuf, message: String },

    #[error("build artifact missing: {}", path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("artifact path has no usable file name: {}", path.display())]
    InvalidArtifactName { path: PathBuf },

    #[error("build artifact '{}' clashes with generated archive entry '{name}'", path.display())]
    EntryNameClash { path: PathBuf, name: String },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed writing zip archive '{}': {source}", path.display())]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    // sevenz-rust errors are flattened to text so PackError stays Send + Sync.
    #[error("failed writing 7z archive '{}': {message}", path.display())]
    SevenZip { path: PathBuf, message: String },
}

impl PackError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PackError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn config_format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        PackError::ConfigFormat {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PackError>;
