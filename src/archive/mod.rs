//! Archive writers for packaged build outputs.
//!
//! - [`zip_file`] - the primary `.zip` archive
//! - [`seven_zip`] - the `.7z` byproduct with the same entries
//!
//! Both writers take the same flat list of [`ArchiveEntry`] values and write
//! through [`write_atomically`], so an archive only appears under its final
//! name once it has been written completely.

pub mod seven_zip;
pub mod zip_file;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{PackError, Result};

pub use seven_zip::write_7z;
pub use zip_file::write_zip;

/// Where an entry's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    /// Copied from a file on disk at write time.
    File(PathBuf),
    /// Generated content (e.g. `readme.txt`).
    Bytes(Vec<u8>),
}

/// A single file inside an archive. Names are flat; no directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub source: EntrySource,
}

impl ArchiveEntry {
    /// Entry named after the file name of `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|part| part.to_str())
            .ok_or_else(|| PackError::InvalidArtifactName {
                path: path.to_path_buf(),
            })?;
        Ok(Self {
            name: name.to_string(),
            source: EntrySource::File(path.to_path_buf()),
        })
    }

    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            source: EntrySource::Bytes(bytes.into()),
        }
    }
}

/// Run `write` against a temporary sibling of `dest`, then rename it into
/// place. The temporary file is removed if `write` fails.
pub(crate) fn write_atomically<F>(dest: &Path, write: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let file_name = dest
        .file_name()
        .and_then(|part| part.to_str())
        .unwrap_or("archive");
    let tmp = dest.with_file_name(tmp_name(&format!(".{file_name}")));

    if let Err(e) = write(&tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    fs::rename(&tmp, dest).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        PackError::io(dest, e)
    })
}

fn tmp_name(prefix: &str) -> String {
    let n = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    format!("{prefix}.tmp-{n}")
}
