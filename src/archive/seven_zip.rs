use std::fs::File;
use std::path::Path;

use sevenz_rust::{SevenZArchiveEntry, SevenZWriter};
use tracing::debug;

use super::{write_atomically, ArchiveEntry, EntrySource};
use crate::error::{PackError, Result};

/// Write `entries` into an LZMA2-compressed 7z archive at `dest`.
pub fn write_7z(dest: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    write_atomically(dest, |tmp| write_entries(tmp, dest, entries))
}

fn write_entries(tmp: &Path, dest: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    let sevenz_err = |message: String| PackError::SevenZip {
        path: dest.to_path_buf(),
        message,
    };

    let mut writer = SevenZWriter::create(tmp).map_err(|e| sevenz_err(e.to_string()))?;

    for entry in entries {
        debug!(archive = %dest.display(), entry = %entry.name, "adding 7z entry");
        let mut archive_entry = SevenZArchiveEntry::new();
        archive_entry.name = entry.name.clone();
        archive_entry.has_stream = true;
        match &entry.source {
            EntrySource::File(path) => {
                let src = File::open(path).map_err(|e| PackError::io(path, e))?;
                writer
                    .push_archive_entry(archive_entry, Some(src))
                    .map_err(|e| sevenz_err(e.to_string()))?;
            }
            EntrySource::Bytes(bytes) => {
                writer
                    .push_archive_entry(archive_entry, Some(bytes.as_slice()))
                    .map_err(|e| sevenz_err(e.to_string()))?;
            }
        }
    }

    writer.finish().map_err(|e| sevenz_err(e.to_string()))?;
    Ok(())
}
