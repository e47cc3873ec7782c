use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::{write_atomically, ArchiveEntry, EntrySource};
use crate::error::{PackError, Result};

/// Write `entries` into a deflate-compressed zip at `dest`.
pub fn write_zip(dest: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    write_atomically(dest, |tmp| write_entries(tmp, dest, entries))
}

fn write_entries(tmp: &Path, dest: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    let zip_err = |source| PackError::Zip {
        path: dest.to_path_buf(),
        source,
    };

    let file = File::create(tmp).map_err(|e| PackError::io(tmp, e))?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        debug!(archive = %dest.display(), entry = %entry.name, "adding zip entry");
        writer
            .start_file(entry.name.as_str(), options)
            .map_err(zip_err)?;
        match &entry.source {
            EntrySource::File(path) => {
                let mut src = File::open(path).map_err(|e| PackError::io(path, e))?;
                io::copy(&mut src, &mut writer).map_err(|e| PackError::io(path, e))?;
            }
            EntrySource::Bytes(bytes) => {
                writer.write_all(bytes).map_err(|e| PackError::io(dest, e))?;
            }
        }
    }

    let mut inner = writer.finish().map_err(zip_err)?;
    inner.flush().map_err(|e| PackError::io(tmp, e))?;
    Ok(())
}
