//! Post-link packaging of linker outputs.
//!
//! [`BinaryPacker`] is the one [`Extension`] this tool ships: in run mode it
//! archives the configured linker artifacts plus a `readme.txt` into
//! `<basename>.zip` and a `<basename>.7z` byproduct; in generate mode it
//! writes the CMake fragment that schedules the run step after linking.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::archive::{write_7z, write_zip, ArchiveEntry};
use crate::artifacts::LinkerArtifacts;
use crate::config::PackagingConfig;
use crate::error::{PackError, Result};
use crate::paths::SplPaths;
use crate::snippet;

pub const README_NAME: &str = "readme.txt";

/// A build step the CMake build graph can call back into.
pub trait Extension {
    /// Emit the CMake fragment that wires the step into the build.
    fn generate(&self) -> Result<PathBuf>;

    /// Execute the step.
    fn run(&self) -> Result<PackageReport>;
}

/// What a successful packaging run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    pub zip_path: PathBuf,
    pub seven_zip_path: PathBuf,
    /// In-archive names, in write order.
    pub entries: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct BinaryPacker {
    spl_paths: SplPaths,
    config: PackagingConfig,
}

impl BinaryPacker {
    pub fn new(spl_paths: SplPaths, config: PackagingConfig) -> Self {
        Self { spl_paths, config }
    }

    /// Load the packaging config from the build's `autoconf.json`.
    pub fn load(spl_paths: SplPaths) -> Result<Self> {
        let config = PackagingConfig::from_json_file(&spl_paths.kconfig_json())?;
        Ok(Self::new(spl_paths, config))
    }

    pub fn config(&self) -> &PackagingConfig {
        &self.config
    }

    pub fn generated_cmake_file(&self) -> PathBuf {
        self.spl_paths.generated_cmake_file()
    }
}

impl Extension for BinaryPacker {
    fn generate(&self) -> Result<PathBuf> {
        let path = self.generated_cmake_file();
        println!("Generating cmake file {}", path.display());
        snippet::emit(&path, &self.config)?;
        Ok(path)
    }

    fn run(&self) -> Result<PackageReport> {
        let report = pack(&self.spl_paths.build_dir(), &self.config)?;
        println!("Created archive: {}", report.zip_path.display());
        Ok(report)
    }
}

/// Archive the configured linker artifacts found in `build_dir`.
///
/// Archives are named after the `.exe` primary binary even when `exe` is not
/// among the configured extensions. Every artifact must exist before anything
/// is written; otherwise this fails with [`PackError::ArtifactMissing`] and no
/// archive is created. An artifact named `readme.txt` fails the same way with
/// [`PackError::EntryNameClash`].
pub fn pack(build_dir: &Path, config: &PackagingConfig) -> Result<PackageReport> {
    let artifacts = LinkerArtifacts::from_config(build_dir, config);
    let primary = artifacts.primary_binary();
    let zip_path = primary.with_extension("zip");
    let seven_zip_path = primary.with_extension("7z");

    let entries = collect_entries(&artifacts, config)?;
    debug!(
        build_dir = %build_dir.display(),
        entries = ?entries.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
        "packaging linker artifacts"
    );

    write_zip(&zip_path, &entries)?;
    info!(path = %zip_path.display(), "wrote zip archive");
    write_7z(&seven_zip_path, &entries)?;
    info!(path = %seven_zip_path.display(), "wrote 7z archive");

    Ok(PackageReport {
        zip_path,
        seven_zip_path,
        entries: entries.into_iter().map(|e| e.name).collect(),
    })
}

fn collect_entries(
    artifacts: &LinkerArtifacts,
    config: &PackagingConfig,
) -> Result<Vec<ArchiveEntry>> {
    let mut seen = BTreeSet::new();
    let mut entries = Vec::new();

    for path in artifacts.generated_artifacts() {
        if !path.is_file() {
            return Err(PackError::ArtifactMissing { path });
        }
        let entry = ArchiveEntry::from_file(&path)?;
        // readme.txt is always generated; an artifact of that name cannot coexist.
        if entry.name == README_NAME {
            return Err(PackError::EntryNameClash {
                path,
                name: README_NAME.to_string(),
            });
        }
        if seen.insert(entry.name.clone()) {
            entries.push(entry);
        }
    }

    entries.push(ArchiveEntry::from_bytes(
        README_NAME,
        format!("{config}\n"),
    ));
    Ok(entries)
}
