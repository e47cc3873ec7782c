use std::path::{Path, PathBuf};

use crate::config::PackagingConfig;

/// Extension the build system gives the primary linker output.
pub const PRIMARY_BINARY_EXTENSION: &str = "exe";

/// Files the linker is expected to have produced in a build directory.
#[derive(Debug, Clone)]
pub struct LinkerArtifacts {
    build_dir: PathBuf,
    basename: String,
    extensions: Vec<String>,
}

impl LinkerArtifacts {
    pub fn new(
        build_dir: impl Into<PathBuf>,
        basename: impl Into<String>,
        extensions: Vec<String>,
    ) -> Self {
        Self {
            build_dir: build_dir.into(),
            basename: basename.into(),
            extensions,
        }
    }

    pub fn from_config(build_dir: impl Into<PathBuf>, config: &PackagingConfig) -> Self {
        Self::new(
            build_dir,
            config.output_basename.clone(),
            config.output_extensions.clone(),
        )
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// `<build_dir>/<basename>.<extension>`; existence is not checked.
    pub fn generated_file(&self, extension: &str) -> PathBuf {
        self.build_dir.join(format!("{}.{}", self.basename, extension))
    }

    /// One path per configured extension, in configuration order.
    pub fn generated_artifacts(&self) -> Vec<PathBuf> {
        self.extensions
            .iter()
            .map(|ext| self.generated_file(ext))
            .collect()
    }

    /// The binary that names the produced archives.
    ///
    /// Always the `.exe` output, regardless of the configured extension list.
    pub fn primary_binary(&self) -> PathBuf {
        self.generated_file(PRIMARY_BINARY_EXTENSION)
    }
}
