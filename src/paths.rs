//! Canonical SPL build-tree locations.

use std::path::{Path, PathBuf};

use crate::variant::Variant;

const KCONFIG_JSON: &str = "include/generated/autoconf.json";
const GENERATED_CMAKE_FILE: &str = "my_extension.cmake";

/// Inputs that identify one build output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplPaths {
    pub project_root_dir: PathBuf,
    pub variant: Variant,
    pub build_kit: String,
}

impl SplPaths {
    pub fn new(
        project_root_dir: impl Into<PathBuf>,
        variant: Variant,
        build_kit: impl Into<String>,
    ) -> Self {
        Self {
            project_root_dir: project_root_dir.into(),
            variant,
            build_kit: build_kit.into(),
        }
    }

    /// `<root>/build/<flavor>/<subsystem>/<build_kit>`
    pub fn build_dir(&self) -> PathBuf {
        build_dir(&self.project_root_dir, &self.variant, &self.build_kit)
    }

    /// Autoconf JSON written by the KConfig step.
    pub fn kconfig_json(&self) -> PathBuf {
        self.build_dir().join(KCONFIG_JSON)
    }

    /// CMake fragment emitted in generate mode.
    pub fn generated_cmake_file(&self) -> PathBuf {
        self.build_dir().join(GENERATED_CMAKE_FILE)
    }
}

pub fn build_dir(root: &Path, variant: &Variant, build_kit: &str) -> PathBuf {
    root.join("build")
        .join(&variant.flavor)
        .join(&variant.subsystem)
        .join(build_kit)
}
