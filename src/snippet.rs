//! CMake fragment that hooks packaging into the build graph.
//!
//! The fragment declares a custom command producing `<basename>.zip` (with the
//! `.7z` as a byproduct) that re-runs this tool in run mode, and an `artifact`
//! target built by default that depends on it.

use std::path::Path;

use tracing::info;

use crate::cmake::{CMakeElement, CMakeFile, CustomCommand, CustomTarget};
use crate::config::PackagingConfig;
use crate::error::Result;

/// Program name CMake invokes for the post-link step.
pub const PACKER_PROGRAM: &str = "spl-packer";

/// Source location the custom command depends on, so editing the packer
/// re-triggers packaging.
pub const PACKER_SOURCE: &str = "${PROJECT_SOURCE_DIR}/modules/spl_packer/src/bin/spl-packer.rs";

pub const TARGET_NAME: &str = "artifact";

const HEADER: &str = "My Extension generated file";
const BINARY_DIR: &str = "${CMAKE_CURRENT_BINARY_DIR}";

/// Build the fragment for `config`, to be written at `path`.
pub fn render(path: &Path, config: &PackagingConfig) -> CMakeFile {
    let basename = &config.output_basename;
    let zip_output = format!("{BINARY_DIR}/{basename}.zip");

    let mut file = CMakeFile::new(path);
    file.add_element(CMakeElement::Comment(HEADER.to_string()))
        .add_element(CMakeElement::CustomCommand(CustomCommand {
            output: zip_output.clone(),
            byproducts: vec![format!("{BINARY_DIR}/{basename}.7z")],
            command: format!(
                "{PACKER_PROGRAM} --run --project_root_dir ${{CMAKE_SOURCE_DIR}} \
                 --variant ${{VARIANT}} --build_kit ${{BUILD_KIT}}"
            ),
            depends: vec![
                format!("{BINARY_DIR}/{basename}.exe"),
                PACKER_SOURCE.to_string(),
            ],
            comment: Some(format!("Generating {basename}.zip")),
        }))
        .add_element(CMakeElement::CustomTarget(CustomTarget {
            name: TARGET_NAME.to_string(),
            depends: vec![zip_output],
            all: true,
        }));
    file
}

/// Write the fragment to `path`, replacing any previous one.
pub fn emit(path: &Path, config: &PackagingConfig) -> Result<()> {
    render(path, config).to_file()?;
    info!(path = %path.display(), "wrote cmake fragment");
    Ok(())
}
