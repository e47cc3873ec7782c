//! End-to-end tests for the `spl-packer` binary.
//!
//! Each test builds a throwaway SPL project tree and drives the binary the
//! way the CMake custom command does.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const VARIANT: &str = "CustA/Disco";
const BUILD_KIT: &str = "prod";

struct Project {
    root: TempDir,
}

impl Project {
    fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    fn build_dir(&self) -> PathBuf {
        self.root.path().join("build/CustA/Disco/prod")
    }

    fn write_autoconf(&self, json: &str) {
        let path = self.build_dir().join("include/generated/autoconf.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, json).unwrap();
    }

    fn write_artifact(&self, name: &str, content: &[u8]) {
        fs::create_dir_all(self.build_dir()).unwrap();
        fs::write(self.build_dir().join(name), content).unwrap();
    }

    fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("spl-packer");
        cmd.arg("--project_root_dir")
            .arg(self.root.path())
            .args(["--variant", VARIANT, "--build_kit", BUILD_KIT]);
        cmd
    }
}

fn zip_names(path: &Path) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

#[test]
fn help_lists_flags() {
    cargo_bin_cmd!("spl-packer")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--project_root_dir"))
        .stdout(predicate::str::contains("--generate"));
}

#[test]
fn run_packages_configured_artifacts() {
    let project = Project::new();
    project.write_autoconf(r#"{"features": {"LINK_OUT_FILE_EXTENSIONS": "exe,map"}}"#);
    project.write_artifact("main.exe", b"firmware");
    project.write_artifact("main.map", b"map");

    project
        .cmd()
        .arg("--run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created archive:"))
        .stdout(predicate::str::contains("main.zip"));

    let zip_path = project.build_dir().join("main.zip");
    assert_eq!(
        zip_names(&zip_path),
        vec!["main.exe", "main.map", "readme.txt"]
    );
    assert!(project.build_dir().join("main.7z").is_file());
}

#[test]
fn run_is_the_default_mode() {
    let project = Project::new();
    project.write_autoconf(r#"{"features": {}}"#);
    project.write_artifact("main.exe", b"firmware");

    project.cmd().assert().success();

    assert!(project.build_dir().join("main.zip").is_file());
    assert!(!project.build_dir().join("my_extension.cmake").exists());
}

#[test]
fn missing_artifact_fails_without_archive() {
    let project = Project::new();
    project.write_autoconf(r#"{"features": {"LINK_OUT_FILE_EXTENSIONS": "exe,map"}}"#);
    project.write_artifact("main.exe", b"firmware");

    project
        .cmd()
        .arg("--run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("build artifact missing"))
        .stderr(predicate::str::contains("main.map"));

    assert!(!project.build_dir().join("main.zip").exists());
    assert!(!project.build_dir().join("main.7z").exists());
}

#[test]
fn missing_config_fails() {
    let project = Project::new();

    project
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}

#[test]
fn malformed_config_fails() {
    let project = Project::new();
    project.write_autoconf(r#"{"LINK_OUT_FILE_BASENAME": "main"}"#);

    project
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed configuration"));
}

#[test]
fn generate_writes_identical_fragment_twice() {
    let project = Project::new();
    project.write_autoconf(r#"{"features": {"LINK_OUT_FILE_BASENAME": "spled"}}"#);
    let fragment = project.build_dir().join("my_extension.cmake");

    project
        .cmd()
        .arg("--generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating cmake file"));
    let first = fs::read(&fragment).unwrap();

    project.cmd().arg("--generate").assert().success();
    let second = fs::read(&fragment).unwrap();

    assert_eq!(first, second);
    let text = String::from_utf8(first).unwrap();
    assert!(text.contains("OUTPUT ${CMAKE_CURRENT_BINARY_DIR}/spled.zip"));
    assert!(text.contains("add_custom_target(artifact ALL"));
}

#[test]
fn run_and_generate_conflict() {
    let project = Project::new();
    project.write_autoconf(r#"{"features": {}}"#);

    project
        .cmd()
        .args(["--run", "--generate"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn malformed_variant_is_rejected() {
    let project = Project::new();

    cargo_bin_cmd!("spl-packer")
        .arg("--project_root_dir")
        .arg(project.root.path())
        .args(["--variant", "CustA/Disco/extra", "--build_kit", BUILD_KIT])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed variant"));
}

#[test]
fn backslash_variant_resolves_same_build_dir() {
    let project = Project::new();
    project.write_autoconf(r#"{"features": {}}"#);
    project.write_artifact("main.exe", b"firmware");

    cargo_bin_cmd!("spl-packer")
        .arg("--project_root_dir")
        .arg(project.root.path())
        .args(["--variant", "CustA\\Disco", "--build_kit", BUILD_KIT])
        .assert()
        .success();

    assert!(project.build_dir().join("main.zip").is_file());
}

#[test]
fn dot_segment_variant_is_rejected() {
    let project = Project::new();

    cargo_bin_cmd!("spl-packer")
        .arg("--project_root_dir")
        .arg(project.root.path())
        .args(["--variant", "../Disco", "--build_kit", BUILD_KIT])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("malformed variant"));
}
