//! Post-link packaging step for SPL (software product line) builds.
//!
//! The SPL build tree keeps each build under
//! `<project>/build/<flavor>/<subsystem>/<build_kit>/`. After linking, this
//! crate reads the KConfig `autoconf.json` of that build to learn which linker
//! outputs exist, then bundles them into archives:
//!
//! ```text
//! build/CustA/Disco/prod/
//!     include/generated/autoconf.json   (input: features.LINK_OUT_FILE_*)
//!     main.exe, main.map, ...           (input: linker outputs)
//!     main.zip                          (output: artifacts + readme.txt)
//!     main.7z                           (output: same entries, 7z)
//!     my_extension.cmake                (output of generate mode)
//! ```
//!
//! # Modules
//!
//! - [`variant`] / [`paths`] - build-tree addressing
//! - [`config`] - autoconf JSON loading
//! - [`artifacts`] - expected linker outputs
//! - [`archive`] - zip and 7z writers
//! - [`packer`] - the [`Extension`] trait and [`BinaryPacker`]
//! - [`cmake`] / [`snippet`] - CMake fragment generation
//!
//! # Example
//!
//! ```rust,ignore
//! use spl_packer::{BinaryPacker, Extension, SplPaths, Variant};
//!
//! let variant: Variant = "CustA/Disco".parse()?;
//! let packer = BinaryPacker::load(SplPaths::new(".", variant, "prod"))?;
//! let report = packer.run()?;
//! println!("{}", report.zip_path.display());
//! ```

pub mod archive;
pub mod artifacts;
pub mod cmake;
pub mod config;
pub mod error;
pub mod packer;
pub mod paths;
pub mod snippet;
pub mod variant;

pub use artifacts::LinkerArtifacts;
pub use config::PackagingConfig;
pub use error::{PackError, Result};
pub use packer::{pack, BinaryPacker, Extension, PackageReport};
pub use paths::SplPaths;
pub use variant::Variant;
