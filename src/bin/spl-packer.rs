use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spl_packer::{BinaryPacker, Extension, SplPaths, Variant};
use tracing_subscriber::EnvFilter;

/// Package binary and readme into zip and 7z files
#[derive(Parser)]
#[command(name = "spl-packer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Project root directory
    #[arg(long = "project_root_dir", default_value = ".")]
    project_root_dir: PathBuf,

    /// Variant name, e.g. CustA/Disco
    #[arg(long)]
    variant: Variant,

    /// Build kit name, e.g. prod
    #[arg(long = "build_kit")]
    build_kit: String,

    /// Run the packer (default)
    #[arg(long, conflicts_with = "generate")]
    run: bool,

    /// Generate a cmake file instead of packaging
    #[arg(long)]
    generate: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let spl_paths = SplPaths::new(
        &cli.project_root_dir,
        cli.variant.clone(),
        cli.build_kit.as_str(),
    );
    let packer = BinaryPacker::load(spl_paths).with_context(|| {
        format!(
            "loading packaging config for '{}' ({})",
            cli.variant, cli.build_kit
        )
    })?;

    if cli.generate && !cli.run {
        packer
            .generate()
            .with_context(|| format!("generating cmake file for '{}'", cli.variant))?;
    } else {
        packer
            .run()
            .with_context(|| format!("packaging artifacts for '{}'", cli.variant))?;
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
