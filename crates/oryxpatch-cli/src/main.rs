//! Command-line driver for the keymap patcher.
//!
//! Two required positional arguments: the layout directory holding the
//! exported `keymap.c`, and the path to the custom callback source the
//! injected wrapper will `#include`. Progress lines go to the console at
//! `info` level by default; `RUST_LOG` raises or lowers verbosity.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use oryxpatch::{PatchOptions, patch_keymap};
use tracing_subscriber::EnvFilter;

/// Patch an Oryx-exported keymap.c in place
#[derive(Parser, Debug)]
#[command(name = "oryxpatch", version, about)]
struct CliArgs {
    /// Layout directory containing keymap.c
    #[arg(value_name = "LAYOUT_DIR")]
    layout_dir: PathBuf,

    /// Custom callback source file referenced by the injected wrapper
    #[arg(value_name = "CUSTOM_CODE")]
    custom_code: PathBuf,
}

fn run(args: &CliArgs) -> anyhow::Result<()> {
    patch_keymap(
        &args.layout_dir,
        &args.custom_code,
        &PatchOptions::default(),
    )
    .with_context(|| format!("failed to patch layout in {}", args.layout_dir.display()))
}

fn main() -> ExitCode {
    // Exit 1 on bad arguments, not clap's default 2.
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
