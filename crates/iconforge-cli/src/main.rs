//! `iconforge` command-line entry point
//!
//! Runs the backup, load and generate stages once, printing one progress
//! line per step to stdout. Diagnostics go to stderr through `tracing`.

use anyhow::Context;
use clap::{value_parser, Arg, Command};
use iconforge_core::{BackupOutcome, GeneratorConfig, IconGenerator, RunEvent};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("iconforge")
        .version(iconforge_core::VERSION)
        .about("Back up and regenerate app icon assets from a single source image")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("TOML file overriding the built-in source and assets paths"),
        )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Write the progress line for `event`, if it has one
fn print_event(out: &mut impl Write, event: &RunEvent<'_>) -> io::Result<()> {
    match event {
        RunEvent::BackupStarted => writeln!(out, "Backing up existing icons..."),
        RunEvent::Backup(BackupOutcome::Copied { role, .. }) => {
            writeln!(out, "Backed up {}", role.file_name())
        }
        RunEvent::Backup(BackupOutcome::Skipped { .. }) => Ok(()),
        RunEvent::SourceLoaded {
            dimensions: (width, height),
            ..
        } => writeln!(out, "Source Image Size: ({width}, {height})"),
        RunEvent::SourceMissing(path) => {
            writeln!(out, "Error: Source image not found at {}", path.display())
        }
        RunEvent::Saved(asset) => writeln!(out, "Saved {}", asset.path.display()),
    }
}

/// Run the pipeline once, printing each step to `out` as it completes
///
/// A missing source image is printed and is not an error.
fn run_and_report(generator: &IconGenerator, out: &mut impl Write) -> anyhow::Result<()> {
    let mut printed = Ok(());
    generator.run_with(|event| {
        if printed.is_ok() {
            printed = print_event(out, &event);
        }
    })?;
    printed.context("failed to write progress")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let matches = cli().get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    tracing::debug!(?config, "resolved configuration");
    let generator = IconGenerator::new(config)?;

    run_and_report(&generator, &mut io::stdout().lock())
}
