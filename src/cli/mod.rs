//! Command-line interface for tokensub
//!
//! Loads the replacement config, rewrites the tree and prints the run report.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tokensub::config::load_replacements;
use tokensub::render::{write_replacements, write_summary};
use tokensub::TreeRewriter;

const FORMAT_HINT: &str = "Config file should contain lines in the format: KEY=value";

/// Replace __KEY__ tokens in every text file under a directory
#[derive(Parser)]
#[command(name = "tokensub")]
#[command(author, version, about, long_about = None)]
#[command(after_help = FORMAT_HINT)]
pub struct Cli {
    /// Config file of KEY=value lines
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Directory to rewrite (defaults to the current directory)
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Report files that would change without writing them
    #[arg(long)]
    dry_run: bool,

    /// Descend into symlinked directories
    #[arg(long)]
    follow_symlinks: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => {
            err.print()?;
            eprintln!("{}", FORMAT_HINT);
            return Ok(ExitCode::FAILURE);
        }
    };

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let replacements = load_replacements(&cli.config)?;
    if replacements.is_empty() {
        tracing::warn!("No replacements found in config file");
        return Ok(ExitCode::SUCCESS);
    }

    if !cli.root.is_dir() {
        anyhow::bail!("Root is not a directory: {}", cli.root.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_replacements(&mut out, &replacements)?;

    let summary = TreeRewriter::new(&cli.root)
        .dry_run(cli.dry_run)
        .follow_symlinks(cli.follow_symlinks)
        .run(&replacements, &mut out)
        .with_context(|| format!("Failed to rewrite {}", cli.root.display()))?;

    write_summary(&mut out, &summary)?;
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
