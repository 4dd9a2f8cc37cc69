//! Debstage - Debian package staging tool.
//!
//! Sequences make dist, tar, dh_make and debuild to turn a source tree
//! into a Debian source/binary package, with the staging directory
//! bookkeeping handled in between.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use debstage::commands;
use debstage::config::Config;

#[derive(Parser)]
#[command(name = "debstage")]
#[command(about = "Stage a source tree into a Debian source/binary package")]
#[command(
    after_help = "QUICK START:\n  debstage preflight  Check host tools and project inputs\n  debstage build      Run the full staging pipeline\n  debstage clean      Remove staging artifacts"
)]
struct Cli {
    /// Project root to operate on (default: current directory)
    #[arg(short = 'C', long = "directory", global = true)]
    directory: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full staging pipeline (preflight, make dist, stage,
    /// extract, dh_make, overlay, debuild)
    Build {
        /// Skip the preflight checks
        #[arg(long)]
        skip_preflight: bool,
    },

    /// Run preflight checks (verify host tools and project inputs)
    Preflight {
        /// Fail if any checks fail (exit code 1)
        #[arg(long)]
        strict: bool,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },

    /// Remove the staging directory and stray dist tarballs
    Clean,
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show resolved configuration, package identity and staging layout
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let project_root = match cli.directory {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };
    let project_root = project_root
        .canonicalize()
        .with_context(|| format!("Project root {} is not accessible", project_root.display()))?;

    // Load .env if present
    dotenvy::from_path(project_root.join(".env")).ok();
    let config = Config::load(&project_root);

    match cli.command {
        Commands::Build { skip_preflight } => {
            commands::cmd_build(&project_root, &config, skip_preflight)?;
        }

        Commands::Preflight { strict } => {
            commands::cmd_preflight(&project_root, &config, strict)?;
        }

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
            };
            commands::cmd_show(&project_root, &config, show_target)?;
        }

        Commands::Clean => {
            commands::cmd_clean(&project_root, &config)?;
        }
    }

    Ok(())
}
