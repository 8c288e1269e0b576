//! CLI argument definitions.
//!
//! Flags only; the tool does one thing, so there are no subcommands.

use clap::Parser;
use std::path::PathBuf;

/// mwi-doctor - Diagnostic report for the MATLAB Integration for Jupyter.
#[derive(Debug, Parser)]
#[command(name = "mwi-doctor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Proxy log file to include in the report
    #[arg(long, env = "MWI_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Force plain framing, as if output were piped
    #[arg(long)]
    pub plain: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
