//! Command-line argument definitions for the Placard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Placard layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input layout plan (TOML)
    #[arg(help = "Path to the layout plan file")]
    pub plan: String,

    /// Path to the output JSON file
    #[arg(short, long, default_value = "layout.json")]
    pub output: String,

    /// Path to engine configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
