//! Command-line argument definitions for the SLC CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A subcommand selects the action; configuration file
//! selection and logging verbosity apply to every subcommand.

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// Command-line arguments for the SLC scene tool
#[derive(Parser, Debug)]
#[command(name = "slc", author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse and validate an SLC file, then print its shapes.
    Check(CheckArgs),
    /// Write a starter SLC file for a new list.
    New(NewArgs),
}

/// Arguments for `slc check`
#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Path to the input SLC file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Output format; overrides the configuration file
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Do not require the list name to match the file name
    #[arg(long)]
    pub no_filename_check: bool,
}

/// Arguments for `slc new`
#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Name of the new list; also the file name
    pub name: String,

    /// Directory to create the file in
    #[arg(short, long, default_value = ".")]
    pub dir: String,
}
