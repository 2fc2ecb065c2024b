// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "linkcheck-backends",
    version = "0.1.0",
    about = "Check resource links with a linkchecker picked by name",
    long_about = "linkcheck-backends resolves a linkchecker backend by name, falling back on \
                  the configured default, and uses it to check resource links."
)]
pub struct Cli {
    /// JSON settings file (e.g. {"default_linkchecker": "http"})
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Default linkchecker, overrides the settings file and
    /// LINKCHECKING_DEFAULT_LINKCHECKER
    #[arg(long = "default", global = true)]
    pub default_linkchecker: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List installed linkcheckers
    List,

    /// Check resource URLs with a linkchecker
    ///
    /// Example: linkcheck-backends check https://example.com/data.csv --linkchecker http
    Check {
        /// URLs of the resources to check
        #[arg(required = true)]
        urls: Vec<String>,

        /// Name of the linkchecker to use
        ///
        /// When no linkchecker with this name is installed, the configured
        /// default (--default, LINKCHECKING_DEFAULT_LINKCHECKER or the settings
        /// file) is used instead.
        #[arg(long, default_value = "http")]
        linkchecker: String,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },
}
