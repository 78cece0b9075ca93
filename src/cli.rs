// src/cli.rs
//! CLI definitions for the Phoenix release fetcher
//!
//! This module contains the command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use phoenix_updater::ThemeKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "phoenix-updater")]
#[command(author = "Phoenix Contributors")]
#[command(version)]
#[command(about = "Fetch Phoenix platform releases and compatible theme bundles", long_about = None)]
pub struct Cli {
    /// Path to the updater configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress progress bars
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the latest platform release manifest
    Refresh,

    /// Download a platform core release archive
    FetchRelease {
        /// Release version to download (defaults to the latest known release)
        version: Option<String>,

        /// Refresh the release manifest before resolving the version
        #[arg(long)]
        refresh: bool,
    },

    /// Download the theme bundle compatible with a platform release
    FetchTheme {
        /// Which theme family to fetch
        #[arg(value_enum)]
        theme: ThemeArg,

        /// Platform version to match against (defaults to the latest known release)
        #[arg(long)]
        platform_version: Option<String>,
    },

    /// Fetch the latest release and compatible themes in one pass
    Update {
        /// Currently installed platform version; every newer release is fetched
        #[arg(long)]
        from: Option<String>,
    },

    /// Show the cached release manifest
    Status {
        /// Installed version to locate in the release feed
        #[arg(long)]
        current: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Theme family selector
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    /// Admin backend theme
    Admin,
    /// Default frontend theme
    Default,
}

impl From<ThemeArg> for ThemeKind {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Admin => ThemeKind::Admin,
            ThemeArg::Default => ThemeKind::Default,
        }
    }
}
