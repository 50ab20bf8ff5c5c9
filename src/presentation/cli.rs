//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - `resolve` and `routes` work offline on a descriptor file; `fetch` talks to the service

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// portal-nav - permission-scoped navigation menu tool
#[derive(Parser, Debug)]
#[command(name = "portal-nav")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit one JSON document instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./portal-nav.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the active branch and route decision for a location
    Resolve {
        /// Menu descriptor JSON file
        #[arg(short, long)]
        menu: PathBuf,

        /// Current location
        #[arg(short, long)]
        path: String,

        /// Toggle entries after syncing to the location (dotted index path, e.g. 1 or 1.0)
        #[arg(long = "toggle", value_name = "INDEX_PATH")]
        toggles: Vec<String>,

        /// Exit with status 2 when the location must be redirected
        #[arg(long)]
        strict: bool,
    },

    /// Fetch the menu for a product from the menu service
    Fetch {
        /// Product name (defaults to [api] product)
        #[arg(long)]
        product: Option<String>,

        /// Package name; resolved from the service when omitted
        #[arg(long)]
        package: Option<String>,

        /// Bearer token (defaults to PORTAL_NAV_TOKEN)
        #[arg(long)]
        token: Option<String>,

        /// Also resolve this location against the fetched menu
        #[arg(long)]
        path: Option<String>,

        /// Write the raw descriptor to this file
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,

        /// Serve the menu from a local directory instead of HTTP
        #[arg(long, value_name = "DIR")]
        from_dir: Option<PathBuf>,
    },

    /// List every route reachable from a menu descriptor
    Routes {
        /// Menu descriptor JSON file
        #[arg(short, long)]
        menu: PathBuf,
    },

    /// Parse icon markup and show the resulting descriptor
    Icon {
        /// SVG markup (escaped quotes are accepted)
        markup: String,
    },
}
