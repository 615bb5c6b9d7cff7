//! CLI argument definitions using clap
//!
//! Commands:
//! - coursedb menu (default when no subcommand is given)
//! - coursedb load [--file <path>]
//! - coursedb list [--file <path>]
//! - coursedb show [--file <path>] <COURSE>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// coursedb - a deterministic course catalog with an advisor shell
#[derive(Parser, Debug)]
#[command(name = "coursedb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive advisor menu
    Menu {
        /// Path to configuration file
        #[arg(long, default_value = "./coursedb.json")]
        config: PathBuf,
    },

    /// Load a course source once and report diagnostics
    Load {
        /// Path to configuration file
        #[arg(long, default_value = "./coursedb.json")]
        config: PathBuf,

        /// Course source file (overrides catalog_file from config)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Load a course source and print the sorted course list
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./coursedb.json")]
        config: PathBuf,

        /// Course source file (overrides catalog_file from config)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Load a course source and print one course with prerequisites
    Show {
        /// Path to configuration file
        #[arg(long, default_value = "./coursedb.json")]
        config: PathBuf,

        /// Course source file (overrides catalog_file from config)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Course number to describe, e.g. CSCI300
        course: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
