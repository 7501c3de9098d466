//! CLI commands for the RFC tools.

pub mod find_unlinked;
pub mod new;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::scaffold::Category;

/// Maintenance tools for an RFC repository
#[derive(Parser)]
#[command(name = "rfc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Repository root
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List RFCs that are not linked from the index, exiting 1 if any
    FindUnlinked {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Create a branch, pull request and document for a new RFC
    New {
        /// RFC title (prompted if omitted)
        #[arg(long)]
        name: Option<String>,

        /// RFC type (prompted if omitted)
        #[arg(long, value_enum)]
        category: Option<Category>,
    },
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
