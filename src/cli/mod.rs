pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Compare two .env files and see exactly what changed.
#[derive(Parser, Debug)]
#[command(name = "envdiff", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to alternative config file (default: .envdiff.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two files and display a table of all variables
    Diff {
        /// First file (side A)
        file_a: String,
        /// Second file (side B)
        file_b: String,
        /// Only show variables that differ or are missing on one side
        #[arg(long)]
        changed: bool,
    },

    /// Show only the per-status counts for a comparison
    Summary {
        /// First file (side A)
        file_a: String,
        /// Second file (side B)
        file_b: String,
    },

    /// Serialize a comparison to a machine-readable format
    Export {
        /// First file (side A)
        file_a: String,
        /// Second file (side B)
        file_b: String,
        /// Output format: csv, markdown, json, yaml, xml, text
        #[arg(long, short)]
        format: Option<String>,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<String>,
        /// Exclude equal variables from the exported rows
        #[arg(long)]
        changed: bool,
    },
}
