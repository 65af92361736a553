//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Username availability checker backed by a Bloom filter
#[derive(Parser, Debug)]
#[command(name = "username-check")]
#[command(about = "Check and register usernames against a Bloom-filtered registry")]
pub struct Args {
    /// JSON config file (missing fields use defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Text file with one registered username per line
    #[arg(long, global = true)]
    pub names_file: Option<PathBuf>,

    /// Minimum registry population; shortfalls are seeded
    #[arg(long, global = true)]
    pub min_registered: Option<usize>,

    /// Bloom filter size in bits
    #[arg(long, global = true)]
    pub filter_bits: Option<usize>,

    /// Bit positions per name
    #[arg(long, global = true)]
    pub hash_count: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check whether a username is available
    Check { name: String },

    /// Register a username
    Register { name: String },

    /// Run the fixed battery of edge-case inputs
    EdgeCases,

    /// Time filter-backed checks against a linear scan
    Compare {
        /// Existing and novel lookups each
        #[arg(long)]
        samples: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show filter load and check counters
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read commands from stdin (default)
    Interactive,
}
