//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Newswire article loader CLI
#[derive(Parser, Debug)]
#[command(name = "newswire-loader")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Loader configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the configuration and connection request
    Check {
        /// Column to load incrementally from (always rejected; the source
        /// only supports full extraction)
        #[arg(long)]
        incremental_column: Option<String>,
    },

    /// Print the flattened article field catalog
    Schema,

    /// Fetch articles and print them in batches
    Read {
        /// Override the configured search query
        #[arg(long)]
        query: Option<String>,

        /// Override the configured API key
        #[arg(long)]
        api_key: Option<String>,

        /// Override the configured records-per-batch count
        #[arg(long)]
        batch_size: Option<usize>,

        /// Override the configured page limit
        #[arg(long)]
        page_limit: Option<u64>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
