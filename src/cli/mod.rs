//! CLI module
//!
//! Command-line interface for running the loader.
//!
//! # Commands
//!
//! - `check` - Validate the configuration and connection request
//! - `schema` - Print the flattened article field catalog
//! - `read` - Fetch articles and print them in batches

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
