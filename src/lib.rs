// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Newswire Loader
//!
//! A pagination-driven loader for newswire article search APIs.
//! Fetches paginated search results, flattens nested article JSON into
//! flat records, and yields them in fixed-size batches.
//!
//! ## Features
//!
//! - **Paginated extraction**: one bounded page loop driven by the API's
//!   reported hit count, clamped by a configurable page limit
//! - **Record flattening**: nested article objects become flat maps keyed
//!   by dot-joined paths, with an explicit-stack traversal that handles
//!   arbitrarily deep nesting
//! - **Batched output**: a lazy, single-consumer stream of fixed-size
//!   batches, flushing the partial remainder at each page boundary
//! - **Static schema**: a hand-authored catalog of the flattened article
//!   field paths
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::{pin_mut, StreamExt};
//! use newswire_loader::{ArticleSource, LoaderConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = LoaderConfig::builder()
//!         .base_url("https://api.example.com/svc/search/v2/articlesearch")
//!         .api_key("...")
//!         .query("Silicon Valley")
//!         .build();
//!
//!     let mut source = ArticleSource::new(config)?;
//!     source.connect(None)?;
//!
//!     let batches = source.batches(10);
//!     pin_mut!(batches);
//!     while let Some(batch) = batches.next().await {
//!         for record in batch? {
//!             // Process flattened records
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the loader
pub mod error;

/// Common types and type aliases
pub mod types;

/// Loader configuration
pub mod config;

/// HTTP client
pub mod http;

/// Nested-object flattening
pub mod flatten;

/// Static article field catalog
pub mod schema;

/// The article source loader
pub mod source;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::LoaderConfig;
pub use error::{Error, Result};
pub use flatten::flatten;
pub use source::ArticleSource;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
