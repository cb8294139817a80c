//! HTTP client module
//!
//! A thin wrapper over reqwest for blocking-style sequential fetches:
//! one request at a time, no retries, no rate limiting. Non-success
//! statuses map to structured errors; transport failures propagate.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
