//! Common types used throughout the newswire loader
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A flattened article: a flat mapping from dot-joined path strings to
/// leaf values. Produced by [`crate::flatten::flatten`].
pub type Record = JsonObject;

/// An ordered group of records emitted together to the consumer.
///
/// Bounded by the configured batch size, except possibly the final batch
/// of a page, which may be shorter.
pub type Batch = Vec<Record>;
