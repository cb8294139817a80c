//! Page response types
//!
//! The search API wraps each page in an envelope:
//!
//! ```text
//! { "status": "OK",
//!   "response": { "meta": { "hits": 25 }, "docs": [ ... ] } }
//! ```
//!
//! [`PageResponse`] navigates that envelope without a rigid schema, the
//! same way stop-condition fields are probed: an absent or mistyped field
//! reads as `None` rather than failing the whole decode. Only a body that
//! is not JSON at all is an error (raised upstream by the HTTP layer).

use crate::types::JsonValue;
use serde::Deserialize;

/// Status value marking a usable page
pub const STATUS_OK: &str = "OK";

/// Number of articles the API returns per page; the hit count is divided
/// by this to derive the page count.
pub const API_PAGE_SIZE: u64 = 10;

/// The decoded API response for one page
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct PageResponse {
    body: JsonValue,
}

impl PageResponse {
    /// Wrap a decoded response body
    pub fn new(body: JsonValue) -> Self {
        Self { body }
    }

    /// The top-level `status` field, if present and a string
    pub fn status(&self) -> Option<&str> {
        self.body.get("status").and_then(JsonValue::as_str)
    }

    /// Whether the page carries the expected `"OK"` status
    pub fn is_ok(&self) -> bool {
        self.status() == Some(STATUS_OK)
    }

    /// The nested `response.meta.hits` count, if present
    pub fn hits(&self) -> Option<u64> {
        self.body
            .get("response")?
            .get("meta")?
            .get("hits")?
            .as_u64()
    }

    /// The `response.docs` article array, if present
    pub fn docs(&self) -> Option<&[JsonValue]> {
        self.body
            .get("response")?
            .get("docs")?
            .as_array()
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_envelope() {
        let response = PageResponse::new(json!({
            "status": "OK",
            "response": {
                "meta": { "hits": 25 },
                "docs": [ { "_id": "a" }, { "_id": "b" } ]
            }
        }));

        assert!(response.is_ok());
        assert_eq!(response.status(), Some("OK"));
        assert_eq!(response.hits(), Some(25));
        assert_eq!(response.docs().map(<[JsonValue]>::len), Some(2));
    }

    #[test]
    fn test_missing_fields_read_as_none() {
        let response = PageResponse::new(json!({}));
        assert_eq!(response.status(), None);
        assert!(!response.is_ok());
        assert_eq!(response.hits(), None);
        assert!(response.docs().is_none());
    }

    #[test]
    fn test_mistyped_fields_read_as_none() {
        let response = PageResponse::new(json!({
            "status": 200,
            "response": { "meta": { "hits": "many" }, "docs": "nope" }
        }));
        assert_eq!(response.status(), None);
        assert_eq!(response.hits(), None);
        assert!(response.docs().is_none());
    }

    #[test]
    fn test_non_ok_status() {
        let response = PageResponse::new(json!({ "status": "ERROR" }));
        assert_eq!(response.status(), Some("ERROR"));
        assert!(!response.is_ok());
    }
}
