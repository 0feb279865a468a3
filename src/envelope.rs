//! The JSON envelope wrapping every Tumblr API response.
//!
//! ```json
//! {"meta": {"status": 200, "msg": "OK"}, "response": { ... }}
//! ```

use serde::{Deserialize, Serialize};

/// The API-level outcome reported by the envelope's `meta` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// API status code, usually mirroring the HTTP status. `0` when absent.
    #[serde(default)]
    pub status: i32,

    /// Human-readable status message.
    #[serde(default)]
    pub msg: String,
}

impl Meta {
    /// Returns `true` if the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The decoded wire envelope, generic over the payload shape.
///
/// A missing `meta` decodes as [`Meta::default`]. A missing or `null`
/// `response` decodes as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Status metadata.
    #[serde(default)]
    pub meta: Meta,

    /// The payload, bound to the caller's target type.
    pub response: Option<T>,
}
