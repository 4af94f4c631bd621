//! Graph-specific error types

use serde::Deserialize;

/// Error information from a Microsoft Graph error body.
///
/// Graph wraps failures as `{"error": {"code": "...", "message": "...", "innerError": {...}}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphErrorDetail {
    /// The error code (e.g., "itemNotFound").
    pub code: String,
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
    /// Nested inner error, if any.
    #[serde(default, rename = "innerError")]
    pub inner_error: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct GraphErrorEnvelope {
    error: GraphErrorDetail,
}

impl GraphErrorDetail {
    /// Parses a Graph error body, returning `None` if it is not the Graph error shape.
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str::<GraphErrorEnvelope>(body)
            .ok()
            .map(|envelope| envelope.error)
    }

    /// Returns the request id Graph attached to the inner error, if present.
    pub fn request_id(&self) -> Option<&str> {
        self.inner_error
            .as_ref()?
            .get("request-id")?
            .as_str()
    }
}

impl std::fmt::Display for GraphErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
