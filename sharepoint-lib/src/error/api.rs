//! API error types

use super::GraphErrorDetail;

/// Errors that can occur during Graph API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP error response from the API.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
        /// Graph error code, if available.
        code: Option<String>,
        /// Detailed error information from Graph.
        inner: Option<Box<GraphErrorDetail>>,
    },

    /// Network error during API call.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to parse API response.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },
}

impl ApiError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            code: None,
            inner: None,
        }
    }

    /// Creates a new HTTP error with Graph error details.
    pub fn http_with_detail(status: u16, detail: GraphErrorDetail) -> Self {
        Self::Http {
            status,
            message: detail.message.clone(),
            code: Some(detail.code.clone()),
            inner: Some(Box::new(detail)),
        }
    }

    /// Builds an HTTP error from a failed response body.
    ///
    /// Uses the Graph error envelope when the body carries one, the raw body otherwise.
    pub fn from_response_body(status: u16, body: String) -> Self {
        match GraphErrorDetail::from_body(&body) {
            Some(detail) => Self::http_with_detail(status, detail),
            None => Self::http(status, body),
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the Graph error code if available.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Http { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Returns the Graph error detail if available.
    pub fn graph_detail(&self) -> Option<&GraphErrorDetail> {
        match self {
            Self::Http { inner, .. } => inner.as_deref(),
            _ => None,
        }
    }
}
