//! Authentication error types

/// Errors that can occur while acquiring an access token.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The client ID or secret was rejected.
    #[error("Invalid client: {message}")]
    InvalidClient { message: String },

    /// The specified tenant ID is invalid or not found.
    #[error("Invalid tenant: {tenant}")]
    InvalidTenant { tenant: String },

    /// The requested scope is not valid for this application.
    #[error("Invalid scope: {message}")]
    InvalidScope { message: String },

    /// The identity provider refused to issue a token for another reason.
    #[error("Failed to acquire token: {error}: {message}")]
    Rejected { error: String, message: String },

    /// Network error during authentication.
    #[error("Network error during auth: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to parse authentication response.
    #[error("Auth response parse error: {0}")]
    Parse(String),
}
