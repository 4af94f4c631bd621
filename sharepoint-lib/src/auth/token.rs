//! TokenProvider trait and AccessToken

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::error::AuthError;

/// An OAuth2 access token with optional expiration.
///
/// Client-credentials tokens carry no refresh token; once expired a new one
/// is requested from the token endpoint.
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// The bearer token used for API authentication.
    pub access_token: String,
    /// When the token expires, if known.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Creates a new access token with just the token string.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    /// Creates a new access token with expiration time.
    pub fn with_expiry(access_token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: Some(expires_at),
        }
    }

    /// Returns `true` if the token will expire within the given duration.
    ///
    /// Returns `false` if expiration time is unknown.
    pub fn expires_within(&self, duration: chrono::Duration) -> bool {
        self.expires_at
            .is_some_and(|exp| Utc::now() + duration >= exp)
    }
}

/// Trait for providing access tokens to the SharePoint client.
///
/// The client calls `get_token` before each API request. Implementations
/// should return cached tokens when valid and acquire new ones transparently.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Gets an access token for the specified scope
    /// (e.g., `https://graph.microsoft.com/.default`).
    async fn get_token(&self, scope: &str) -> Result<AccessToken, AuthError>;
}

/// A simple token provider that always returns the same static token.
///
/// Useful for testing or when the caller already holds a token.
///
/// # Example
///
/// ```
/// use sharepoint_lib::auth::StaticTokenProvider;
///
/// let provider = StaticTokenProvider::new("my-access-token");
/// ```
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: AccessToken,
}

impl StaticTokenProvider {
    /// Creates a new static token provider with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            token: AccessToken::new(access_token),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn get_token(&self, _scope: &str) -> Result<AccessToken, AuthError> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_expiry_checks() {
        let token = AccessToken::with_expiry("t", Utc::now() + Duration::minutes(2));
        assert!(token.expires_within(Duration::minutes(5)));
        assert!(!token.expires_within(Duration::seconds(10)));

        let expired = AccessToken::with_expiry("t", Utc::now() - Duration::seconds(1));
        assert!(expired.expires_within(Duration::zero()));
    }

    #[test]
    fn test_unknown_expiry_never_expires() {
        let token = AccessToken::new("t");
        assert!(!token.expires_within(Duration::zero()));
        assert!(!token.expires_within(Duration::days(365)));
    }
}
