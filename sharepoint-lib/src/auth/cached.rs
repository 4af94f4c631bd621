//! Cached token acquisition.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::AccessToken;
use super::TokenProvider;
use crate::error::AuthError;

/// Trait for authentication flows that can obtain a fresh token.
///
/// Used with [`CachedTokenProvider`] for automatic token management.
#[async_trait]
pub trait AuthFlow: Send + Sync {
    /// Authenticates and obtains a new access token for `scope`.
    async fn authenticate(&self, scope: &str) -> Result<AccessToken, AuthError>;
}

/// A token provider that caches tokens in memory.
///
/// Wraps any [`AuthFlow`]:
/// - Returns the cached token silently while it is not close to expiry
/// - Otherwise requests a new token from the flow and caches it
///
/// Tokens are never persisted.
///
/// # Example
///
/// ```ignore
/// use sharepoint_lib::auth::{CachedTokenProvider, ClientCredentialsFlow};
///
/// let flow = ClientCredentialsFlow::from_config(&config);
/// let provider = CachedTokenProvider::new(flow);
/// let token = provider.get_token(&config.scope()).await?;
/// ```
pub struct CachedTokenProvider<F> {
    flow: F,
    token: RwLock<Option<CachedToken>>,
    /// Treat tokens as expired this long before actual expiry
    refresh_buffer: Duration,
}

#[derive(Clone)]
struct CachedToken {
    scope: String,
    token: AccessToken,
}

impl<F: AuthFlow> CachedTokenProvider<F> {
    /// Creates a new caching token provider.
    ///
    /// Uses a default refresh buffer of 5 minutes.
    pub fn new(flow: F) -> Self {
        Self::with_refresh_buffer(flow, Duration::from_secs(300))
    }

    /// Creates a new caching token provider with a custom refresh buffer.
    pub fn with_refresh_buffer(flow: F, refresh_buffer: Duration) -> Self {
        Self {
            flow,
            token: RwLock::new(None),
            refresh_buffer,
        }
    }

    /// Returns the underlying flow.
    pub fn flow(&self) -> &F {
        &self.flow
    }

    /// Clears the cached token, forcing a new token request on next use.
    pub async fn clear_token(&self) {
        let mut token = self.token.write().await;
        *token = None;
    }

    fn usable<'a>(&self, cached: &'a Option<CachedToken>, scope: &str) -> Option<&'a AccessToken> {
        let buffer =
            chrono::Duration::from_std(self.refresh_buffer).unwrap_or(chrono::Duration::zero());
        cached
            .as_ref()
            .filter(|c| c.scope == scope && !c.token.expires_within(buffer))
            .map(|c| &c.token)
    }
}

#[async_trait]
impl<F: AuthFlow> TokenProvider for CachedTokenProvider<F> {
    async fn get_token(&self, scope: &str) -> Result<AccessToken, AuthError> {
        // Silent path: valid cached token
        {
            let guard = self.token.read().await;
            if let Some(token) = self.usable(&guard, scope) {
                log::debug!("Using cached access token");
                return Ok(token.clone());
            }
        }

        let mut guard = self.token.write().await;

        // Another caller may have filled the cache while we waited for the write lock
        if let Some(token) = self.usable(&guard, scope) {
            return Ok(token.clone());
        }

        *guard = None;
        log::debug!("No usable cached token, requesting a new one");
        let token = self.flow.authenticate(scope).await?;

        *guard = Some(CachedToken {
            scope: scope.to_string(),
            token: token.clone(),
        });
        Ok(token)
    }
}
