//! Client credentials flow (app-only authentication)

use async_trait::async_trait;

use super::cached::AuthFlow;
use super::common::handle_token_response;
use super::common::token_url_v2;
use super::AccessToken;
use crate::config::Config;
use crate::error::AuthError;

/// OAuth2 client credentials flow against the Azure AD v2.0 token endpoint.
///
/// Authenticates as the app registration itself, without a user. The
/// requested scope must be a `/.default` scope, e.g.
/// `https://graph.microsoft.com/.default`.
///
/// # Example
///
/// ```ignore
/// use sharepoint_lib::auth::ClientCredentialsFlow;
///
/// let flow = ClientCredentialsFlow::new(
///     "your-client-id",
///     "your-client-secret",
///     "https://login.microsoftonline.com/your-tenant-id",
/// );
///
/// let token = flow.authenticate("https://graph.microsoft.com/.default").await?;
/// ```
#[derive(Clone)]
pub struct ClientCredentialsFlow {
    client_id: String,
    client_secret: String,
    /// `{authority_host}/{tenant_id}`
    authority: String,
    http_client: reqwest::Client,
}

impl ClientCredentialsFlow {
    /// Creates a new client credentials flow.
    ///
    /// # Arguments
    ///
    /// * `client_id` - The Azure AD application (client) ID
    /// * `client_secret` - The Azure AD application client secret
    /// * `authority` - Authority URL including the tenant, e.g.
    ///   `https://login.microsoftonline.com/<tenant-id>`
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        authority: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            authority: authority.into(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Creates a flow from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.client_id, &config.client_secret, config.authority())
    }

    /// Uses a custom HTTP client for token requests.
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// Returns the token endpoint this flow posts to.
    pub fn token_url(&self) -> String {
        token_url_v2(&self.authority)
    }

    /// Requests a new access token for `scope`.
    pub async fn authenticate(&self, scope: &str) -> Result<AccessToken, AuthError> {
        let token_url = self.token_url();
        log::debug!("Requesting client credentials token from {}", token_url);

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("scope", scope),
        ];

        let response = self
            .http_client
            .post(&token_url)
            .form(&params)
            .send()
            .await?;

        match handle_token_response(response).await {
            Ok(token) => {
                log::info!("Acquired access token (expires at {:?})", token.expires_at);
                Ok(token)
            }
            Err(e) => {
                log::error!("Failed to acquire token: {}", e);
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for ClientCredentialsFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentialsFlow")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("authority", &self.authority)
            .finish()
    }
}

#[async_trait]
impl AuthFlow for ClientCredentialsFlow {
    async fn authenticate(&self, scope: &str) -> Result<AccessToken, AuthError> {
        self.authenticate(scope).await
    }
}
