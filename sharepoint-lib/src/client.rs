//! Main SharePointClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::auth::CachedTokenProvider;
use crate::auth::ClientCredentialsFlow;
use crate::auth::TokenProvider;
use crate::config::Config;
use crate::config::DEFAULT_GRAPH_ENDPOINT;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::SiteRef;

/// Client for one SharePoint site through the Microsoft Graph API.
///
/// This client is cheap to clone (uses `Arc` internally). Operations are
/// issued one at a time; nothing is retried.
///
/// # Example
///
/// ```ignore
/// use sharepoint_lib::{Config, SharePointClient};
///
/// let config = Config::from_env()?;
/// let client = SharePointClient::from_config(&config)?;
///
/// let site = client.get_site_info().await?;
/// let files = client.list_files("Documents").await?;
/// ```
#[derive(Clone)]
pub struct SharePointClient {
    pub(crate) inner: Arc<SharePointClientInner>,
}

pub(crate) struct SharePointClientInner {
    pub(crate) graph_endpoint: String,
    pub(crate) api_version: String,
    pub(crate) scope: String,
    pub(crate) site: SiteRef,
    pub(crate) token_provider: Arc<dyn TokenProvider>,
    pub(crate) http_client: Client,
    pub(crate) timeout: Option<Duration>,
}

impl SharePointClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> SharePointClientBuilder<Missing, Missing> {
        SharePointClientBuilder::new()
    }

    /// Builds a client that authenticates with the client credentials flow
    /// described by `config`, caching the token in memory.
    ///
    /// Token and Graph requests share one HTTP connection pool.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let site = config.site_ref()?;
        let http_client = Client::builder().build().map_err(ApiError::from)?;
        let flow =
            ClientCredentialsFlow::from_config(config).with_http_client(http_client.clone());

        Self::builder()
            .site(site)
            .token_provider(CachedTokenProvider::new(flow))
            .graph_endpoint(&config.graph_endpoint)
            .scope(config.scope())
            .http_client(http_client)
            .build()
    }

    /// Returns the site this client operates on.
    pub fn site(&self) -> &SiteRef {
        &self.inner.site
    }

    /// Returns the Graph endpoint (without API version).
    pub fn graph_endpoint(&self) -> &str {
        &self.inner.graph_endpoint
    }

    /// Returns the API version being used.
    pub fn api_version(&self) -> &str {
        &self.inner.api_version
    }

    /// Returns the scope requested for access tokens.
    pub fn scope(&self) -> &str {
        &self.inner.scope
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`SharePointClient`].
///
/// Uses the typestate pattern to ensure required fields are set at compile time.
///
/// # Required Fields
///
/// - `site` - The SharePoint site to operate on
/// - `token_provider` - A [`TokenProvider`] implementation
///
/// # Example
///
/// ```ignore
/// let client = SharePointClient::builder()
///     .site(SiteRef::new("contoso", "/sites/Team"))
///     .token_provider(my_provider)
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub struct SharePointClientBuilder<Site, Provider> {
    site: Site,
    token_provider: Provider,
    graph_endpoint: String,
    api_version: String,
    scope: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl SharePointClientBuilder<Missing, Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            site: Missing,
            token_provider: Missing,
            graph_endpoint: DEFAULT_GRAPH_ENDPOINT.to_string(),
            api_version: "v1.0".to_string(),
            scope: None,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }
}

impl Default for SharePointClientBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> SharePointClientBuilder<Missing, P> {
    /// Sets the SharePoint site.
    pub fn site(self, site: SiteRef) -> SharePointClientBuilder<Set<SiteRef>, P> {
        SharePointClientBuilder {
            site: Set(site),
            token_provider: self.token_provider,
            graph_endpoint: self.graph_endpoint,
            api_version: self.api_version,
            scope: self.scope,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<S> SharePointClientBuilder<S, Missing> {
    /// Sets the token provider for authentication.
    pub fn token_provider<T: TokenProvider + 'static>(
        self,
        provider: T,
    ) -> SharePointClientBuilder<S, Set<Arc<dyn TokenProvider>>> {
        SharePointClientBuilder {
            site: self.site,
            token_provider: Set(Arc::new(provider) as Arc<dyn TokenProvider>),
            graph_endpoint: self.graph_endpoint,
            api_version: self.api_version,
            scope: self.scope,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<S, P> SharePointClientBuilder<S, P> {
    /// Sets the Graph endpoint.
    ///
    /// Defaults to `https://graph.microsoft.com`.
    pub fn graph_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.graph_endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the API version to use.
    ///
    /// Defaults to `v1.0`.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Sets the scope passed to the token provider.
    ///
    /// Defaults to `{graph_endpoint}/.default`.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl SharePointClientBuilder<Set<SiteRef>, Set<Arc<dyn TokenProvider>>> {
    /// Builds the [`SharePointClient`].
    ///
    /// This method is only available when both `site` and `token_provider` have been set.
    pub fn build(self) -> Result<SharePointClient, Error> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::from)?
            }
        };

        let scope = self
            .scope
            .unwrap_or_else(|| format!("{}/.default", self.graph_endpoint));

        Ok(SharePointClient {
            inner: Arc::new(SharePointClientInner {
                graph_endpoint: self.graph_endpoint,
                api_version: self.api_version,
                scope,
                site: self.site.0,
                token_provider: self.token_provider.0,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticTokenProvider;

    #[test]
    fn test_builder_defaults() {
        let client = SharePointClient::builder()
            .site(SiteRef::new("contoso", "/sites/Team"))
            .token_provider(StaticTokenProvider::new("t"))
            .build()
            .unwrap();

        assert_eq!(client.graph_endpoint(), "https://graph.microsoft.com");
        assert_eq!(client.api_version(), "v1.0");
        assert_eq!(client.scope(), "https://graph.microsoft.com/.default");
        assert_eq!(client.site().key(), "contoso.sharepoint.com:/sites/Team");
    }

    #[test]
    fn test_builder_overrides() {
        let client = SharePointClient::builder()
            .token_provider(StaticTokenProvider::new("t"))
            .site(SiteRef::new("contoso", "/sites/Team"))
            .graph_endpoint("http://localhost:8080/")
            .api_version("beta")
            .build()
            .unwrap();

        assert_eq!(client.graph_endpoint(), "http://localhost:8080");
        assert_eq!(client.api_version(), "beta");
        assert_eq!(client.scope(), "http://localhost:8080/.default");
    }
}
