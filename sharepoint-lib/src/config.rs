//! App registration and site configuration

use url::Url;

use crate::error::ConfigError;
use crate::model::SiteRef;

/// Default Microsoft Graph endpoint.
pub const DEFAULT_GRAPH_ENDPOINT: &str = "https://graph.microsoft.com";

/// Default Azure AD authority host.
pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";

/// Required variables, in the order they are reported when missing.
pub const REQUIRED_VARS: [&str; 5] = [
    "AZURE_CLIENT_ID",
    "AZURE_CLIENT_SECRET",
    "AZURE_TENANT_ID",
    "SHAREPOINT_SITE_URL",
    "SHAREPOINT_TENANT_NAME",
];

/// App registration credentials plus the SharePoint site to work against.
///
/// Built once at startup and passed to the client. Use [`Config::from_env`]
/// in binaries and [`Config::from_lookup`] when the values come from elsewhere.
#[derive(Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    /// Full site URL, e.g. `https://contoso.sharepoint.com/sites/Team`.
    pub site_url: String,
    /// Tenant prefix of the SharePoint host, e.g. `contoso`.
    pub tenant_name: String,
    pub graph_endpoint: String,
    pub authority_host: String,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`.
    ///
    /// Unset and empty values both count as missing. All missing names are
    /// reported together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let values: Vec<Option<String>> = REQUIRED_VARS.iter().map(|key| get(*key)).collect();
        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .zip(&values)
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| key.to_string())
            .collect();

        if !missing.is_empty() {
            log::error!("Missing required environment variables: {}", missing.join(", "));
            return Err(ConfigError::MissingVars(missing));
        }

        let mut values = values.into_iter().flatten();
        let mut next = || values.next().unwrap_or_default();

        let config = Self {
            client_id: next(),
            client_secret: next(),
            tenant_id: next(),
            site_url: next(),
            tenant_name: next(),
            graph_endpoint: get("GRAPH_API_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_GRAPH_ENDPOINT.to_string())
                .trim_end_matches('/')
                .to_string(),
            authority_host: get("AZURE_AUTHORITY_HOST")
                .unwrap_or_else(|| DEFAULT_AUTHORITY_HOST.to_string())
                .trim_end_matches('/')
                .to_string(),
        };

        log::debug!(
            "Configuration loaded for tenant {} (site {})",
            config.tenant_id,
            config.site_url
        );
        Ok(config)
    }

    /// Authority URL for the tenant.
    pub fn authority(&self) -> String {
        format!("{}/{}", self.authority_host, self.tenant_id)
    }

    /// Scope requested by the client-credentials flow.
    pub fn scope(&self) -> String {
        format!("{}/.default", self.graph_endpoint)
    }

    /// Extracts the site reference from [`Config::site_url`].
    pub fn site_ref(&self) -> Result<SiteRef, ConfigError> {
        let path = extract_site_path(&self.site_url)?;
        Ok(SiteRef::new(&self.tenant_name, path))
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("tenant_id", &self.tenant_id)
            .field("site_url", &self.site_url)
            .field("tenant_name", &self.tenant_name)
            .field("graph_endpoint", &self.graph_endpoint)
            .field("authority_host", &self.authority_host)
            .finish()
    }
}

/// Returns the server-relative path of a SharePoint site URL.
///
/// `https://contoso.sharepoint.com/sites/Team/` yields `/sites/Team`.
pub fn extract_site_path(site_url: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidSiteUrl(site_url.to_string());

    let url = Url::parse(site_url).map_err(|_| invalid())?;
    let host = url.host_str().ok_or_else(invalid)?;
    if !host.ends_with(".sharepoint.com") {
        return Err(invalid());
    }

    let path = url.path().trim_end_matches('/');
    if !path.contains("/sites/") {
        return Err(invalid());
    }

    Ok(path.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("AZURE_CLIENT_ID", "client"),
            ("AZURE_CLIENT_SECRET", "secret"),
            ("AZURE_TENANT_ID", "tenant-guid"),
            ("SHAREPOINT_SITE_URL", "https://contoso.sharepoint.com/sites/Team"),
            ("SHAREPOINT_TENANT_NAME", "contoso"),
        ])
    }

    fn load(env: &HashMap<&'static str, &'static str>) -> Result<Config, ConfigError> {
        Config::from_lookup(|key| env.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_complete_config() {
        let config = load(&full_env()).unwrap();
        assert_eq!(config.client_id, "client");
        assert_eq!(config.tenant_name, "contoso");
        assert_eq!(config.graph_endpoint, DEFAULT_GRAPH_ENDPOINT);
        assert_eq!(
            config.authority(),
            "https://login.microsoftonline.com/tenant-guid"
        );
        assert_eq!(config.scope(), "https://graph.microsoft.com/.default");
    }

    #[test]
    fn test_missing_vars_are_named() {
        let mut env = full_env();
        env.remove("AZURE_CLIENT_SECRET");
        env.insert("SHAREPOINT_TENANT_NAME", "");

        let err = load(&env).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingVars(vec![
                "AZURE_CLIENT_SECRET".to_string(),
                "SHAREPOINT_TENANT_NAME".to_string(),
            ])
        );
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: AZURE_CLIENT_SECRET, SHAREPOINT_TENANT_NAME"
        );
    }

    #[test]
    fn test_all_missing() {
        let err = Config::from_lookup(|_| None).unwrap_err();
        match err {
            ConfigError::MissingVars(names) => assert_eq!(names, REQUIRED_VARS.to_vec()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_endpoint_overrides() {
        let mut env = full_env();
        env.insert("GRAPH_API_ENDPOINT", "http://127.0.0.1:9000/");
        env.insert("AZURE_AUTHORITY_HOST", "http://127.0.0.1:9001");

        let config = load(&env).unwrap();
        assert_eq!(config.graph_endpoint, "http://127.0.0.1:9000");
        assert_eq!(config.authority(), "http://127.0.0.1:9001/tenant-guid");
        assert_eq!(config.scope(), "http://127.0.0.1:9000/.default");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = load(&full_env()).unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("\"secret\""));
    }

    #[test]
    fn test_extract_site_path() {
        assert_eq!(
            extract_site_path("https://contoso.sharepoint.com/sites/Team").unwrap(),
            "/sites/Team"
        );
        assert_eq!(
            extract_site_path("https://contoso.sharepoint.com/sites/Team/Sub/").unwrap(),
            "/sites/Team/Sub"
        );
    }

    #[test]
    fn test_extract_site_path_rejects() {
        for bad in [
            "https://contoso.sharepoint.com/teams/Team",
            "https://example.com/sites/Team",
            "contoso.sharepoint.com/sites/Team",
            "",
        ] {
            assert!(
                matches!(extract_site_path(bad), Err(ConfigError::InvalidSiteUrl(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_site_ref() {
        let config = load(&full_env()).unwrap();
        let site = config.site_ref().unwrap();
        assert_eq!(site.key(), "contoso.sharepoint.com:/sites/Team");
    }
}
