//! Site addressing and metadata

use serde::Deserialize;
use serde::Serialize;

/// A SharePoint site addressed by tenant and server-relative path.
///
/// # Example
///
/// ```
/// use sharepoint_lib::model::SiteRef;
///
/// let site = SiteRef::new("contoso", "/sites/Team");
/// assert_eq!(site.key(), "contoso.sharepoint.com:/sites/Team");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRef {
    tenant_name: String,
    path: String,
}

impl SiteRef {
    /// Creates a site reference. A missing leading slash is added to `path`.
    pub fn new(tenant_name: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };
        Self {
            tenant_name: tenant_name.into(),
            path,
        }
    }

    pub fn tenant_name(&self) -> &str {
        &self.tenant_name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// SharePoint host name, e.g. `contoso.sharepoint.com`.
    pub fn hostname(&self) -> String {
        format!("{}.sharepoint.com", self.tenant_name)
    }

    /// Graph site key in `host:path` form.
    pub fn key(&self) -> String {
        format!("{}:{}", self.hostname(), self.path)
    }
}

/// Site metadata returned by `GET /sites/{site-key}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    /// Composite site id (`host,site-collection-guid,web-guid`).
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl SiteInfo {
    /// Display name, or `"Unknown Site"` when Graph omitted it.
    pub fn display_name_or_default(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Unknown Site")
    }
}
