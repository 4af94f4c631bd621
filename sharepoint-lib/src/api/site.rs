//! Connection checks and site lookup

use reqwest::Method;
use reqwest::StatusCode;

use super::request::json_headers;
use super::request::parse_json;
use crate::SharePointClient;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::SiteInfo;

impl SharePointClient {
    /// Checks that a token can be acquired and Graph accepts it.
    ///
    /// Issues `GET /sites`, which app-only tokens may call. Returns `true` on
    /// HTTP 200. Failures, including authentication failures, are logged and
    /// reported as `false`.
    pub async fn test_connection(&self) -> bool {
        let url = self.api_url("/sites");
        match self.request(Method::GET, &url, json_headers(), None).await {
            Ok(response) => response.status() == StatusCode::OK,
            Err(e) => {
                log::error!("Error testing Azure connection: {}", e);
                false
            }
        }
    }

    /// Checks the connection and that the configured site is reachable.
    ///
    /// Never returns an error; failures are logged and reported as `false`.
    pub async fn connect(&self) -> bool {
        if !self.test_connection().await {
            return false;
        }

        match self.get_site_info().await {
            Ok(site) => {
                log::info!("Connected to site {} ({})", site.display_name_or_default(), site.id);
                true
            }
            Err(e) => {
                log::error!("Error connecting to SharePoint: {}", e);
                false
            }
        }
    }

    /// Fetches metadata for the configured site.
    ///
    /// Looks the site up by `{tenant}.sharepoint.com:{path}`. Not cached.
    /// Only HTTP 200 carries site metadata; any other status is an error.
    pub async fn get_site_info(&self) -> Result<SiteInfo, Error> {
        let url = self.api_url(&format!("/sites/{}", self.inner.site.key()));
        self.fetch_site(&url).await.inspect_err(|e| {
            log::error!("Failed to get site info: {}", e);
        })
    }

    async fn fetch_site(&self, url: &str) -> Result<SiteInfo, Error> {
        let response = self.request(Method::GET, url, json_headers(), None).await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(ApiError::from_response_body(status.as_u16(), body)));
        }

        parse_json(response).await
    }
}
