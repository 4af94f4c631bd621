//! Request plumbing shared by all operations

use reqwest::Method;
use reqwest::header::ACCEPT;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::SharePointClient;
use crate::error::ApiError;
use crate::error::Error;

/// A Graph collection response page.
#[derive(Debug, Deserialize)]
pub struct Collection<T> {
    /// The items in this page.
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    /// Link to the next page.
    #[serde(rename = "@odata.nextLink", default)]
    pub next_link: Option<String>,
}

impl SharePointClient {
    /// Builds an absolute API URL from a path starting with `/`.
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}{}",
            self.inner.graph_endpoint, self.inner.api_version, path
        )
    }

    /// Sends one authenticated request.
    ///
    /// Non-2xx responses are turned into [`ApiError::Http`].
    pub(crate) async fn request(
        &self,
        method: Method,
        url: &str,
        headers: impl Into<Option<HeaderMap>>,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Response, Error> {
        let token = self
            .inner
            .token_provider
            .get_token(&self.inner.scope)
            .await?;

        log::debug!("{} {}", method, url);

        let mut request = self
            .inner
            .http_client
            .request(method.clone(), url)
            .headers(headers.into().unwrap_or_default())
            .bearer_auth(&token.access_token);

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response_body(status.as_u16(), body);
            log::error!("{} {} failed: {}", method, url, err);
            Err(Error::Api(err))
        }
    }

    /// Sends a GET and deserializes the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let response = self.request(Method::GET, url, json_headers(), None).await?;
        parse_json(response).await
    }

    /// GETs every page of a collection, following `@odata.nextLink`.
    pub(crate) async fn get_all<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, Error> {
        let mut items = Vec::new();
        let mut next = Some(url.to_string());

        while let Some(url) = next.take() {
            let page: Collection<T> = self.get_json(&url).await?;
            items.extend(page.value);
            next = page.next_link;
        }

        Ok(items)
    }
}

/// Headers for JSON requests.
pub(crate) fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Headers for raw content uploads.
pub(crate) fn octet_stream_headers() -> HeaderMap {
    let mut headers = json_headers();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/octet-stream"),
    );
    headers
}

/// Reads the body and deserializes it, keeping the raw text on failure.
pub(crate) async fn parse_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, Error> {
    let body = response.text().await.map_err(ApiError::from)?;
    serde_json::from_str(&body)
        .map_err(|e| Error::Api(ApiError::parse_with_body(e.to_string(), body)))
}

/// Percent-encodes each `/`-separated segment of a path.
pub(crate) fn encode_path(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
