//! Drives and file upload

use std::path::Path;

use reqwest::Method;

use super::request::encode_path;
use super::request::octet_stream_headers;
use super::request::parse_json;
use crate::SharePointClient;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Drive;
use crate::model::UploadedItem;

impl SharePointClient {
    /// Lists the drives (document libraries) of a site.
    pub async fn list_drives(&self, site_id: &str) -> Result<Vec<Drive>, Error> {
        let url = self.api_url(&format!("/sites/{}/drives", site_id));
        self.get_all(&url).await
    }

    /// Finds the drive backing the document library named `library_name`.
    ///
    /// The name must match exactly.
    pub async fn find_drive(&self, site_id: &str, library_name: &str) -> Result<Drive, Error> {
        self.list_drives(site_id)
            .await?
            .into_iter()
            .find(|drive| drive.name == library_name)
            .ok_or_else(|| {
                log::error!("Document library {} not found", library_name);
                Error::LibraryNotFound(library_name.to_string())
            })
    }

    /// Uploads a local file into a document library.
    ///
    /// `remote_name` defaults to the local file name and may contain `/` to
    /// place the file in a folder. Existing files are replaced. The whole file
    /// is sent in a single request.
    pub async fn upload_file(
        &self,
        local_path: impl AsRef<Path>,
        remote_name: Option<&str>,
        library_name: &str,
    ) -> Result<UploadedItem, Error> {
        let local_path = local_path.as_ref();
        let site = self.get_site_info().await?;

        let remote_name = match remote_name {
            Some(name) => name.to_string(),
            None => local_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    Error::Io(std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("{} has no file name", local_path.display()),
                    ))
                })?,
        };

        let content = tokio::fs::read(local_path).await.inspect_err(|e| {
            log::error!("Failed to read {}: {}", local_path.display(), e);
        })?;

        let drive = self.find_drive(&site.id, library_name).await?;

        let url = self.api_url(&format!(
            "/sites/{}/drives/{}/root:/{}:/content",
            site.id,
            drive.id,
            encode_path(&remote_name)
        ));

        log::info!(
            "Uploading {} ({} bytes) to {}/{}",
            local_path.display(),
            content.len(),
            library_name,
            remote_name
        );

        let response = self
            .request(Method::PUT, &url, octet_stream_headers(), Some(content))
            .await
            .inspect_err(|e| log::error!("Failed to upload file: {}", e))?;

        let status = response.status().as_u16();
        if !matches!(status, 200 | 201) {
            log::error!("Failed to upload file: {}", status);
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(ApiError::from_response_body(status, body)));
        }

        let item: UploadedItem = parse_json(response).await?;
        log::info!("Uploaded {} as item {}", item.name, item.id);
        Ok(item)
    }
}
