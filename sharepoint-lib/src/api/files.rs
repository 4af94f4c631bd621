//! Document library listing

use super::request::encode_path;
use crate::SharePointClient;
use crate::error::Error;
use crate::model::FileDescriptor;
use crate::model::ListItem;

impl SharePointClient {
    /// Lists the files of a document library.
    ///
    /// Resolves the site id first, then reads the library's list items with
    /// their fields and drive items expanded, following pagination. Items
    /// without a drive item are skipped.
    pub async fn list_files(&self, library_name: &str) -> Result<Vec<FileDescriptor>, Error> {
        let site = self.get_site_info().await?;

        let url = self.api_url(&format!(
            "/sites/{}/lists/{}/items?$expand=fields,driveItem&$filter=fields/FileRef%20ne%20null",
            site.id,
            encode_path(library_name)
        ));

        let items: Vec<ListItem> = self.get_all(&url).await.inspect_err(|e| {
            log::error!("Failed to list files in {}: {}", library_name, e);
        })?;

        let files: Vec<FileDescriptor> = items.into_iter().filter_map(ListItem::into_file).collect();
        log::info!("Found {} files in {}", files.len(), library_name);
        Ok(files)
    }
}
