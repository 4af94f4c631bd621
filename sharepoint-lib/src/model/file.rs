//! Document library file descriptors

use serde::Deserialize;
use serde::Serialize;

/// A file in a document library, flattened from a list item and its drive item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File name (`FileLeafRef`).
    pub name: String,
    /// Server-relative path (`FileRef`).
    pub url: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification timestamp as reported by SharePoint.
    pub modified: String,
    /// Drive item id.
    pub id: String,
}

impl FileDescriptor {
    /// Size in MiB, for display.
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / (1024.0 * 1024.0)
    }
}

/// A list item as returned with `$expand=fields,driveItem`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListItem {
    #[serde(default)]
    pub fields: ListItemFields,
    #[serde(default)]
    pub drive_item: Option<ListDriveItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ListItemFields {
    #[serde(rename = "FileLeafRef", default)]
    pub file_leaf_ref: Option<String>,
    #[serde(rename = "FileRef", default)]
    pub file_ref: Option<String>,
    #[serde(rename = "Modified", default)]
    pub modified: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ListDriveItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub size: Option<i64>,
}

impl ListItem {
    /// Flattens the item, or `None` for items without a drive item (folders, plain list rows).
    pub(crate) fn into_file(self) -> Option<FileDescriptor> {
        let drive_item = self.drive_item?;
        let fields = self.fields;

        Some(FileDescriptor {
            name: fields.file_leaf_ref.unwrap_or_else(|| "Unknown".to_string()),
            url: fields.file_ref.unwrap_or_default(),
            size: drive_item.size.unwrap_or(0).max(0) as u64,
            modified: fields.modified.unwrap_or_default(),
            id: drive_item.id.unwrap_or_default(),
        })
    }
}
