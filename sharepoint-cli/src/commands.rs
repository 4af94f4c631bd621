//! Sub-command implementations.
//!
//! Each command prints progress lines to stdout and returns an error on the
//! first failure; `main` turns that into exit code 1.

use std::path::Path;

use anyhow::Result;
use sharepoint_lib::Config;
use sharepoint_lib::SharePointClient;
use sharepoint_lib::model::FileDescriptor;

/// Files shown by `check`.
const PREVIEW_FILES: usize = 3;

/// A `check` step that failed after printing its own `✗` line.
#[derive(Debug, thiserror::Error)]
pub enum StepFailed {
    #[error("Azure authentication failed")]
    Authentication,
    #[error("SharePoint connection failed")]
    Connection,
}

/// Walks through configuration, authentication, connection, site lookup and
/// a short file listing.
///
/// A listing failure is logged and skips the preview; it does not fail the
/// check.
pub async fn check(config: &Config, library: &str) -> Result<()> {
    println!("Azure AD App Registration → SharePoint Connection");
    println!("{}", "=".repeat(50));
    println!("✓ Configuration loaded");

    let client = SharePointClient::from_config(config)?;

    if !client.test_connection().await {
        return step_failed(StepFailed::Authentication);
    }
    println!("✓ Azure authentication successful");

    if !client.connect().await {
        return step_failed(StepFailed::Connection);
    }
    println!("✓ SharePoint connection successful");

    let site = client.get_site_info().await?;
    println!("✓ Connected to: {}", site.display_name_or_default());

    match client.list_files(library).await {
        Ok(files) if !files.is_empty() => {
            println!("✓ Found {} files in {} library", files.len(), library);
            for file in files.iter().take(PREVIEW_FILES) {
                println!("  - {} ({:.2} MB)", file.name, file.size_mb());
            }
        }
        Ok(_) => log::debug!("No files in {} library", library),
        Err(e) => log::warn!("Skipping file preview for {}: {}", library, e),
    }

    println!("\n🎉 SharePoint connection successful!");
    Ok(())
}

fn step_failed(step: StepFailed) -> Result<()> {
    println!("✗ {}", step);
    Err(step.into())
}

/// Prints site metadata.
pub async fn site(config: &Config) -> Result<()> {
    let client = SharePointClient::from_config(config)?;
    let site = client.get_site_info().await?;

    println!("Site:  {}", site.display_name_or_default());
    println!("Id:    {}", site.id);
    if let Some(url) = &site.web_url {
        println!("URL:   {}", url);
    }
    if let Some(description) = site.description.as_deref().filter(|d| !d.is_empty()) {
        println!("About: {}", description);
    }
    Ok(())
}

/// Prints every file in a library.
pub async fn list(config: &Config, library: &str) -> Result<()> {
    let client = SharePointClient::from_config(config)?;
    let files = client.list_files(library).await?;

    println!("✓ Found {} files in {} library", files.len(), library);
    for file in &files {
        println!("{}", format_file(file));
    }
    Ok(())
}

/// Uploads one file.
pub async fn upload(
    config: &Config,
    path: &Path,
    library: &str,
    name: Option<&str>,
) -> Result<()> {
    let client = SharePointClient::from_config(config)?;

    let item = client.upload_file(path, name, library).await?;

    println!("✓ Uploaded {} ({} bytes) to {}", item.name, item.size, library);
    if let Some(url) = item.web_url {
        println!("  {}", url);
    }
    Ok(())
}

fn format_file(file: &FileDescriptor) -> String {
    format!(
        "  - {} ({:.2} MB, modified {}) {}",
        file.name,
        file.size_mb(),
        if file.modified.is_empty() { "?" } else { file.modified.as_str() },
        file.url
    )
}
