//! Configuration error types

/// Errors raised while loading or interpreting configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// One or more required environment variables are unset or empty.
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<String>),

    /// The SharePoint site URL is not of the form `https://<tenant>.sharepoint.com/sites/<name>`.
    #[error("Invalid SharePoint site URL format: {0}")]
    InvalidSiteUrl(String),
}
