//! Error types

mod api;
mod auth;
mod config;
mod graph;

pub use api::*;
pub use auth::*;
pub use config::*;
pub use graph::*;

/// Top-level error returned by client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration is incomplete or malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Token acquisition failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A Graph API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No drive on the site carries the requested document library name.
    #[error("Document library not found: {0}")]
    LibraryNotFound(String),

    /// Reading a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the HTTP status code if this is an API HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(api) => api.status_code(),
            _ => None,
        }
    }
}
