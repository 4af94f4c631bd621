//! Authentication

mod cached;
mod client_credentials;
pub(crate) mod common;
mod token;

pub use cached::AuthFlow;
pub use cached::CachedTokenProvider;
pub use client_credentials::ClientCredentialsFlow;
pub use token::AccessToken;
pub use token::StaticTokenProvider;
pub use token::TokenProvider;
