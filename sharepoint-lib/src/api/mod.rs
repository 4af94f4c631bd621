//! Graph API operations

mod drives;
mod files;
mod request;
mod site;

pub use request::Collection;
