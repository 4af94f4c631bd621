//! Typed models

mod drive;
mod file;
mod site;

pub use drive::*;
pub use file::FileDescriptor;
pub use site::*;

pub(crate) use file::ListItem;
