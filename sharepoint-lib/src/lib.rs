//! SharePoint client library
//!
//! An async client for one SharePoint site through Microsoft Graph, using
//! app-only (client credentials) authentication against Azure AD.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod model;

mod client;

pub use client::*;
pub use config::Config;
