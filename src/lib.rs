//! Drupal module information over MCP
//!
//! Fetches a module's drupal.org project page and extracts a summary:
//! - name, description and latest recommended version
//! - install count and module categories
//! - composer install command
//! - core compatibility (release line merged with the release table)
//! - body text with links inlined
//!
//! The `get_module_info` tool in [`server`] exposes this over stdio.

pub mod config;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod record;
pub mod server;

pub use error::FetchError;
pub use fetch::ProjectFetcher;
pub use record::ModuleRecord;
