//! Normalized summary of a drupal.org project page

use serde::{Deserialize, Serialize};

/// Result of one extraction pass.
///
/// Every field is always present. Page fragments that could not be found
/// leave their field at the default (empty string, empty list, or `"0"` for
/// downloads).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    pub name: String,
    pub description: String,
    /// Latest recommended release, e.g. `8.x-3.0`
    pub version: String,
    /// Reported install count exactly as printed on the page, e.g. `12,345`
    pub downloads: String,
    pub status: String,
    pub composer_command: String,
    /// Core versions in first-seen order, without duplicates
    pub drupal_compatibility: Vec<String>,
    pub project_url: String,
    /// Body text with links rendered as `text (href)`
    pub readme: String,
}

impl ModuleRecord {
    /// Record for `project_url` with every extracted field at its default.
    pub fn empty(project_url: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            version: String::new(),
            downloads: "0".to_string(),
            status: String::new(),
            composer_command: String::new(),
            drupal_compatibility: vec![],
            project_url: project_url.into(),
            readme: String::new(),
        }
    }

    /// Pretty-printed JSON (2-space indent), fields in declaration order.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
