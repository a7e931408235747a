//! Field extraction from drupal.org project pages
//!
//! Each module provides the rules for one area of the page. Every rule is a
//! pure function over the parsed document and returns its default value
//! when the expected markup is missing, so one broken selector only empties
//! one field.

mod css_extractor;
mod meta_extractor;
mod project_info_extractor;
mod readme_extractor;
mod release_extractor;
mod title_extractor;

pub use css_extractor::*;
pub use meta_extractor::*;
pub use project_info_extractor::*;
pub use readme_extractor::*;
pub use release_extractor::*;
pub use title_extractor::*;

use scraper::Html;

use crate::record::ModuleRecord;

/// Parse `html` once and run every field rule against it
pub fn extract_module_record(html: &str, project_url: &str) -> ModuleRecord {
    let document = Html::parse_document(html);

    let drupal_compatibility = merge_compatibility(
        extract_works_with(&document),
        extract_compatibility_table(&document),
    );

    ModuleRecord {
        name: extract_name(&document),
        description: extract_description(&document),
        version: extract_version(&document),
        downloads: extract_downloads(&document),
        status: extract_status(&document),
        composer_command: extract_composer_command(&document),
        drupal_compatibility,
        project_url: project_url.to_string(),
        readme: extract_readme(&document),
    }
}
