//! Meta tag extraction
//!
//! The project summary lives in the standard `description` meta tag, which
//! is cleaner than anything rendered in the page body.

use scraper::Html;

use super::css_extractor::select_first_attr;

/// Content of `<meta name="description">`, empty if absent
pub fn extract_description(document: &Html) -> String {
    select_first_attr(document, r#"meta[name="description"]"#, "content").unwrap_or_default()
}
