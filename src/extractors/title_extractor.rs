//! Module display name

use scraper::Html;

use super::css_extractor::select_first_text;

/// Site brand that drupal.org appends to page titles
pub const SITE_BRAND_SUFFIX: &str = "| Drupal.org";

/// Text of the page title heading with the site brand removed
pub fn extract_name(document: &Html) -> String {
    let title = select_first_text(document, "#page-title")
        .or_else(|| select_first_text(document, "h1"))
        .unwrap_or_default();

    title.replacen(SITE_BRAND_SUFFIX, "", 1).trim().to_string()
}
