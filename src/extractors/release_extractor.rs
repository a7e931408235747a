//! Release information: recommended version and core compatibility
//!
//! Compatibility comes from two places on the page. The recommended release
//! carries a "Works with Drupal: ^9 || ^10" line, and the current releases
//! table lists one core version per cell. Both are merged into one list.

use std::collections::HashSet;

use scraper::Html;

use super::css_extractor::{element_text, parse_selector, select_containing, select_first_text};

const RECOMMENDED_RELEASE: &str = ".release.recommended-Yes";

/// Prefix of the compatibility line in a release entry
pub const WORKS_WITH_LABEL: &str = "Works with";

/// Separator between versions in the compatibility line
pub const WORKS_WITH_SEPARATOR: &str = "||";

/// Version label of the first recommended release
pub fn extract_version(document: &Html) -> String {
    select_first_text(
        document,
        ".release.recommended-Yes .views-field-field-release-version strong",
    )
    .unwrap_or_default()
}

/// Versions listed on the recommended release's "Works with" line
///
/// Wrapper divs also contain the label, so the innermost matching div is
/// used.
pub fn extract_works_with(document: &Html) -> Vec<String> {
    let candidates = select_containing(
        document,
        &format!("{RECOMMENDED_RELEASE} div"),
        WORKS_WITH_LABEL,
    );
    let div = match parse_selector("div") {
        Some(s) => s,
        None => return vec![],
    };

    candidates
        .iter()
        .find(|el| {
            !el.select(&div)
                .any(|inner| element_text(&inner).contains(WORKS_WITH_LABEL))
        })
        .map(|el| parse_works_with(&element_text(el)))
        .unwrap_or_default()
}

/// Split a line like `Works with Drupal: ^8.8 || ^9` into its versions
pub fn parse_works_with(text: &str) -> Vec<String> {
    let list = match text.find(WORKS_WITH_LABEL) {
        Some(start) => {
            let rest = &text[start + WORKS_WITH_LABEL.len()..];
            match rest.find(':') {
                Some(colon) => &rest[colon + 1..],
                None => rest,
            }
        }
        None => text,
    };

    list.split(WORKS_WITH_SEPARATOR)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}

/// Cells of the first row in the current release compatibility table
pub fn extract_compatibility_table(document: &Html) -> Vec<String> {
    let row_selector = match parse_selector(".table-release-compatibility-current tbody tr") {
        Some(s) => s,
        None => return vec![],
    };
    let cell_selector = match parse_selector("td") {
        Some(s) => s,
        None => return vec![],
    };

    document
        .select(&row_selector)
        .next()
        .map(|row| {
            row.select(&cell_selector)
                .map(|cell| element_text(&cell).trim().to_string())
                .filter(|v| !v.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Union of both sources, first occurrence wins
pub fn merge_compatibility(works_with: Vec<String>, table: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    works_with
        .into_iter()
        .chain(table)
        .filter(|v| seen.insert(v.clone()))
        .collect()
}
