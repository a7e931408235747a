//! Project information sidebar: usage, categories, install command

use regex::Regex;
use scraper::Html;

use super::css_extractor::{element_text, select_containing, select_first_text};

const PROJECT_INFO_ITEM: &str = ".project-info li";

/// Label of the category item in the project information list
pub const CATEGORIES_LABEL: &str = "Module categories:";

/// Install count from the "N sites report using this module" line
///
/// Only grouped numbers (`12,345`) are recognised. Returns `"0"` when the
/// line or the number is missing.
pub fn extract_downloads(document: &Html) -> String {
    let number = match Regex::new(r"\d+,\d+") {
        Ok(re) => re,
        Err(_) => return "0".to_string(),
    };

    select_containing(document, PROJECT_INFO_ITEM, "sites report")
        .iter()
        .find_map(|item| {
            number
                .find(&element_text(item))
                .map(|m| m.as_str().to_string())
        })
        .unwrap_or_else(|| "0".to_string())
}

/// Text after the "Module categories:" label
pub fn extract_status(document: &Html) -> String {
    select_containing(document, PROJECT_INFO_ITEM, "Module categories")
        .first()
        .map(|item| {
            element_text(item)
                .replacen(CATEGORIES_LABEL, "", 1)
                .trim()
                .to_string()
        })
        .unwrap_or_default()
}

/// Composer snippet from the copy-to-clipboard widget
pub fn extract_composer_command(document: &Html) -> String {
    select_first_text(document, ".drupalorg-copy.composer-command").unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT_INFO: &str = r#"
    <div class="project-info">
        <ul>
            <li>Maintenance status: Actively maintained</li>
            <li>Module categories: Content Display, Developer Tools</li>
            <li><strong>Reported installs:</strong> <a href="/project/usage/views">932,117 sites report</a> using this module</li>
        </ul>
    </div>
    <div class="drupalorg-copy composer-command"> composer require 'drupal/views:^3.0' </div>
    <div class="drupalorg-copy composer-command">composer require 'drupal/views:^4.0'</div>
    "#;

    #[test]
    fn test_extract_downloads() {
        let html = Html::parse_document(PROJECT_INFO);
        assert_eq!(extract_downloads(&html), "932,117");
    }

    #[test]
    fn test_extract_downloads_without_grouping() {
        let html = Html::parse_document(
            r#"<div class="project-info"><ul><li>42 sites report using this module</li></ul></div>"#,
        );
        assert_eq!(extract_downloads(&html), "0");
    }

    #[test]
    fn test_extract_status() {
        let html = Html::parse_document(PROJECT_INFO);
        assert_eq!(extract_status(&html), "Content Display, Developer Tools");
    }

    #[test]
    fn test_extract_composer_command_first() {
        let html = Html::parse_document(PROJECT_INFO);
        assert_eq!(
            extract_composer_command(&html),
            "composer require 'drupal/views:^3.0'"
        );
    }

    #[test]
    fn test_missing_project_info() {
        let html = Html::parse_document("<ul><li>1,000 sites report</li></ul>");
        assert_eq!(extract_downloads(&html), "0");
        assert_eq!(extract_status(&html), "");
        assert_eq!(extract_composer_command(&html), "");
    }
}
