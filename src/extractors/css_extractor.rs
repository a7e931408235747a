//! CSS selector helpers shared by the field rules
//!
//! Uses the scraper crate to select elements by CSS selectors. An invalid
//! selector behaves like a selector that matches nothing.

use scraper::{ElementRef, Html, Selector};

/// Parse a selector, `None` if it is not valid CSS
pub fn parse_selector(selector_str: &str) -> Option<Selector> {
    Selector::parse(selector_str).ok()
}

/// Concatenated text content of an element, untrimmed
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Extract trimmed text content from every element matching a CSS selector
pub fn select_texts(document: &Html, selector_str: &str) -> Vec<String> {
    let selector = match parse_selector(selector_str) {
        Some(s) => s,
        None => return vec![],
    };

    document
        .select(&selector)
        .map(|el| element_text(&el).trim().to_string())
        .collect()
}

/// Extract first matching element's trimmed text
pub fn select_first_text(document: &Html, selector_str: &str) -> Option<String> {
    let selector = parse_selector(selector_str)?;

    document
        .select(&selector)
        .next()
        .map(|el| element_text(&el).trim().to_string())
}

/// Extract first matching element's attribute
pub fn select_first_attr(document: &Html, selector_str: &str, attr_name: &str) -> Option<String> {
    let selector = parse_selector(selector_str)?;

    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr(attr_name).map(String::from))
}

/// Elements matching `selector_str` whose text contains `needle`
///
/// Equivalent of a `:contains()` pseudo-class, which scraper does not
/// support. Matches are in document order, so an ancestor comes before
/// its descendants.
pub fn select_containing<'a>(
    document: &'a Html,
    selector_str: &str,
    needle: &str,
) -> Vec<ElementRef<'a>> {
    let selector = match parse_selector(selector_str) {
        Some(s) => s,
        None => return vec![],
    };

    document
        .select(&selector)
        .filter(|el| element_text(el).contains(needle))
        .collect()
}
