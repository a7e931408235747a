//! Project body as plain text
//!
//! Markup is dropped, but link targets are kept by rendering every anchor
//! inline as `text (href)`.

use scraper::node::Node;
use scraper::{ElementRef, Html};

use super::css_extractor::{element_text, parse_selector};

/// Plain text of every `.field-name-body` node, links inlined
pub fn extract_readme(document: &Html) -> String {
    let selector = match parse_selector(".field-name-body") {
        Some(s) => s,
        None => return String::new(),
    };

    let mut text = String::new();
    for body in document.select(&selector) {
        push_inline_text(body, &mut text);
    }

    text.trim().to_string()
}

fn push_inline_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                let Some(child_element) = ElementRef::wrap(child) else {
                    continue;
                };
                if child_element.value().name() == "a" {
                    push_link(child_element, out);
                } else {
                    push_inline_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

fn push_link(link: ElementRef<'_>, out: &mut String) {
    let label = element_text(&link);
    let label = label.trim();

    match link.value().attr("href") {
        Some(href) => {
            out.push_str(label);
            out.push_str(" (");
            out.push_str(href);
            out.push(')');
        }
        None => out.push_str(label),
    }
}
