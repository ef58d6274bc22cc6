//! Page title extraction.

use scraper::{Html, Selector};
use std::sync::LazyLock;

const TITLE_SELECTOR_STR: &str = "title";

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(TITLE_SELECTOR_STR).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse title selector '{}': {}",
            TITLE_SELECTOR_STR,
            e
        );
        crate::utils::parse_selector_unsafe("*:not(*)", "TITLE_SELECTOR fallback")
    })
});

/// Extracts the page title from an HTML document.
///
/// Returns the trimmed text content of the first `<title>` element, or an
/// empty string if the document has none.
pub fn extract_title(document: &Html) -> String {
    match document.select(&TITLE_SELECTOR).next() {
        Some(element) => {
            // text() decodes entities and flattens nested nodes
            let title = element.text().collect::<String>().trim().to_string();
            log::trace!("Extracted title text: '{}' (length: {})", title, title.len());
            title
        }
        None => {
            log::trace!("No title element found in document");
            String::new()
        }
    }
}

/// Parses `body` as HTML and extracts its title.
///
/// An empty body short-circuits to an empty title without invoking the parser.
pub fn extract_page_title(body: &str) -> String {
    if body.trim().is_empty() {
        return String::new();
    }
    let document = Html::parse_document(body);
    extract_title(&document)
}
