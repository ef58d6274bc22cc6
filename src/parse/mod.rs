//! HTML parsing.
//!
//! Extracts the page title used by the keyword signals. Parsing is done with
//! CSS selectors via the `scraper` crate and never fails: malformed markup is
//! parsed leniently and a missing title yields an empty string.

mod html;

// Re-export public API
pub use html::extract_page_title;
