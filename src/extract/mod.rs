//! Field extraction from parsed meeting pages
//!
//! The meeting site is hand-authored HTML whose layout drifted over a
//! 17-year publication history. This module recovers structured fields
//! from the two page kinds:
//! - session index pages ([`extract_session`]): date + session heading
//! - abstract pages ([`extract_abstract`]): the full record
//!
//! Layout variants are handled by an explicit ordered strategy list, not
//! by catch-and-retry.

mod abstract_page;
mod date;
mod session;

pub use abstract_page::extract_abstract;
pub use date::reformat_long_date;
pub use session::extract_session;

use scraper::{ElementRef, Html, Selector};

/// Collects every element matching a static CSS selector
pub(crate) fn select_all<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// Concatenated text content of an element
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Finds the text of the single `<h3>` containing `needle`
///
/// Zero or multiple matches is a layout-assumption violation.
pub(crate) fn sole_heading(
    document: &Html,
    needle: &'static str,
) -> crate::ExtractResult<String> {
    let matches: Vec<String> = select_all(document, "h3")
        .iter()
        .map(element_text)
        .filter(|text| text.contains(needle))
        .collect();

    match matches.as_slice() {
        [heading] => Ok(heading.clone()),
        _ => Err(crate::ExtractError::AmbiguousHeading {
            wanted: needle,
            found: matches.len(),
        }),
    }
}
