//! Abstract-page extraction
//!
//! An abstract's own page carries the full record: `citation_*` metadata
//! tags, the abstract and session headings, and the body block. Structural
//! failures here are what the crawl driver degrades on, so every missing
//! or ambiguous element maps to a distinct [`ExtractError`].

use crate::extract::{element_text, select_all, sole_heading};
use crate::record::AbstractRecord;
use crate::{ExtractError, ExtractResult};
use scraper::Html;

/// CSS signature of the abstract body block
const BODY_SELECTOR: &str = r#"div.largernormal[style="margin-bottom: 1em;"]"#;

/// Extracts the full record from a parsed abstract page
pub fn extract_abstract(document: &Html) -> ExtractResult<AbstractRecord> {
    let date = meta_content(document, "citation_date")?;
    let identifier = identifier_heading(document)?;
    let session = sole_heading(document, "Session")?;
    let title = meta_content(document, "citation_title")?;
    let authors = meta_content(document, "citation_authors")?;
    let text = body_text(document)?;

    Ok(AbstractRecord {
        date,
        identifier,
        session,
        title,
        authors: Some(authors),
        text,
    })
}

/// The `content` attribute of the first `<meta name=...>` tag
fn meta_content(document: &Html, name: &'static str) -> ExtractResult<String> {
    let css = format!(r#"meta[name="{}"]"#, name);
    select_all(document, &css)
        .first()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
        .ok_or(ExtractError::MissingMeta { name })
}

/// Identifier from the unique `Abstract: <identifier>` heading
fn identifier_heading(document: &Html) -> ExtractResult<String> {
    let heading = sole_heading(document, "Abstract")?;
    heading
        .split(':')
        .nth(1)
        .map(|segment| segment.trim().to_string())
        .ok_or(ExtractError::MalformedHeading { heading })
}

/// The abstract body, when present
///
/// Withdrawn talks have no body block; that is the absent sentinel, not an
/// error. More than one block is a layout-assumption violation.
fn body_text(document: &Html) -> ExtractResult<Option<String>> {
    let blocks = select_all(document, BODY_SELECTOR);
    match blocks.as_slice() {
        [] => Ok(None),
        [block] => Ok(Some(element_text(block))),
        _ => Err(ExtractError::AmbiguousBody {
            found: blocks.len(),
        }),
    }
}
