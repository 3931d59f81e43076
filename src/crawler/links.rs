//! Link discovery on index pages
//!
//! Session and abstract URLs are never constructed; they are discovered by
//! following relative hyperlinks on the previously fetched page, resolved
//! against that page's own URL.

use crate::extract::{element_text, select_all};
use crate::{ExtractError, ExtractResult};
use scraper::Html;
use url::Url;

/// One abstract link on a session page
///
/// The anchor text reads `<identifier>: <title>`; both halves seed the
/// degraded record before the abstract's own page is fetched.
#[derive(Debug, Clone)]
pub struct AbstractLink {
    /// Resolved URL of the abstract page
    pub url: Url,

    /// Identifier from the anchor text, e.g. `CA.00001`
    pub identifier: String,

    /// Title from the anchor text
    pub title: String,
}

/// Discovers session links on an epitome page
///
/// Matches every `<a href>` whose href contains `Session`, de-duplicated
/// and sorted by href so sessions are visited in a stable order.
pub fn session_links(document: &Html, base_url: &Url) -> Vec<Url> {
    let mut hrefs: Vec<&str> = select_all(document, "a[href]")
        .iter()
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| href.contains("Session"))
        .collect();
    hrefs.sort_unstable();
    hrefs.dedup();

    hrefs
        .into_iter()
        .filter_map(|href| resolve(href, base_url))
        .collect()
}

/// Discovers abstract links on a session page, in document order
///
/// Matches `<a href>` where the href contains `/Session/` but not
/// `showAbstract` (those open the inline popup variant of the same page).
pub fn abstract_links(document: &Html, base_url: &Url) -> ExtractResult<Vec<AbstractLink>> {
    let mut links = Vec::new();

    for anchor in select_all(document, "a[href]") {
        let href = match anchor.value().attr("href") {
            Some(href) => href,
            None => continue,
        };
        if !href.contains("/Session/") || href.contains("showAbstract") {
            continue;
        }

        let url = match resolve(href, base_url) {
            Some(url) => url,
            None => continue,
        };

        let text = element_text(&anchor);
        let (identifier, title) =
            text.split_once(':')
                .ok_or_else(|| ExtractError::MalformedLinkText {
                    text: text.clone(),
                })?;

        links.push(AbstractLink {
            url,
            identifier: identifier.trim().to_string(),
            title: title.trim().to_string(),
        });
    }

    Ok(links)
}

/// Resolves an href against the page it was found on
fn resolve(href: &str, base_url: &Url) -> Option<Url> {
    match base_url.join(href) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::debug!("Failed to resolve href {:?}: {}", href, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    fn base_url() -> Url {
        Url::parse("https://meetings.aps.org/Meeting/DNP19/APS_epitome").unwrap()
    }

    #[test]
    fn test_session_links_filter_and_sort() {
        let html = r#"
            <html><body>
            <a href="/Meeting/DNP19/Session/CB">Session CB</a>
            <a href="/Meeting/DNP19/Session/CA">Session CA</a>
            <a href="/Meeting/DNP19/Content/3771">Program</a>
            <a href="/Meeting/DNP19/Session/CA">Session CA again</a>
            </body></html>
        "#;
        let links = session_links(&parse(html), &base_url());
        let paths: Vec<&str> = links.iter().map(Url::path).collect();
        assert_eq!(
            paths,
            vec!["/Meeting/DNP19/Session/CA", "/Meeting/DNP19/Session/CB"]
        );
    }

    #[test]
    fn test_session_links_resolve_relative_hrefs() {
        let html = r#"<html><body><a href="Session/CA">Session CA</a></body></html>"#;
        let links = session_links(&parse(html), &base_url());
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].path(), "/Meeting/DNP19/Session/CA");
    }

    #[test]
    fn test_abstract_links_filter() {
        let html = r#"
            <html><body>
            <a href="/Meeting/DNP19/Session/CA.1">CA.00001: A Study of Nuclei</a>
            <a href="/Meeting/DNP19/Session/CA.2?showAbstract=yes">CA.00002: Popup</a>
            <a href="/Meeting/DNP19/Content/3771">Not an abstract</a>
            <a href="/Meeting/DNP19/Session/CA.3">CA.00003: Another Study</a>
            </body></html>
        "#;
        let links = abstract_links(&parse(html), &base_url()).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].identifier, "CA.00001");
        assert_eq!(links[0].title, "A Study of Nuclei");
        assert_eq!(links[1].identifier, "CA.00003");
    }

    #[test]
    fn test_abstract_links_keep_document_order() {
        let html = r#"
            <html><body>
            <a href="/Session/CA.2">CA.00002: Second</a>
            <a href="/Session/CA.1">CA.00001: First</a>
            </body></html>
        "#;
        let links = abstract_links(&parse(html), &base_url()).unwrap();
        assert_eq!(links[0].identifier, "CA.00002");
        assert_eq!(links[1].identifier, "CA.00001");
    }

    #[test]
    fn test_abstract_link_title_keeps_later_colons() {
        let html = r#"
            <html><body>
            <a href="/Session/CA.1">CA.00001: Fission: A Review</a>
            </body></html>
        "#;
        let links = abstract_links(&parse(html), &base_url()).unwrap();
        assert_eq!(links[0].title, "Fission: A Review");
    }

    #[test]
    fn test_malformed_anchor_text_is_an_error() {
        let html = r#"
            <html><body>
            <a href="/Session/CA.1">no colon here</a>
            </body></html>
        "#;
        assert!(matches!(
            abstract_links(&parse(html), &base_url()),
            Err(ExtractError::MalformedLinkText { .. })
        ));
    }
}
