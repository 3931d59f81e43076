//! Session-page extraction
//!
//! A session index page yields a [`SessionContext`]: the session date and
//! the unique session heading. Date recovery tries an ordered list of
//! layout strategies; the first hit wins, and the failure diagnostics of
//! every strategy are reported when none applies.

use crate::extract::date::reformat_long_date;
use crate::extract::{element_text, select_all};
use crate::record::SessionContext;
use crate::{ExtractError, ExtractResult};
use scraper::Html;

/// Placeholder anchor text on participant rows that carry no date
const NOT_PARTICIPATING: &str = "Not Participating";

/// Outcome of one date-recovery strategy
enum DateOutcome {
    /// The strategy found a candidate "Month Day, Year" literal
    Found(String),

    /// The strategy does not apply to this page layout
    Skip(String),
}

/// Extracts the session context from a parsed session index page
pub fn extract_session(document: &Html) -> ExtractResult<SessionContext> {
    let date_text = session_date_text(document)?;
    let date = reformat_long_date(&date_text)?;
    let name = session_heading(document)?;
    let code = session_code(&name)?;
    Ok(SessionContext { date, code, name })
}

/// Runs the date strategies in order; first success wins
fn session_date_text(document: &Html) -> ExtractResult<String> {
    type Strategy = fn(&Html) -> ExtractResult<DateOutcome>;
    const STRATEGIES: [(&str, Strategy); 2] = [
        ("participant anchors", participant_anchor_date),
        ("legacy font block", legacy_font_date),
    ];

    let mut attempts = Vec::new();
    for (label, strategy) in STRATEGIES {
        match strategy(document)? {
            DateOutcome::Found(text) => return Ok(text),
            DateOutcome::Skip(reason) => attempts.push(format!("{}: {}", label, reason)),
        }
    }

    Err(ExtractError::NoDate {
        attempts: attempts.join("; "),
    })
}

/// Modern layout: participant rows are `<a>` elements without an href,
/// each reading `Weekday, Month Day, Year`
///
/// Every participant shares the session date, so two differing remainders
/// are a data-integrity failure rather than a layout variant.
fn participant_anchor_date(document: &Html) -> ExtractResult<DateOutcome> {
    let mut dates = Vec::new();

    for anchor in select_all(document, "a") {
        if anchor.value().attr("href").is_some() {
            continue;
        }
        let text = element_text(&anchor);
        if text.is_empty() || text == NOT_PARTICIPATING {
            continue;
        }
        match text.split_once(',') {
            Some((_, rest)) => dates.push(rest.trim().to_string()),
            None => {
                return Ok(DateOutcome::Skip(format!(
                    "anchor text {:?} has no comma",
                    text
                )))
            }
        }
    }

    match dates.split_first() {
        None => Ok(DateOutcome::Skip(
            "no hyperlink-less participant anchors".to_string(),
        )),
        Some((first, rest)) => {
            for other in rest {
                if other != first {
                    return Err(ExtractError::DateDisagreement {
                        first: first.clone(),
                        other: other.clone(),
                    });
                }
            }
            Ok(DateOutcome::Found(first.clone()))
        }
    }
}

/// Older layout: the date sits on the second line of the first
/// `<font size="-1">` block, again behind a weekday prefix
fn legacy_font_date(document: &Html) -> ExtractResult<DateOutcome> {
    let blocks = select_all(document, r#"font[size="-1"]"#);
    let block = match blocks.first() {
        Some(block) => block,
        None => {
            return Ok(DateOutcome::Skip(
                "no <font size=\"-1\"> block".to_string(),
            ))
        }
    };

    let text = element_text(block);
    let line = match text.split('\n').nth(1) {
        Some(line) => line,
        None => {
            return Ok(DateOutcome::Skip(
                "font block has fewer than two lines".to_string(),
            ))
        }
    };

    match line.split_once(',') {
        Some((_, rest)) => Ok(DateOutcome::Found(rest.trim().to_string())),
        None => Ok(DateOutcome::Skip(format!(
            "font block line {:?} has no comma",
            line
        ))),
    }
}

/// Finds the single `<h3>` containing both `Session` and a colon
fn session_heading(document: &Html) -> ExtractResult<String> {
    let matches: Vec<String> = select_all(document, "h3")
        .iter()
        .map(element_text)
        .filter(|text| text.contains("Session") && text.contains(':'))
        .collect();

    match matches.as_slice() {
        [heading] => Ok(heading.clone()),
        _ => Err(ExtractError::AmbiguousHeading {
            wanted: "Session",
            found: matches.len(),
        }),
    }
}

/// Parses the short session code out of a `Session <code>: ...` heading
fn session_code(name: &str) -> ExtractResult<String> {
    name.trim_start()
        .strip_prefix("Session")
        .and_then(|rest| rest.split(':').next())
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
        .ok_or_else(|| ExtractError::MalformedHeading {
            heading: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    const MODERN_SESSION: &str = r#"
        <html><body>
        <h3>Session CA: Nuclear Structure</h3>
        <table>
            <tr><td><a href="/Session/CA.1">CA.00001: A Study of Nuclei</a></td>
                <td><a>Saturday, October 12, 2019</a></td></tr>
            <tr><td><a href="/Session/CA.2">CA.00002: Another Study</a></td>
                <td><a>Saturday, October 12, 2019</a></td></tr>
            <tr><td></td><td><a>Not Participating</a></td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_modern_layout() {
        let context = extract_session(&parse(MODERN_SESSION)).unwrap();
        assert_eq!(context.date, "10/12/2019");
        assert_eq!(context.code, "CA");
        assert_eq!(context.name, "Session CA: Nuclear Structure");
    }

    #[test]
    fn test_date_disagreement_is_fatal() {
        let html = r#"
            <html><body>
            <h3>Session CA: Nuclear Structure</h3>
            <a>Saturday, October 12, 2019</a>
            <a>Sunday, October 13, 2019</a>
            </body></html>
        "#;
        assert!(matches!(
            extract_session(&parse(html)),
            Err(ExtractError::DateDisagreement { .. })
        ));
    }

    #[test]
    fn test_legacy_font_fallback() {
        let html = r#"
            <html><body>
            <h3>Session BB: Heavy Ions</h3>
            <a href="/Session/BB.1">BB.00001: Collisions</a>
            <font size="-1">Session BB
Saturday, October 22, 2005</font>
            </body></html>
        "#;
        let context = extract_session(&parse(html)).unwrap();
        assert_eq!(context.date, "10/22/2005");
        assert_eq!(context.code, "BB");
    }

    #[test]
    fn test_no_date_reports_all_strategies() {
        let html = r#"
            <html><body>
            <h3>Session CA: Nuclear Structure</h3>
            <a href="/somewhere">a link</a>
            </body></html>
        "#;
        match extract_session(&parse(html)) {
            Err(ExtractError::NoDate { attempts }) => {
                assert!(attempts.contains("participant anchors"));
                assert!(attempts.contains("legacy font block"));
            }
            other => panic!("expected NoDate, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_date_is_fatal() {
        let html = r#"
            <html><body>
            <h3>Session CA: Nuclear Structure</h3>
            <a>Saturday, sometime in October</a>
            </body></html>
        "#;
        assert!(matches!(
            extract_session(&parse(html)),
            Err(ExtractError::UnparseableDate { .. })
        ));
    }

    #[test]
    fn test_missing_session_heading() {
        let html = r#"
            <html><body>
            <h3>Plenary Program</h3>
            <a>Saturday, October 12, 2019</a>
            </body></html>
        "#;
        assert!(matches!(
            extract_session(&parse(html)),
            Err(ExtractError::AmbiguousHeading { found: 0, .. })
        ));
    }

    #[test]
    fn test_two_session_headings_are_ambiguous() {
        let html = r#"
            <html><body>
            <h3>Session CA: Nuclear Structure</h3>
            <h3>Session CB: Nuclear Astrophysics</h3>
            <a>Saturday, October 12, 2019</a>
            </body></html>
        "#;
        assert!(matches!(
            extract_session(&parse(html)),
            Err(ExtractError::AmbiguousHeading { found: 2, .. })
        ));
    }

    #[test]
    fn test_heading_without_colon_is_not_counted() {
        let html = r#"
            <html><body>
            <h3>Session Overview</h3>
            <h3>Session CA: Nuclear Structure</h3>
            <a>Saturday, October 12, 2019</a>
            </body></html>
        "#;
        let context = extract_session(&parse(html)).unwrap();
        assert_eq!(context.name, "Session CA: Nuclear Structure");
    }

    #[test]
    fn test_session_code_shapes() {
        assert_eq!(session_code("Session CA: Nuclear Structure").unwrap(), "CA");
        assert_eq!(session_code("Session DNP: Plenary: Opening").unwrap(), "DNP");
        assert!(session_code("Workshop CA: Nuclei").is_err());
        assert!(session_code("Session : Untitled").is_err());
    }
}
