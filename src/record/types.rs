/// Sentinel written in place of absent authors or body text
pub const NOT_AVAILABLE: &str = "NA";

/// One abstract's structured metadata
///
/// `authors` and `text` are optional: withdrawn talks have no body, and
/// degraded records built from session data alone carry neither. Both are
/// written as the [`NOT_AVAILABLE`] sentinel, never as an empty string, so
/// downstream consumers can tell "absent" from "empty".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbstractRecord {
    /// Canonical `MM/DD/YYYY`, 10 characters
    pub date: String,

    /// `<session-code>.<5-digit-sequence>`, e.g. `CA.00001`
    pub identifier: String,

    /// Full session heading, starts with `Session <code>:`
    pub session: String,

    /// Talk title
    pub title: String,

    /// Author list
    pub authors: Option<String>,

    /// Abstract body
    pub text: Option<String>,
}

impl AbstractRecord {
    /// Maps empty optional fields to `None`
    ///
    /// Applied before every write so absent and empty collapse to the same
    /// sentinel. Idempotent.
    pub fn normalized(mut self) -> Self {
        self.authors = self.authors.filter(|a| !a.is_empty());
        self.text = self.text.filter(|t| !t.is_empty());
        self
    }
}

/// Session-level fields extracted once per session page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Session date, canonical `MM/DD/YYYY`
    pub date: String,

    /// Short session code (e.g. `CA`), parsed out of the heading
    pub code: String,

    /// Full session heading text
    pub name: String,
}

impl SessionContext {
    /// Builds a degraded record for one abstract link
    ///
    /// Date and session come from the context, identifier and title from
    /// the link's anchor text. Authors and body are unknown at this stage;
    /// the record is persisted as-is only when the abstract's own page
    /// cannot be extracted.
    pub fn degraded_record(&self, identifier: &str, title: &str) -> AbstractRecord {
        AbstractRecord {
            date: self.date.clone(),
            identifier: identifier.to_string(),
            session: self.name.clone(),
            title: title.to_string(),
            authors: None,
            text: None,
        }
    }
}
