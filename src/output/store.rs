//! Flat-file record store

use crate::record::{escape, AbstractRecord, NOT_AVAILABLE};
use crate::{HarvestError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes abstract records under `<root>/<year>/<identifier>`
///
/// Re-running a crawl overwrites same-named files; the store has no
/// skip-existing logic.
pub struct AbstractStore {
    root: PathBuf,
}

impl AbstractStore {
    /// Creates a store rooted at the given directory
    ///
    /// Directories are created lazily on the first save into them.
    pub fn new(root: impl AsRef<Path>) -> Self {
        AbstractStore {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The store's root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persists one record, returning the path written
    ///
    /// The record is normalized first, then rendered as six
    /// newline-terminated lines: date, identifier, session, title,
    /// authors, text. Absent authors/text become the `NA` sentinel; the
    /// body is escaped to a single physical line.
    pub fn save(&self, year: u16, record: &AbstractRecord) -> Result<PathBuf> {
        let record = record.clone().normalized();

        if record.identifier.is_empty() {
            return Err(HarvestError::IncompleteRecord {
                field: "identifier",
            });
        }
        if record.date.is_empty() {
            return Err(HarvestError::IncompleteRecord { field: "date" });
        }

        let year_dir = self.root.join(year.to_string());
        fs::create_dir_all(&year_dir)?;

        let path = year_dir.join(&record.identifier);
        fs::write(&path, render(&record))?;
        Ok(path)
    }
}

/// Renders a normalized record as the six-line file body
fn render(record: &AbstractRecord) -> String {
    let authors = record.authors.as_deref().unwrap_or(NOT_AVAILABLE);
    let text = match &record.text {
        Some(text) => escape(text),
        None => NOT_AVAILABLE.to_string(),
    };

    format!(
        "{}\n{}\n{}\n{}\n{}\n{}\n",
        record.date, record.identifier, record.session, record.title, authors, text
    )
}
