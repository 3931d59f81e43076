//! Post-crawl format audit
//!
//! Walks the persisted tree and re-parses every record, asserting the
//! on-disk invariants: six lines, canonical date whose year matches the
//! enclosing directory, identifier matching the filename and the
//! `<code>.<NNNNN>` shape, session heading prefixed with the code, and a
//! body line that is either escaped text or the `NA` sentinel. The first
//! violation aborts with the offending path; nothing is repaired.

use crate::AuditError;
use std::fs;
use std::path::Path;

/// Summary of a completed audit pass
#[derive(Debug, Clone, Copy)]
pub struct AuditReport {
    /// Number of record files checked
    pub files_checked: usize,
}

/// Audits the persisted tree rooted at `root`
///
/// # Returns
///
/// * `Ok(AuditReport)` - Every record passed
/// * `Err(AuditError)` - First violation found, with the offending path
pub fn audit_tree(root: &Path) -> Result<AuditReport, AuditError> {
    let mut files_checked = 0;
    audit_dir(root, &mut files_checked)?;
    Ok(AuditReport { files_checked })
}

/// Recursively audits one directory
///
/// Leaf directories (no subdirectories) must be non-empty and contain only
/// valid record files.
fn audit_dir(dir: &Path, files_checked: &mut usize) -> Result<(), AuditError> {
    let entries = fs::read_dir(dir).map_err(|source| AuditError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut subdirs = Vec::new();
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| AuditError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else {
            files.push(path);
        }
    }
    subdirs.sort();
    files.sort();

    if subdirs.is_empty() {
        if files.is_empty() {
            return Err(AuditError::EmptyDirectory {
                path: dir.display().to_string(),
            });
        }
        for file in &files {
            audit_file(file)?;
            *files_checked += 1;
        }
        return Ok(());
    }

    for subdir in &subdirs {
        audit_dir(subdir, files_checked)?;
    }
    Ok(())
}

/// Re-parses one record file and asserts every field invariant
fn audit_file(path: &Path) -> Result<(), AuditError> {
    let display = path.display().to_string();
    tracing::debug!("Auditing {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| AuditError::Io {
        path: display.clone(),
        source,
    })?;

    let lines: Vec<&str> = content.lines().collect();
    let [date, identifier, session, _title, _authors, text] = lines.as_slice() else {
        return Err(AuditError::WrongLineCount {
            path: display,
            found: lines.len(),
        });
    };

    // Date: MM/DD/YYYY with decimal groups
    if !is_canonical_date(date) {
        return Err(AuditError::BadDate {
            path: display,
            date: date.to_string(),
        });
    }

    // Year segment matches the enclosing directory name
    let directory = path
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let year = &date[6..];
    if year != directory {
        return Err(AuditError::YearMismatch {
            path: display,
            year: year.to_string(),
            directory,
        });
    }

    // Filename equals the record's own identifier
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    if *identifier != filename {
        return Err(AuditError::IdentifierFilenameMismatch {
            path: display,
            identifier: identifier.to_string(),
        });
    }

    // Identifier: <code>.<NNNNN>, code length 2-4, exactly one dot
    let code = match split_identifier(identifier) {
        Some(code) => code,
        None => {
            return Err(AuditError::BadIdentifier {
                path: display,
                identifier: identifier.to_string(),
            })
        }
    };

    // Session heading carries the identifier's code
    if !session.starts_with(&format!("Session {}:", code)) {
        return Err(AuditError::BadSessionPrefix {
            path: display,
            session: session.to_string(),
            code: code.to_string(),
        });
    }

    // Body line: escaped text or the NA sentinel
    if !text.starts_with("\\n") && !text.starts_with("NA") {
        return Err(AuditError::BadTextPrefix { path: display });
    }

    Ok(())
}

/// True for a `MM/DD/YYYY` literal with all-decimal groups
fn is_canonical_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && [&bytes[..2], &bytes[3..5], &bytes[6..]]
            .iter()
            .all(|group| group.iter().all(u8::is_ascii_digit))
}

/// Splits a well-formed identifier into its session code, or `None`
fn split_identifier(identifier: &str) -> Option<&str> {
    if identifier.matches('.').count() != 1 {
        return None;
    }
    let (code, sequence) = identifier.split_once('.')?;
    if !(2..=4).contains(&code.len()) {
        return None;
    }
    if sequence.len() != 5 || !sequence.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(code)
}
