//! APS-Harvest: an abstract harvester for APS DNP meetings
//!
//! This crate crawls the session pages of APS Division of Nuclear Physics
//! meetings, extracts structured abstract records from the hand-authored
//! HTML, cross-checks session-level against abstract-level data, and
//! persists one flat text record per abstract.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod record;

use thiserror::Error;

/// Main error type for harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Extraction failed for {url}: {source}")]
    Extract {
        url: String,
        #[source]
        source: ExtractError,
    },

    #[error("Cross-validation mismatch for {url}: {field} is {found:?} but session page said {expected:?}")]
    Validation {
        url: String,
        field: &'static str,
        expected: String,
        found: String,
    },

    #[error("Refusing to persist record with empty {field}")]
    IncompleteRecord { field: &'static str },

    #[error("Audit error: {0}")]
    Audit(#[from] AuditError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while extracting fields from a parsed page
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Expected exactly one <h3> containing {wanted:?}, found {found}")]
    AmbiguousHeading { wanted: &'static str, found: usize },

    #[error("Heading {heading:?} does not have the expected \"label: value\" shape")]
    MalformedHeading { heading: String },

    #[error("Missing <meta name={name:?}> content")]
    MissingMeta { name: &'static str },

    #[error("Expected at most one abstract body block, found {found}")]
    AmbiguousBody { found: usize },

    #[error("Session date disagreement: {first:?} vs {other:?}")]
    DateDisagreement { first: String, other: String },

    #[error("No session date found ({attempts})")]
    NoDate { attempts: String },

    #[error("Unparseable date {text:?}, expected \"Month Day, Year\"")]
    UnparseableDate { text: String },

    #[error("Abstract link text {text:?} has no \"identifier: title\" colon")]
    MalformedLinkText { text: String },
}

/// Violations found by the post-crawl format audit
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("{path}: expected 6 lines, found {found}")]
    WrongLineCount { path: String, found: usize },

    #[error("{path}: malformed date line {date:?}")]
    BadDate { path: String, date: String },

    #[error("{path}: date year {year:?} does not match directory {directory:?}")]
    YearMismatch {
        path: String,
        year: String,
        directory: String,
    },

    #[error("{path}: identifier {identifier:?} does not match filename")]
    IdentifierFilenameMismatch { path: String, identifier: String },

    #[error("{path}: malformed identifier {identifier:?}")]
    BadIdentifier { path: String, identifier: String },

    #[error("{path}: session {session:?} does not start with \"Session {code}:\"")]
    BadSessionPrefix {
        path: String,
        session: String,
        code: String,
    },

    #[error("{path}: text line must start with \\n escape or NA")]
    BadTextPrefix { path: String },

    #[error("{path}: leaf directory is empty")]
    EmptyDirectory { path: String },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for extraction operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

// Re-export commonly used types
pub use config::{builtin_config, load_config, Config};
pub use crawler::Harvester;
pub use output::{audit_tree, AbstractStore};
pub use record::{AbstractRecord, SessionContext};
