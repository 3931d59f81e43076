//! Configuration module for APS-Harvest
//!
//! The meeting-year table and output paths are an immutable [`Config`]
//! value injected into the crawl driver. A built-in table covering the
//! 2005-2021 DNP meetings is compiled in; a TOML file can override it.
//!
//! # Example
//!
//! ```
//! use aps_harvest::config::builtin_config;
//!
//! let config = builtin_config();
//! assert_eq!(config.meetings.len(), 17);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, MeetingEntry, OutputConfig};

// Re-export parser functions
pub use parser::{builtin_config, load_config};

// Re-export validation entry point
pub use validation::validate;
