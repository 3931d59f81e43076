use crate::config::types::{Config, MeetingEntry};
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_base_url(&config.base_url)?;
    validate_output(&config.output.root_dir)?;
    validate_meetings(&config.meetings)?;
    Ok(())
}

/// Validates the base URL: must parse and use an HTTP(S) scheme
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    Ok(())
}

/// Validates the output configuration
fn validate_output(root_dir: &str) -> Result<(), ConfigError> {
    if root_dir.is_empty() {
        return Err(ConfigError::Validation(
            "output root-dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the meeting table
fn validate_meetings(meetings: &[MeetingEntry]) -> Result<(), ConfigError> {
    if meetings.is_empty() {
        return Err(ConfigError::Validation(
            "at least one meeting entry is required".to_string(),
        ));
    }

    let mut seen_years = HashSet::new();
    for entry in meetings {
        // Year doubles as the output directory name; the audit expects a
        // four-digit year segment in every date line.
        if entry.year < 1000 {
            return Err(ConfigError::Validation(format!(
                "meeting year must have four digits, got {}",
                entry.year
            )));
        }

        if !seen_years.insert(entry.year) {
            return Err(ConfigError::Validation(format!(
                "duplicate meeting year {}",
                entry.year
            )));
        }

        validate_meeting_code(&entry.code)?;
    }

    Ok(())
}

/// Validates a meeting URL code (e.g. "DNP19", "HAW05")
fn validate_meeting_code(code: &str) -> Result<(), ConfigError> {
    if code.is_empty() {
        return Err(ConfigError::Validation(
            "meeting code cannot be empty".to_string(),
        ));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConfigError::Validation(format!(
            "meeting code '{}' must be alphanumeric",
            code
        )));
    }

    Ok(())
}
