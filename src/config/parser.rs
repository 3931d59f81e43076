use crate::config::types::{Config, MeetingEntry, OutputConfig};
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Default base URL of the APS meeting site
pub(crate) fn default_base_url() -> String {
    "https://meetings.aps.org".to_string()
}

/// Default root directory for the persisted abstract tree
pub(crate) fn default_root_dir() -> String {
    "abstracts".to_string()
}

/// The built-in meeting table: every DNP fall meeting from 2005 to 2021
///
/// Hawaii joint meetings carry a HAW code instead of the usual DNP one.
pub(crate) fn builtin_meetings() -> Vec<MeetingEntry> {
    const MEETINGS: &[(u16, &str)] = &[
        (2005, "HAW05"),
        (2006, "DNP06"),
        (2007, "DNP07"),
        (2008, "DNP08"),
        (2009, "HAW09"),
        (2010, "DNP10"),
        (2011, "DNP11"),
        (2012, "DNP12"),
        (2013, "DNP13"),
        (2014, "HAW14"),
        (2015, "DNP15"),
        (2016, "DNP16"),
        (2017, "DNP17"),
        (2018, "HAW18"),
        (2019, "DNP19"),
        (2020, "DNP20"),
        (2021, "DNP21"),
    ];

    MEETINGS
        .iter()
        .map(|&(year, code)| MeetingEntry {
            year,
            code: code.to_string(),
        })
        .collect()
}

/// Returns the compiled-in default configuration
pub fn builtin_config() -> Config {
    Config {
        base_url: default_base_url(),
        output: OutputConfig {
            root_dir: default_root_dir(),
        },
        meetings: builtin_meetings(),
    }
}

/// Loads and validates a configuration file from the given path
///
/// Fields absent from the file fall back to the built-in defaults.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_builtin_config_is_valid() {
        let config = builtin_config();
        validate(&config).unwrap();
        assert_eq!(config.meetings.len(), 17);
        assert_eq!(config.meetings[0].year, 2005);
        assert_eq!(config.meetings[0].code, "HAW05");
        assert_eq!(config.meetings[16].code, "DNP21");
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
base-url = "https://meetings.aps.org"

[output]
root-dir = "./abstracts"

[[meetings]]
year = 2019
code = "DNP19"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.meetings.len(), 1);
        assert_eq!(config.meetings[0].year, 2019);
        assert_eq!(config.output.root_dir, "./abstracts");
    }

    #[test]
    fn test_load_config_defaults_to_builtin_meetings() {
        let config_content = r#"
[output]
root-dir = "./out"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.meetings.len(), 17);
        assert_eq!(config.base_url, "https://meetings.aps.org");
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let config_content = "this is not valid TOML {{{";
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[[meetings]]
year = 2019
code = ""
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
