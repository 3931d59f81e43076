use serde::Deserialize;
use url::Url;

/// Main configuration structure for APS-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the meeting site
    #[serde(rename = "base-url", default = "super::parser::default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub output: OutputConfig,

    /// Meetings to harvest, one entry per year
    #[serde(default = "super::parser::builtin_meetings")]
    pub meetings: Vec<MeetingEntry>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Root directory of the persisted abstract tree
    #[serde(rename = "root-dir", default = "super::parser::default_root_dir")]
    pub root_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            root_dir: super::parser::default_root_dir(),
        }
    }
}

/// One meeting: a calendar year and the URL code of its epitome page
#[derive(Debug, Clone, Deserialize)]
pub struct MeetingEntry {
    /// Meeting year, also the name of the output subdirectory
    pub year: u16,

    /// URL path segment identifying the meeting (e.g. "DNP19", "HAW05")
    pub code: String,
}

impl Config {
    /// Builds the epitome index URL for a meeting code
    ///
    /// # Example
    ///
    /// ```
    /// use aps_harvest::config::builtin_config;
    ///
    /// let url = builtin_config().epitome_url("DNP19").unwrap();
    /// assert_eq!(
    ///     url.as_str(),
    ///     "https://meetings.aps.org/Meeting/DNP19/APS_epitome"
    /// );
    /// ```
    pub fn epitome_url(&self, code: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "{}/Meeting/{}/APS_epitome",
            self.base_url.trim_end_matches('/'),
            code
        ))
    }
}
