use chrono::NaiveDate;
use serde::Deserialize;
use slogger_chart_loader::QueryParams;
use slogger_plotly_processor::{DisplayOptions, PlotToggles};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Url(url::ParseError),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err)
    }
}

impl From<url::ParseError> for ConfigError {
    fn from(err: url::ParseError) -> Self {
        ConfigError::Url(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Serde(err) => write!(f, "Serde error: {}", err),
            ConfigError::Url(err) => write!(f, "Invalid URL: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

fn default_output_dir() -> String {
    "charts".to_string()
}

fn default_percentiles() -> Vec<String> {
    vec!["weight".to_string(), "height".to_string()]
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(rename = "childId")]
    pub child_id: u32,
    #[serde(rename = "outputDir", default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub plots: PlotToggles,
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default = "default_percentiles")]
    pub percentiles: Vec<String>,
    #[serde(rename = "plotlySrc", default)]
    pub plotly_src: Option<String>,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions { plots: self.plots }
    }

    /// The date filter only applies when both ends are configured.
    pub fn query(&self) -> QueryParams {
        match (self.from, self.to) {
            (Some(from), Some(to)) => QueryParams::new().with_date_range(from, to),
            _ => QueryParams::new(),
        }
    }
}
