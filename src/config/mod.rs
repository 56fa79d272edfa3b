pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_BASE_DIR: &str = ".";
pub const DEFAULT_DATA_FILE: &str = "land_data.json";
pub const DEFAULT_REPORT_FILE: &str = "land_report.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, clap::Parser)]
#[command(name = "parcel-registry")]
#[command(about = "Track land parcels, record observed use and report use violations")]
pub struct CliConfig {
    #[arg(short, long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Directory the data and report files are resolved against")]
    pub base_dir: Option<String>,

    #[arg(long, help = "Parcel store file [default: land_data.json]")]
    pub data_file: Option<String>,

    #[arg(long, help = "Report output file [default: land_report.txt]")]
    pub report_file: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Defaults, then the config file if one was given, then flags.
    pub fn resolve(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let mut config = AppConfig::from_toml(file);
        if let Some(base_dir) = &self.base_dir {
            config.base_dir = base_dir.clone();
        }
        if let Some(data_file) = &self.data_file {
            config.data_file = data_file.clone();
        }
        if let Some(report_file) = &self.report_file {
            config.report_file = report_file.clone();
        }
        config.verbose |= self.verbose;

        Ok(config)
    }
}

/// Fully resolved settings the binary runs with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_dir: String,
    pub data_file: String,
    pub report_file: String,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_dir: DEFAULT_BASE_DIR.to_string(),
            data_file: DEFAULT_DATA_FILE.to_string(),
            report_file: DEFAULT_REPORT_FILE.to_string(),
            verbose: false,
        }
    }
}

impl AppConfig {
    pub fn from_toml(file: TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            base_dir: file.storage.base_dir.unwrap_or(defaults.base_dir),
            data_file: file.storage.data_file.unwrap_or(defaults.data_file),
            report_file: file.storage.report_file.unwrap_or(defaults.report_file),
            verbose: file.logging.verbose.unwrap_or(defaults.verbose),
        }
    }
}

impl ConfigProvider for AppConfig {
    fn base_dir(&self) -> &str {
        &self.base_dir
    }

    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn report_file(&self) -> &str {
        &self.report_file
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("base_dir", &self.base_dir)?;
        validate_path("data_file", &self.data_file)?;
        validate_path("report_file", &self.report_file)?;
        validate_distinct_paths("report_file", &self.data_file, &self.report_file)
    }
}
