//! CLI configuration file support
//!
//! An optional TOML file supplies defaults for the CLI: the notation
//! used when no `--format` is given and the log file path. A missing
//! file falls back to built-in defaults; a present but invalid file
//! is an error.
//!
//! ```toml
//! [output]
//! format = "dd"
//!
//! [log]
//! file = "coordkit.log"
//! ```

use std::fs;
use std::path::Path;

use crate::geo::errors::{GeoError, GeoResult};
use crate::geo::format::{Format, FormatFactory};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "coordkit.toml";

/// Default log file path
const DEFAULT_LOG_FILE: &str = "coordkit.log";

/// Settings read from the optional CLI configuration file
#[derive(Debug)]
pub struct CliConfig {
    /// Notation used for reports when no --format is given
    pub default_format: Format,
    /// Path of the command log file
    pub log_file: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            default_format: Format::DecimalDegrees,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl CliConfig {
    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(GeoError::GenericError(format!("Failed to parse config: {}", e))),
        };

        let mut config = CliConfig::default();

        if let Some(name) = toml_value
            .get("output")
            .and_then(|t| t.get("format"))
            .and_then(|v| v.as_str())
        {
            config.default_format = FormatFactory::from_name(name)?;
        }

        if let Some(file) = toml_value
            .get("log")
            .and_then(|t| t.get("file"))
            .and_then(|v| v.as_str())
        {
            config.log_file = file.to_string();
        }

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> GeoResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(GeoError::IoError(e)),
        };
        Self::from_str(&contents)
    }

    /// Load configuration from the given path when the file exists,
    /// falling back to defaults otherwise
    pub fn load_or_default(path: &str) -> GeoResult<Self> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            Ok(CliConfig::default())
        }
    }
}
