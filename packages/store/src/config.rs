//! # App configuration — `pigeonhole.toml`
//!
//! Defines the TOML configuration file read from the app data directory
//! (filename: [`AppConfig::filename`] = `"pigeonhole.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [layout]
//! wide_breakpoint = 600.0   # viewport widths strictly above this are "wide"
//! wide_columns = 3
//! narrow_columns = 2
//!
//! [storage]
//! in_memory = false         # true: nothing is written to disk
//!
//! [logging]
//! level = "info"            # trace | debug | info | warn | error
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config. TOML (de)serialisation and the canonical filename. |
//! | [`LayoutConfig`] | Column policy of the directory grid. |
//! | [`StorageConfig`] | Which table store backs the services. |
//! | [`LoggingConfig`] | Level for the tracing subscriber. |
//!
//! All structs implement `Default` so that a missing or partial file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `pigeonhole.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Responsive grid policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Widths strictly greater than this use `wide_columns`.
    #[serde(default = "default_wide_breakpoint")]
    pub wide_breakpoint: f64,
    #[serde(default = "default_wide_columns")]
    pub wide_columns: usize,
    #[serde(default = "default_narrow_columns")]
    pub narrow_columns: usize,
}

fn default_wide_breakpoint() -> f64 {
    600.0
}

fn default_wide_columns() -> usize {
    3
}

fn default_narrow_columns() -> usize {
    2
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wide_breakpoint: default_wide_breakpoint(),
            wide_columns: default_wide_columns(),
            narrow_columns: default_narrow_columns(),
        }
    }
}

impl LayoutConfig {
    /// Column count for a viewport `width` in logical units.
    pub fn columns_for(&self, width: f64) -> usize {
        if width > self.wide_breakpoint {
            self.wide_columns
        } else {
            self.narrow_columns
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub in_memory: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "pigeonhole.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.layout.wide_breakpoint, 600.0);
        assert_eq!(config.logging.level, "info");
        assert!(!config.storage.in_memory);
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            "[layout]\nwide_columns = 4\n\n[storage]\nin_memory = true\n",
        )
        .unwrap();
        assert_eq!(config.layout.wide_columns, 4);
        assert_eq!(config.layout.narrow_columns, 2);
        assert!(config.storage.in_memory);
    }

    #[test]
    fn test_columns_threshold_is_exclusive() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.columns_for(0.0), 2);
        assert_eq!(layout.columns_for(600.0), 2);
        assert_eq!(layout.columns_for(601.0), 3);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = AppConfig::default();
        config.logging.level = "debug".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(AppConfig::from_toml("[layout]\nwide_columns = \"three\"").is_err());
    }
}
