//! Reporter configuration.
//!
//! Configuration is a plain immutable struct, validated eagerly when the
//! reporter is constructed. It covers:
//! - Metric-name prefixing
//! - Rate and duration units for interpreting reported values
//! - Static fields merged into every document

use crate::core::{MetricsinkError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete configuration for a reporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// Optional prefix joined to every metric name with a `.` separator.
    /// Useful to identify the originator of a metric.
    pub prefix: Option<String>,
    /// Unit the registry's rate fields are expressed in.
    pub rate_unit: TimeUnit,
    /// Unit the registry's duration snapshots are expressed in.
    pub duration_unit: TimeUnit,
    /// Fields merged into every document; never overwrite fields the
    /// transformer already produced.
    pub static_fields: BTreeMap<String, serde_json::Value>,
}

/// Time units for interpreting rate and duration fields.
///
/// Values are stored verbatim; the unit is declarative metadata describing
/// what the registry already produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Nanoseconds
    Nanoseconds,
    /// Microseconds
    Microseconds,
    /// Milliseconds
    Milliseconds,
    /// Seconds
    Seconds,
    /// Minutes
    Minutes,
    /// Hours
    Hours,
}

impl TimeUnit {
    /// Lowercase unit name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "nanoseconds",
            TimeUnit::Microseconds => "microseconds",
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        ReporterConfig {
            prefix: None,
            rate_unit: TimeUnit::Seconds,
            duration_unit: TimeUnit::Milliseconds,
            static_fields: BTreeMap::new(),
        }
    }
}

impl ReporterConfig {
    /// Create a new config with defaults.
    pub fn new() -> Result<Self> {
        let config = ReporterConfig::default();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ReporterConfig = serde_yaml::from_str(yaml)
            .map_err(|e| MetricsinkError::config(format!("Failed to parse YAML config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if let Some(prefix) = &self.prefix {
            if prefix.trim().is_empty() {
                return Err(MetricsinkError::config("prefix must not be empty when set"));
            }
        }

        for key in self.static_fields.keys() {
            if key.trim().is_empty() {
                return Err(MetricsinkError::config("static field keys must not be empty"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ReporterConfig::new().unwrap();
        assert!(config.prefix.is_none());
        assert_eq!(config.rate_unit, TimeUnit::Seconds);
        assert_eq!(config.duration_unit, TimeUnit::Milliseconds);
        assert!(config.static_fields.is_empty());
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let config = ReporterConfig {
            prefix: Some("  ".to_owned()),
            ..ReporterConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_static_field_key_rejected() {
        let mut config = ReporterConfig::default();
        config
            .static_fields
            .insert(String::new(), serde_json::json!("eu-west-1"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
prefix: app
rate_unit: seconds
duration_unit: nanoseconds
static_fields:
  region: eu-west-1
  shard: 3
"#;
        let config = ReporterConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.prefix.as_deref(), Some("app"));
        assert_eq!(config.duration_unit, TimeUnit::Nanoseconds);
        assert_eq!(config.static_fields["region"], serde_json::json!("eu-west-1"));
        assert_eq!(config.static_fields["shard"], serde_json::json!(3));
    }

    #[test]
    fn test_from_yaml_invalid_prefix() {
        assert!(ReporterConfig::from_yaml("prefix: \"\"").is_err());
    }
}
