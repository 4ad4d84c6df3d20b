use std::path::Path;
use std::time::Duration;

use drumpad_driver::{DriverConfig, Endpoint};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("yaml deserialize error: {0}")]
    YamlDeserializeError(#[from] serde_yaml::Error),
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),
    #[error("endpoint {0:#04x} is not an IN endpoint")]
    InvalidEndpoint(u8),
    #[error("path error: {0}")]
    PathError(#[from] std::io::Error),
}

/// A config with a version.
#[derive(Debug, Clone, Deserialize)]
struct VersionedConfig {
    version: u8,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigV1 {
    #[allow(dead_code)]
    version: u8,
    #[serde(default)]
    handshake_delay_ms: Option<u64>,
    #[serde(default)]
    endpoint: Option<u8>,
    #[serde(default)]
    strict_header: Option<bool>,
    #[serde(default)]
    trace_reports: Option<bool>,
}

impl ConfigV1 {
    fn to_driver_config(&self) -> Result<DriverConfig, ConfigError> {
        let mut config = DriverConfig::default();
        if let Some(ms) = self.handshake_delay_ms {
            config.handshake_delay = Duration::from_millis(ms);
        }
        if let Some(address) = self.endpoint {
            let endpoint = Endpoint(address);
            if !endpoint.is_input() {
                return Err(ConfigError::InvalidEndpoint(address));
            }
            config.interrupt_endpoint = endpoint;
        }
        if let Some(strict) = self.strict_header {
            config.strict_header = strict;
        }
        if let Some(trace) = self.trace_reports {
            config.trace_reports = trace;
        }
        Ok(config)
    }
}

/// Parse yaml driver settings. Keys left out keep their defaults.
pub fn parse_config(input: &str) -> Result<DriverConfig, ConfigError> {
    let version = parse_version(input)?;
    match version {
        1 => {
            let raw: ConfigV1 = serde_yaml::from_str(input)?;
            raw.to_driver_config()
        }
        _ => Err(ConfigError::UnsupportedVersion(version)),
    }
}

fn parse_version(input: &str) -> Result<u8, ConfigError> {
    let raw: VersionedConfig = serde_yaml::from_str(input)?;
    Ok(raw.version)
}

/// Load settings from `path`, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<DriverConfig, ConfigError> {
    match path {
        Some(path) => {
            let input = std::fs::read_to_string(path)?;
            parse_config(&input)
        }
        None => Ok(DriverConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_only_gives_defaults() {
        let config = parse_config("version: 1\n").unwrap();
        assert_eq!(config, DriverConfig::default());
    }

    #[test]
    fn all_keys_are_applied() {
        let yaml = "\
version: 1
handshake_delay_ms: 250
endpoint: 0x82
strict_header: true
trace_reports: false
";
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.handshake_delay, Duration::from_millis(250));
        assert_eq!(config.interrupt_endpoint, Endpoint(0x82));
        assert!(config.strict_header);
        assert!(!config.trace_reports);
    }

    #[test]
    fn missing_version_is_a_yaml_error() {
        assert!(matches!(
            parse_config("strict_header: true\n"),
            Err(ConfigError::YamlDeserializeError(_))
        ));
    }

    #[test]
    fn unknown_version_is_rejected() {
        assert!(matches!(
            parse_config("version: 2\n"),
            Err(ConfigError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn out_endpoint_is_rejected() {
        assert!(matches!(
            parse_config("version: 1\nendpoint: 0x01\n"),
            Err(ConfigError::InvalidEndpoint(0x01))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            parse_config("version: 1\nrumble: true\n"),
            Err(ConfigError::YamlDeserializeError(_))
        ));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(load_config(None).unwrap(), DriverConfig::default());
    }

    #[test]
    fn missing_file_is_a_path_error() {
        let path = Path::new("/nonexistent/drumpad/config.yaml");
        assert!(matches!(
            load_config(Some(path)),
            Err(ConfigError::PathError(_))
        ));
    }
}
