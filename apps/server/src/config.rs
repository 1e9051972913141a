//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional file
//! (`config/default.*`, or the path in `MERIDIAN_CONFIG`), then environment
//! variables such as `MERIDIAN__SERVER__PORT=9090`. A `.env` file is loaded
//! first when present.

use crate::error::{Error, Result};
use meridian_models::FhirVersion;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

const ENV_PREFIX: &str = "MERIDIAN";
const CONFIG_PATH_VAR: &str = "MERIDIAN_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/default";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub fhir: FhirConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum request body size in bytes
    pub max_request_body_size: usize,
    /// CORS allowed origins; empty disables CORS headers
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_request_body_size: 10 * 1024 * 1024,
            cors_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FhirConfig {
    /// Namespaces served, by path identifier (`1_0_2`, `3_0_1`, `4_0_0`, `uscore`)
    pub versions: Vec<String>,
    /// Reject request bodies carrying keys the schema does not declare
    pub strict_fields: bool,
    /// Namespace answered by `GET /metadata`
    pub default_version: String,
}

impl Default for FhirConfig {
    fn default() -> Self {
        Self {
            versions: FhirVersion::ALL
                .iter()
                .map(|version| version.as_str().to_string())
                .collect(),
            strict_fields: false,
            default_version: FhirVersion::R4.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level for this server's crates when `RUST_LOG` is unset
    pub level: String,
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,
    /// daily | hourly | minutely | never
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_enabled: false,
            file_directory: "logs".to_string(),
            file_prefix: "fhir-server".to_string(),
            file_rotation: "daily".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from defaults, file and environment.
    pub fn load() -> Result<Self> {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();

        let path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?)
            .add_source(config::File::with_name(&path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("fhir.versions")
                    .with_list_parse_key("server.cors_origins"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config(
                "server.port must be greater than 0".to_string(),
            ));
        }

        if self.fhir.versions.is_empty() {
            return Err(Error::Config(
                "fhir.versions must name at least one namespace".to_string(),
            ));
        }

        for version in &self.fhir.versions {
            version
                .parse::<FhirVersion>()
                .map_err(|e| Error::Config(format!("fhir.versions: {e}")))?;
        }

        let default_version = self
            .fhir
            .default_version
            .parse::<FhirVersion>()
            .map_err(|e| Error::Config(format!("fhir.default_version: {e}")))?;
        if !self.is_enabled(default_version) {
            return Err(Error::Config(format!(
                "fhir.default_version {default_version} is not listed in fhir.versions"
            )));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| Error::Config(format!("invalid listen address: {e}")))
    }

    /// Whether `version` is served.
    pub fn is_enabled(&self, version: FhirVersion) -> bool {
        self.fhir.versions.iter().any(|v| v == version.as_str())
    }

    /// Served namespaces, in the configured order. Unknown entries are skipped.
    pub fn enabled_versions(&self) -> Vec<FhirVersion> {
        self.fhir
            .versions
            .iter()
            .filter_map(|v| v.parse().ok())
            .collect()
    }

    /// Namespace answered by `GET /metadata`.
    pub fn default_version(&self) -> Result<FhirVersion> {
        Ok(self.fhir.default_version.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.enabled_versions(), FhirVersion::ALL.to_vec());
        assert_eq!(config.default_version().unwrap(), FhirVersion::R4);
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_validate_rejects_unknown_version() {
        let mut config = Config::default();
        config.fhir.versions.push("5_0_0".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("5_0_0"));
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_requires_default_version_enabled() {
        let mut config = Config::default();
        config.fhir.versions = vec!["3_0_1".to_string()];
        assert!(config.validate().is_err());

        config.fhir.default_version = "3_0_1".to_string();
        config.validate().unwrap();
        assert!(!config.is_enabled(FhirVersion::R4));
    }
}
