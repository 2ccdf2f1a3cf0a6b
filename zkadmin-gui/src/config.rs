use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::filter;

pub const DEFAULT_FILE_NAME: &str = "gui.toml";
pub const DEFAULT_WALLET_ENDPOINT: &str = "http://127.0.0.1:8545";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Log at debug level if true and no log_level is given.
    pub debug: Option<bool>,
    #[serde(default)]
    pub wallet: WalletConfig,
}

/// Where the wallet connector sends its JSON-RPC requests.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WalletConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_WALLET_ENDPOINT.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl WalletConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_str::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        if config.wallet.endpoint.is_empty() {
            return Err(ConfigError::InvalidField(
                "wallet.endpoint",
                "Endpoint must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Same as `from_file` but a missing file yields the default configuration.
    /// The returned flag tells whether the file was found.
    pub fn from_file_or_default(path: &Path) -> Result<(Self, bool), ConfigError> {
        match Self::from_file(path) {
            Err(ConfigError::NotFound) => Ok((Self::default(), false)),
            res => res.map(|config| (config, true)),
        }
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::InvalidField(field, message) => {
                write!(f, "Config field {} is invalid: {}", field, message)
            }
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tmp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("zkadmin-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = tmp_path("missing");
        assert_eq!(Config::from_file(&path), Err(ConfigError::NotFound));
        let (config, found) = Config::from_file_or_default(&path).unwrap();
        assert!(!found);
        assert_eq!(config.wallet.endpoint, DEFAULT_WALLET_ENDPOINT);
        assert_eq!(config.wallet.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::INFO);
    }

    #[test]
    fn parse_config_file() {
        let path = tmp_path("parse");
        std::fs::write(
            &path,
            "log_level = \"trace\"\n\n[wallet]\nendpoint = \"http://localhost:1248\"\n",
        )
        .unwrap();
        let (config, found) = Config::from_file_or_default(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(found);
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::TRACE);
        assert_eq!(config.wallet.endpoint, "http://localhost:1248");
        assert_eq!(config.wallet.request_timeout_secs, 30);
    }

    #[test]
    fn invalid_log_level() {
        let path = tmp_path("invalid");
        std::fs::write(&path, "log_level = \"loud\"\n").unwrap();
        let res = Config::from_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            res,
            Err(ConfigError::InvalidField("log_level", _))
        ));
    }

    #[test]
    fn debug_flag_without_level() {
        let config = Config {
            debug: Some(true),
            ..Default::default()
        };
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::DEBUG);
    }
}
