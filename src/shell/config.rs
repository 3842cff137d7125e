// Runtime configuration: built-in defaults, then a TOML file, then environment overrides.
//
// File (CONFIG_PATH, defaults to ./config.toml)
//   [http_server]
//   address = "0.0.0.0:8080"
//   timeout_ms = 4000
//   idle_timeout_ms = 60000
//
// Environment
// - CONFIG_PATH: config file location. When set, the file must exist.
// - HTTP_ADDRESS: socket address to bind.
// - HTTP_TIMEOUT_MS: per request timeout in milliseconds.
// - HTTP_IDLE_TIMEOUT_MS: how long shutdown waits for open connections to close.
//
// A `.env` file is loaded by the binary before this runs. RUST_LOG is read by the tracing
// subscriber, not here.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_PATH: &str = "CONFIG_PATH";
pub const HTTP_ADDRESS: &str = "HTTP_ADDRESS";
pub const HTTP_TIMEOUT_MS: &str = "HTTP_TIMEOUT_MS";
pub const HTTP_IDLE_TIMEOUT_MS: &str = "HTTP_IDLE_TIMEOUT_MS";

const DEFAULT_CONFIG_PATH: &str = "./config.toml";
const DEFAULT_HTTP_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_HTTP_TIMEOUT_MS: u64 = 4_000;
const DEFAULT_HTTP_IDLE_TIMEOUT_MS: u64 = 60_000;

const FILE_ADDRESS: &str = "http_server.address";
const FILE_TIMEOUT_MS: &str = "http_server.timeout_ms";
const FILE_IDLE_TIMEOUT_MS: &str = "http_server.idle_timeout_ms";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// On-disk shape. Every field is optional; missing ones keep their default.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    http_server: HttpServerSection,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct HttpServerSection {
    address: String,
    timeout_ms: u64,
    idle_timeout_ms: u64,
}

impl Default for HttpServerSection {
    fn default() -> Self {
        Self {
            address: DEFAULT_HTTP_ADDRESS.to_string(),
            timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
            idle_timeout_ms: DEFAULT_HTTP_IDLE_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub http_address: SocketAddr,
    pub request_timeout: Duration,
    pub idle_timeout: Duration,
    /// File the values were read from, `None` when running on defaults and environment only.
    pub source: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Resolves the config file through `lookup(CONFIG_PATH)`, reads it, then applies overrides.
    ///
    /// A missing file at the default location is not an error; an explicit `CONFIG_PATH` that
    /// points nowhere is.
    pub fn load(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let (path, explicit) = match non_empty(&lookup, CONFIG_PATH) {
            Some(raw) => (PathBuf::from(raw), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                if explicit {
                    return Err(ConfigError::NotFound { path });
                }
                return Self::from_lookup(lookup);
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        let mut config = Self::from_toml(&path, &contents, lookup)?;
        config.source = Some(path);
        Ok(config)
    }

    /// Defaults plus environment overrides, no file.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Self::resolve(HttpServerSection::default(), lookup)
    }

    /// Parses `contents` as the config file found at `path`, then applies overrides.
    pub fn from_toml(
        path: &Path,
        contents: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::resolve(file.http_server, lookup)
    }

    fn resolve(
        file: HttpServerSection,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let http_address = match non_empty(&lookup, HTTP_ADDRESS) {
            Some(raw) => parse(HTTP_ADDRESS, raw)?,
            None => parse(FILE_ADDRESS, file.address)?,
        };
        let request_timeout = match non_empty(&lookup, HTTP_TIMEOUT_MS) {
            Some(raw) => millis(HTTP_TIMEOUT_MS, parse(HTTP_TIMEOUT_MS, raw)?)?,
            None => millis(FILE_TIMEOUT_MS, file.timeout_ms)?,
        };
        let idle_timeout = match non_empty(&lookup, HTTP_IDLE_TIMEOUT_MS) {
            Some(raw) => millis(HTTP_IDLE_TIMEOUT_MS, parse(HTTP_IDLE_TIMEOUT_MS, raw)?)?,
            None => millis(FILE_IDLE_TIMEOUT_MS, file.idle_timeout_ms)?,
        };

        Ok(Self {
            http_address,
            request_timeout,
            idle_timeout,
            source: None,
        })
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn parse<T: FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}

fn millis(key: &'static str, ms: u64) -> Result<Duration, ConfigError> {
    if ms == 0 {
        return Err(ConfigError::Invalid {
            key,
            value: ms.to_string(),
        });
    }
    Ok(Duration::from_millis(ms))
}
