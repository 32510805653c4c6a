// src/config.rs
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{Result, SolveError};
use crate::models::HttpMethod;

/// Endpoint shipped in the default configuration. It is never a real service.
pub const PLACEHOLDER_URL: &str = "https://your-cloud-run-url.run.app/solve";

pub const DEFAULT_MOCK_LATENCY_MS: u64 = 1500;

/// Where and how to reach the solver service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub url: String,
    pub method: HttpMethod,
    pub use_mock: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: PLACEHOLDER_URL.to_string(),
            method: HttpMethod::Post,
            use_mock: true,
        }
    }
}

impl EndpointConfig {
    /// True when the URL was never configured.
    pub fn is_placeholder(&self) -> bool {
        let url = self.url.trim();
        url.is_empty() || url == PLACEHOLDER_URL
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// High-level application configuration: defaults, then the TOML file,
/// then environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub mock_latency_ms: u64,
    pub endpoint: EndpointConfig,
    pub server: ServerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mock_latency_ms: DEFAULT_MOCK_LATENCY_MS,
            endpoint: EndpointConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    mock_latency_ms: Option<u64>,
    #[serde(default)]
    endpoint: FileEndpoint,
    #[serde(default)]
    server: FileServer,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileEndpoint {
    url: Option<String>,
    method: Option<HttpMethod>,
    use_mock: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileServer {
    host: Option<String>,
    port: Option<u16>,
}

impl AppConfig {
    /// Load configuration from an explicit file (which must exist), or from
    /// the per-user default location when present, then apply the
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = AppConfig::default();

        let file = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path().filter(|p| p.is_file()),
        };
        if let Some(file) = file {
            log::info!("📄 Loading configuration from {}", file.display());
            let contents = std::fs::read_to_string(&file)?;
            config.merge_toml(&contents)?;
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlay values from a TOML document. Keys that are absent keep their
    /// current value.
    pub fn merge_toml(&mut self, contents: &str) -> Result<()> {
        let file: FileConfig = toml::from_str(contents)?;

        if let Some(url) = file.endpoint.url {
            self.endpoint.url = url;
        }
        if let Some(method) = file.endpoint.method {
            self.endpoint.method = method;
        }
        if let Some(use_mock) = file.endpoint.use_mock {
            self.endpoint.use_mock = use_mock;
        }
        if let Some(latency) = file.mock_latency_ms {
            self.mock_latency_ms = latency;
        }
        if let Some(host) = file.server.host {
            self.server.host = host;
        }
        if let Some(port) = file.server.port {
            self.server.port = port;
        }
        Ok(())
    }

    /// Overlay `ALGOSOLVER_*` variables obtained through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("ALGOSOLVER_API_URL") {
            self.endpoint.url = url.trim().to_string();
        }
        if let Some(method) = lookup("ALGOSOLVER_HTTP_METHOD") {
            self.endpoint.method = method.parse()?;
        }
        if let Some(use_mock) = lookup("ALGOSOLVER_USE_MOCK") {
            self.endpoint.use_mock = parse_bool("ALGOSOLVER_USE_MOCK", &use_mock)?;
        }
        if let Some(latency) = lookup("ALGOSOLVER_MOCK_LATENCY_MS") {
            self.mock_latency_ms = latency.trim().parse().map_err(|_| {
                SolveError::Config(format!(
                    "ALGOSOLVER_MOCK_LATENCY_MS must be a number of milliseconds, got '{}'",
                    latency
                ))
            })?;
        }
        if let Some(host) = lookup("ALGOSOLVER_HOST") {
            self.server.host = host.trim().to_string();
        }
        if let Some(port) = lookup("ALGOSOLVER_PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                SolveError::Config(format!("ALGOSOLVER_PORT must be a port number, got '{}'", port))
            })?;
        }
        Ok(())
    }

    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SolveError::Config(e.to_string()))
    }
}

/// `<config dir>/algosolver/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("algosolver").join("config.toml"))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(SolveError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
