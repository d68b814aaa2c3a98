/// Configuration file support for hello_bus
///
/// Session and timing settings come from a TOML/YAML file instead of being
/// hardcoded. Supports auto-detection of file format and multiple search paths.
use crate::error::{HelloError, HelloResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_PERIOD_MS: u64 = 4000;

/// How the Zenoh session joins the bus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    #[default]
    Peer,
    Client,
}

impl SessionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::Peer => "peer",
            SessionMode::Client => "client",
        }
    }
}

/// Timings for the chocolate factory programs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Delay between two temperature readings from the tempering station
    pub temperature_period_ms: u64,

    /// Time the tempering station spends on one lot
    pub processing_ms: u64,

    /// How long the stations wait for lot updates before logging again
    pub lot_wait_ms: u64,

    /// Delay between two lots started by the monitoring application
    pub lot_start_period_ms: u64,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            temperature_period_ms: 100,
            processing_ms: 5000,
            lot_wait_ms: 10_000,
            lot_start_period_ms: 8000,
        }
    }
}

impl FactoryConfig {
    pub fn temperature_period(&self) -> Duration {
        Duration::from_millis(self.temperature_period_ms)
    }

    pub fn processing_time(&self) -> Duration {
        Duration::from_millis(self.processing_ms)
    }

    pub fn lot_wait(&self) -> Duration {
        Duration::from_millis(self.lot_wait_ms)
    }

    pub fn lot_start_period(&self) -> Duration {
        Duration::from_millis(self.lot_start_period_ms)
    }
}

/// Settings shared by every hello_bus program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    /// Session mode (peer or client)
    pub mode: SessionMode,

    /// Endpoints to connect to (e.g. "tcp/192.168.1.5:7447")
    pub connect: Vec<String>,

    /// Endpoints to listen on
    pub listen: Vec<String>,

    /// Multicast scouting; leave unset to keep the middleware default
    pub multicast_scouting: Option<bool>,

    /// Native zenoh config file applied before the fields above
    pub zenoh_config: Option<PathBuf>,

    /// Delay between two published samples
    pub publish_period_ms: u64,

    /// How long a subscriber waits for data before logging again
    pub subscribe_wait_ms: u64,

    /// Chocolate factory timings
    pub factory: FactoryConfig,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            mode: SessionMode::default(),
            connect: Vec::new(),
            listen: Vec::new(),
            multicast_scouting: None,
            zenoh_config: None,
            publish_period_ms: DEFAULT_PERIOD_MS,
            subscribe_wait_ms: DEFAULT_PERIOD_MS,
            factory: FactoryConfig::default(),
        }
    }
}

impl BusConfig {
    /// Load config from a file (auto-detect format)
    pub fn from_file<P: AsRef<Path>>(path: P) -> HelloResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            HelloError::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&contents),
            Some("toml") => Self::from_toml(&contents),
            _ => Self::from_toml(&contents).or_else(|_| Self::from_yaml(&contents)),
        }
    }

    /// Parse config from TOML string
    pub fn from_toml(contents: &str) -> HelloResult<Self> {
        toml::from_str(contents).map_err(|e| HelloError::config(format!("Failed to parse TOML: {}", e)))
    }

    /// Parse config from YAML string
    pub fn from_yaml(contents: &str) -> HelloResult<Self> {
        serde_yaml::from_str(contents)
            .map_err(|e| HelloError::config(format!("Failed to parse YAML: {}", e)))
    }

    /// Load the explicit file if given, otherwise the first file found in the
    /// standard search paths, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> HelloResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::get_search_paths().into_iter().find(|p| p.exists()) {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Get standard config file search paths
    ///
    /// Search order:
    /// 1. ./hello_bus.toml or ./hello_bus.yaml
    /// 2. ~/.hello_bus/config.toml or ~/.hello_bus/config.yaml
    /// 3. /etc/hello_bus/config.toml
    pub fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("hello_bus.toml"),
            PathBuf::from("hello_bus.yaml"),
            PathBuf::from("hello_bus.yml"),
        ];

        if let Some(home) = dirs::home_dir() {
            let dir = home.join(".hello_bus");
            paths.push(dir.join("config.toml"));
            paths.push(dir.join("config.yaml"));
        }

        paths.push(PathBuf::from("/etc/hello_bus/config.toml"));
        paths
    }

    pub fn publish_period(&self) -> Duration {
        Duration::from_millis(self.publish_period_ms)
    }

    pub fn subscribe_wait(&self) -> Duration {
        Duration::from_millis(self.subscribe_wait_ms)
    }

    /// Build the middleware configuration from these settings
    pub fn to_zenoh_config(&self) -> HelloResult<zenoh::Config> {
        let mut config = match &self.zenoh_config {
            Some(path) => zenoh::Config::from_file(path).map_err(|e| {
                HelloError::config(format!("Failed to load zenoh config {}: {}", path.display(), e))
            })?,
            None => zenoh::Config::default(),
        };

        insert(&mut config, "mode", &serde_json::to_string(self.mode.as_str())?)?;
        if !self.connect.is_empty() {
            insert(&mut config, "connect/endpoints", &serde_json::to_string(&self.connect)?)?;
        }
        if !self.listen.is_empty() {
            insert(&mut config, "listen/endpoints", &serde_json::to_string(&self.listen)?)?;
        }
        if let Some(enabled) = self.multicast_scouting {
            insert(&mut config, "scouting/multicast/enabled", &enabled.to_string())?;
        }

        Ok(config)
    }
}

fn insert(config: &mut zenoh::Config, key: &str, value: &str) -> HelloResult<()> {
    config
        .insert_json5(key, value)
        .map_err(|e| HelloError::config(format!("Invalid value {} for '{}': {}", value, key, e)))
}
