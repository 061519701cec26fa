//! Configuration loading and config file resolution
//!
//! Both services read the same optional TOML file. Missing files are not an
//! error: the services log a warning and start with compiled defaults.
//!
//! Config file resolution order:
//! 1. Command-line argument (`--config`)
//! 2. `IFX_CONFIG` environment variable
//! 3. User config directory (`~/.config/ifx/config.toml` on Linux)
//! 4. System config (`/etc/ifx/config.toml`, Linux only)
//!
//! Example file:
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [api]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [[form_presets]]
//! max_score = 10.0
//! max_interval = 0.5
//! ```

use crate::presets::{self, IntervalPreset};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "IFX_CONFIG";

/// Default bind address for both services
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port for ifx-api
pub const DEFAULT_API_PORT: u16 = 5790;

/// Default port for ifx-ui
pub const DEFAULT_UI_PORT: u16 = 5791;

/// Contents of the TOML config file; every field is optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Bind settings for ifx-api
    #[serde(default)]
    pub api: ServiceConfig,

    /// Bind settings for ifx-ui
    #[serde(default)]
    pub ui: ServiceConfig,

    /// Presets returned by `GET /api/interval-config`
    #[serde(default = "presets::api_presets")]
    pub api_presets: Vec<IntervalPreset>,

    /// Choices offered by the interactive form
    #[serde(default = "presets::form_presets")]
    pub form_presets: Vec<IntervalPreset>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` overrides it
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Bind address for one service; unset fields fall back to CLI/defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,
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

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            api: ServiceConfig::default(),
            ui: ServiceConfig::default(),
            api_presets: presets::api_presets(),
            form_presets: presets::form_presets(),
        }
    }
}

impl TomlConfig {
    /// Parse TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Check the preset lists and the log level
    pub fn validate(&self) -> Result<()> {
        presets::validate_presets(&self.api_presets)
            .map_err(|e| Error::Config(format!("api_presets: {}", e)))?;
        presets::validate_presets(&self.form_presets)
            .map_err(|e| Error::Config(format!("form_presets: {}", e)))?;

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(Error::Config(format!("Unknown log level: {}", other))),
        }
    }
}

impl ServiceConfig {
    /// Host with CLI override and compiled default applied
    pub fn resolve_host(&self, cli_host: Option<&str>) -> String {
        cli_host
            .map(str::to_string)
            .or_else(|| self.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    /// Port with CLI override and the service's default applied
    pub fn resolve_port(&self, cli_port: Option<u16>, default_port: u16) -> u16 {
        cli_port.or(self.port).unwrap_or(default_port)
    }
}

/// Locate the config file, highest priority first
///
/// Returns `None` when no candidate is configured or present on disk.
pub fn resolve_config_path(cli_arg: Option<&Path>) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: User config directory
    if let Some(path) = dirs::config_dir().map(|d| d.join("ifx").join("config.toml")) {
        if path.exists() {
            return Some(path);
        }
    }

    // Priority 4: System config
    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/ifx/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Load configuration, falling back to compiled defaults
///
/// A missing file only produces a warning. A file that exists but cannot be
/// parsed or fails validation is an error.
pub fn load_config(cli_arg: Option<&Path>) -> Result<TomlConfig> {
    let Some(path) = resolve_config_path(cli_arg) else {
        info!("No config file found, using compiled defaults");
        return Ok(TomlConfig::default());
    };

    if !path.exists() {
        warn!(
            "Config file {} does not exist, using compiled defaults",
            path.display()
        );
        return Ok(TomlConfig::default());
    }

    let config = TomlConfig::load(&path)?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}
