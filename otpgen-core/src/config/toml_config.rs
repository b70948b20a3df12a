//! TOML configuration file I/O
//!
//! Handles loading and saving generator settings to/from TOML files
//! in the user's configuration directory.

use crate::auth::totp::TotpParams;
use crate::config::WindowPolicy;
use crate::error::{ConfigError, OtpgenError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Complete TOML configuration structure
///
/// ```toml
/// [totp]
/// digits = 6
/// period = 30
/// time_offset = 0
///
/// [window]
/// past_windows = 10
/// future_windows = 10
/// skew = 1
/// search_range_hours = 24
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Code generation settings
    #[serde(default)]
    pub totp: TotpParams,

    /// Drift window settings (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowPolicy>,
}

impl TomlConfig {
    /// Create a new TOML configuration
    pub fn new(totp: TotpParams, window: Option<WindowPolicy>) -> Self {
        Self { totp, window }
    }

    /// Validate both tables
    pub fn validate(&self) -> Result<(), String> {
        self.totp.validate().map_err(|e| e.to_string())?;

        if let Some(ref policy) = self.window {
            policy
                .validate()
                .map_err(|e| format!("Invalid window policy: {}", e))?;
        }

        Ok(())
    }

    /// Get the window policy, or the default if not configured
    pub fn window_policy(&self) -> WindowPolicy {
        self.window.unwrap_or_default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, OtpgenError> {
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => OtpgenError::Config(ConfigError::LoadFailed {
                path: path.to_string_lossy().to_string(),
            }),
            _ => OtpgenError::Config(ConfigError::IoError {
                message: format!("Failed to read config file: {}", e),
            }),
        })?;

        let config: TomlConfig = toml::from_str(&contents)?;

        config
            .validate()
            .map_err(|message| OtpgenError::Config(ConfigError::ValidationError { message }))?;

        debug!(
            "Loaded configuration: digits={}, period={}s, time_offset={}s, window={}",
            config.totp.digits,
            config.totp.period,
            config.totp.time_offset,
            if config.window.is_some() { "custom" } else { "default" }
        );

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: &Path) -> Result<(), OtpgenError> {
        self.validate()
            .map_err(|message| OtpgenError::Config(ConfigError::ValidationError { message }))?;

        let contents = toml::to_string_pretty(self)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                OtpgenError::Config(ConfigError::IoError {
                    message: format!("Failed to create config directory: {}", e),
                })
            })?;
        }

        std::fs::write(path, contents).map_err(|_e| {
            OtpgenError::Config(ConfigError::SaveFailed {
                path: path.to_string_lossy().to_string(),
            })
        })?;

        info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "OTPGEN_CONFIG_DIR";

/// Get the default configuration directory
///
/// Returns ~/.config/otpgen, or the OTPGEN_CONFIG_DIR environment variable if set
pub fn get_config_dir() -> Result<PathBuf, OtpgenError> {
    if let Ok(config_dir) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(config_dir));
    }

    let home = std::env::var("HOME").map_err(|_| {
        OtpgenError::Config(ConfigError::IoError {
            message: "HOME environment variable not set".to_string(),
        })
    })?;

    Ok(PathBuf::from(home).join(".config").join("otpgen"))
}

/// Get the default configuration file path
pub fn get_config_path() -> Result<PathBuf, OtpgenError> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from the default path
///
/// A missing file yields the defaults; an unreadable or invalid file is an error.
pub fn load_config() -> Result<TomlConfig, OtpgenError> {
    let config_path = get_config_path()?;
    load_config_or_default(&config_path)
}

/// Load configuration from `path`, falling back to defaults if it does not exist
pub fn load_config_or_default(path: &Path) -> Result<TomlConfig, OtpgenError> {
    if !path.exists() {
        debug!("No configuration at {:?}, using defaults", path);
        return Ok(TomlConfig::default());
    }

    TomlConfig::from_file(path)
}

/// Write `config` to `path`, refusing to overwrite unless `force` is set
pub fn save_config_to_path(
    config: &TomlConfig,
    path: &Path,
    force: bool,
) -> Result<(), OtpgenError> {
    if path.exists() && !force {
        return Err(OtpgenError::Config(ConfigError::AlreadyExists {
            path: path.to_string_lossy().to_string(),
        }));
    }

    config.to_file(path)
}
