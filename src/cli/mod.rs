//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands and the
//! settings they share: the secret and the effective generator parameters.

pub mod code;
pub mod find_offset;
pub mod init;
pub mod secret;
pub mod uri;
pub mod verify;
pub mod window;

use clap::Args;
use otpgen_core::{
    auth::totp::TotpParams,
    config::{toml_config, WindowPolicy},
    error::{ConfigError, OtpgenError},
    types::OtpSecret,
};
use std::path::PathBuf;
use tracing::debug;

/// Options accepted by every subcommand
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Base32 secret or otpauth:// URI; "-" reads it from stdin
    #[arg(short, long, global = true, env = "OTPGEN_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// Number of digits in a code
    #[arg(long, global = true)]
    pub digits: Option<u32>,

    /// Time step in seconds
    #[arg(long, global = true)]
    pub period: Option<u64>,

    /// Clock correction in seconds added before computing codes
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub offset: Option<i64>,

    /// Configuration file (default: ~/.config/otpgen/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Everything a code-producing command needs
pub struct Settings {
    pub secret: OtpSecret,
    pub params: TotpParams,
    pub policy: WindowPolicy,
}

impl GlobalArgs {
    /// Path of the configuration file in effect
    pub fn config_path(&self) -> Result<PathBuf, OtpgenError> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => toml_config::get_config_path(),
        }
    }

    /// Resolve the secret and parameters
    ///
    /// Precedence, lowest first: defaults, configuration file, otpauth URI
    /// parameters, command-line flags.
    pub fn settings(&self) -> Result<Settings, OtpgenError> {
        let config = toml_config::load_config_or_default(&self.config_path()?)?;
        let source = secret::resolve_secret(self.secret.as_deref())?;

        let mut params = config.totp;
        if let Some(uri_params) = source.uri_params {
            params.digits = uri_params.digits;
            params.period = uri_params.period;
        }
        if let Some(digits) = self.digits {
            params.digits = digits;
        }
        if let Some(period) = self.period {
            params.period = period;
        }
        if let Some(offset) = self.offset {
            params.time_offset = offset;
        }

        params.validate()?;

        debug!(
            "Effective parameters: digits={}, period={}s, time_offset={}s",
            params.digits, params.period, params.time_offset
        );

        Ok(Settings {
            secret: source.secret,
            params,
            policy: config.window_policy(),
        })
    }
}

/// Validate a window policy after command-line overrides
pub fn check_policy(policy: &WindowPolicy) -> Result<(), OtpgenError> {
    policy
        .validate()
        .map_err(|message| OtpgenError::Config(ConfigError::ValidationError { message }))
}
