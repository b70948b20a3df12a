//! Init command implementation
//!
//! Writes a configuration file populated with the default settings.

use crate::cli::GlobalArgs;
use otpgen_core::auth::totp::TotpParams;
use otpgen_core::config::{toml_config, WindowPolicy};
use otpgen_core::error::OtpgenError;

/// Run the init command
pub fn run_init(global: &GlobalArgs, force: bool) -> Result<(), OtpgenError> {
    let path = global.config_path()?;

    let mut params = TotpParams::default();
    if let Some(digits) = global.digits {
        params.digits = digits;
    }
    if let Some(period) = global.period {
        params.period = period;
    }
    if let Some(offset) = global.offset {
        params.time_offset = offset;
    }

    let config = toml_config::TomlConfig::new(params, Some(WindowPolicy::default()));
    toml_config::save_config_to_path(&config, &path, force)?;

    println!("✅ Wrote configuration to {}", path.display());
    println!("Secrets are not stored; pass --secret or set OTPGEN_SECRET.");

    Ok(())
}
