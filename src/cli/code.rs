//! Code command implementation
//!
//! Implements `otpgen code`: prints the current code to stdout. With
//! `--json` the remaining validity, counter and timestamp are included.

use crate::cli::GlobalArgs;
use otpgen_core::auth::totp::{generate_totp, generate_totp_at};
use otpgen_core::clock::SystemClock;
use otpgen_core::error::OtpgenError;

/// Run the code command
///
/// `at` pins the Unix time the code is computed for; no offset is applied.
pub fn run_code(global: &GlobalArgs, at: Option<u64>, json: bool) -> Result<(), OtpgenError> {
    let settings = global.settings()?;

    let code = match at {
        Some(timestamp) => generate_totp_at(&settings.secret, timestamp, &settings.params)?,
        None => generate_totp(&settings.secret, &settings.params, SystemClock)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&code)?);
    } else {
        // Output only the code to stdout (machine-parsable)
        println!("{}", code.code());
    }

    Ok(())
}
