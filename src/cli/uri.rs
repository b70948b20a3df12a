//! URI command implementation
//!
//! Implements `otpgen uri`: prints an otpauth:// key URI for provisioning
//! an authenticator app with the current secret and parameters.

use crate::cli::GlobalArgs;
use otpgen_core::auth::otpauth::build_key_uri;
use otpgen_core::error::OtpgenError;

/// Run the uri command
pub fn run_uri(
    global: &GlobalArgs,
    account: &str,
    issuer: Option<&str>,
) -> Result<(), OtpgenError> {
    let settings = global.settings()?;

    let uri = build_key_uri(account, issuer, &settings.secret, &settings.params)?;
    println!("{}", uri);

    Ok(())
}
