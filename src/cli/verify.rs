//! Verify command implementation
//!
//! Implements `otpgen verify <CODE>`: checks a submitted code against the
//! current window and the configured skew. Exit status reports the result.

use crate::cli::{check_policy, GlobalArgs};
use colored::Colorize;
use otpgen_core::auth::window::verify_totp;
use otpgen_core::clock::SystemClock;
use otpgen_core::error::OtpgenError;

/// Run the verify command, returning whether the code was accepted
pub fn run_verify(
    global: &GlobalArgs,
    code: &str,
    skew: Option<u32>,
    json: bool,
) -> Result<bool, OtpgenError> {
    let settings = global.settings()?;

    let mut policy = settings.policy;
    if let Some(skew) = skew {
        policy.skew = skew;
    }
    check_policy(&policy)?;

    let result = verify_totp(
        &settings.secret,
        code,
        &settings.params,
        policy.skew,
        SystemClock,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        match result.drift {
            Some(0) => println!("{}", "✓ valid".green()),
            Some(drift) => println!(
                "{} (matched {} window{} {})",
                "✓ valid".green(),
                drift.abs(),
                if drift.abs() == 1 { "" } else { "s" },
                if drift < 0 { "ago" } else { "ahead" }
            ),
            None => println!("{}", "✗ invalid".red()),
        }
    }

    Ok(result.valid)
}
