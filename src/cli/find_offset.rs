//! Find-offset command implementation
//!
//! Implements `otpgen find-offset <CODE>`: given a code currently shown by
//! an authenticator, searches for the clock correction that reproduces it.

use crate::cli::{check_policy, GlobalArgs};
use colored::Colorize;
use otpgen_core::auth::window::find_time_offset;
use otpgen_core::clock::SystemClock;
use otpgen_core::error::OtpgenError;

/// Run the find-offset command
pub fn run_find_offset(
    global: &GlobalArgs,
    code: &str,
    range_hours: Option<u32>,
    json: bool,
) -> Result<(), OtpgenError> {
    let settings = global.settings()?;

    let mut policy = settings.policy;
    if let Some(hours) = range_hours {
        policy.search_range_hours = hours;
    }
    check_policy(&policy)?;

    let found = find_time_offset(
        &settings.secret,
        code,
        &settings.params,
        policy.search_range_hours,
        SystemClock,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    match found {
        Some(offset) => {
            println!(
                "Found time offset: {}",
                format!("{}s", offset.time_offset).green().bold()
            );
            println!("  Clock:    {}", offset.current_time);
            println!(
                "  Adjusted: {} ({})",
                offset.adjusted_time, offset.formatted_time
            );
            println!();
            println!(
                "Set `time_offset = {}` under [totp] in {} or pass --offset={}",
                offset.time_offset,
                global.config_path()?.display(),
                offset.time_offset
            );
        }
        None => {
            println!(
                "{}",
                format!(
                    "No offset within ±{}h reproduces this code",
                    policy.search_range_hours
                )
                .red()
            );
        }
    }

    Ok(())
}
