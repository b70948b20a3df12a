//! Window command implementation
//!
//! Implements `otpgen window`: lists the current code between the codes of
//! neighbouring time steps, for diagnosing clock drift by eye.

use crate::cli::{check_policy, GlobalArgs};
use colored::Colorize;
use otpgen_core::auth::window::{generate_extended, ExtendedCodes, WindowCode};
use otpgen_core::clock::SystemClock;
use otpgen_core::error::OtpgenError;

/// Run the window command
pub fn run_window(
    global: &GlobalArgs,
    past: Option<u32>,
    future: Option<u32>,
    json: bool,
) -> Result<(), OtpgenError> {
    let settings = global.settings()?;

    let mut policy = settings.policy;
    if let Some(past) = past {
        policy.past_windows = past;
    }
    if let Some(future) = future {
        policy.future_windows = future;
    }
    check_policy(&policy)?;

    let codes = generate_extended(
        &settings.secret,
        &settings.params,
        policy.past_windows,
        policy.future_windows,
        SystemClock,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&codes)?);
    } else {
        print_table(&codes);
    }

    Ok(())
}

fn print_row(window: &WindowCode) {
    println!(
        "  {:>+7}s  {}  {}",
        window.offset,
        window.code.expose().dimmed(),
        window.formatted_time.dimmed()
    );
}

fn print_table(codes: &ExtendedCodes) {
    if codes.time_offset != 0 {
        println!(
            "Clock corrected by {}s ({} -> {})",
            codes.time_offset, codes.actual_time, codes.current.timestamp
        );
    }

    for window in codes.past.iter().rev() {
        print_row(window);
    }

    println!(
        "  {:>7}   {}  {}  {}",
        "now",
        codes.current.code().green().bold(),
        codes.formatted_time,
        format!("({}s left)", codes.current.remaining_time).yellow()
    );

    for window in &codes.future {
        print_row(window);
    }
}
