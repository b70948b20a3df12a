//! Codes around the current time step
//!
//! Clock drift between a server and an authenticator shows up as codes that
//! are valid a few windows early or late. This module generates codes for
//! neighbouring windows, verifies a submitted code with a skew tolerance,
//! and searches for the clock offset that reproduces a known code.

use crate::auth::totp::{code_for_key, corrected_time, decode_key, TotpParams};
use crate::clock::Clock;
use crate::error::OtpError;
use crate::types::{OtpSecret, TotpCode, TotpToken};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::{debug, info};

/// A code for a window other than the current one
#[derive(Debug, Clone, Serialize)]
pub struct WindowCode {
    pub code: TotpToken,

    /// Seconds relative to the current (corrected) time
    pub offset: i64,

    /// Unix time the code was computed for
    pub timestamp: u64,

    /// `timestamp` as an RFC 3339 UTC string
    pub formatted_time: String,
}

/// The current code together with codes for surrounding windows
#[derive(Debug, Clone, Serialize)]
pub struct ExtendedCodes {
    pub current: TotpCode,

    /// `current.timestamp` as an RFC 3339 UTC string
    pub formatted_time: String,

    /// Uncorrected clock reading
    pub actual_time: u64,

    pub time_offset: i64,

    /// Earlier windows, nearest first
    pub past: Vec<WindowCode>,

    /// Later windows, nearest first
    pub future: Vec<WindowCode>,
}

/// A clock offset under which a known code is generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffsetMatch {
    /// Seconds to add to the clock; usable directly as `time_offset`
    pub time_offset: i64,

    /// Uncorrected clock reading at search time
    pub current_time: u64,

    /// `current_time + time_offset`
    pub adjusted_time: u64,

    /// `adjusted_time` as an RFC 3339 UTC string
    pub formatted_time: String,
}

/// Outcome of checking a submitted code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verification {
    pub valid: bool,

    /// Matched window relative to the current one (negative = earlier)
    pub drift: Option<i64>,
}

/// Format a Unix timestamp as RFC 3339 UTC, e.g. `2005-03-18T01:58:29Z`
pub fn format_timestamp(timestamp: u64) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| timestamp.to_string())
}

/// Constant-time comparison so verification timing does not leak digits
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// A candidate can only match if it has the right shape
fn is_well_formed(candidate: &str, digits: u32) -> bool {
    candidate.len() == digits as usize && candidate.bytes().all(|b| b.is_ascii_digit())
}

fn period_as_i64(params: &TotpParams) -> Result<i64, OtpError> {
    i64::try_from(params.period).map_err(|_| OtpError::InvalidPeriod)
}

/// Generate the current code plus `past` earlier and `future` later windows
///
/// Windows that would fall before the Unix epoch are omitted.
pub fn generate_extended<C: Clock>(
    secret: &OtpSecret,
    params: &TotpParams,
    past: u32,
    future: u32,
    clock: C,
) -> Result<ExtendedCodes, OtpError> {
    params.validate()?;
    let key = decode_key(secret)?;
    let period = period_as_i64(params)?;

    let actual_time = clock.now()?;
    let now = corrected_time(actual_time, params.time_offset)?;
    let current = code_for_key(&key, now, params)?;

    let window_at = |offset: i64| -> Result<Option<WindowCode>, OtpError> {
        let Ok(timestamp) = corrected_time(now, offset) else {
            return Ok(None);
        };
        let code = code_for_key(&key, timestamp, params)?;
        Ok(Some(WindowCode {
            code: code.token,
            offset,
            timestamp,
            formatted_time: format_timestamp(timestamp),
        }))
    };

    // Only windows at or after the epoch exist
    let reachable = u64::from(past).min(now / params.period);
    let mut past_codes = Vec::with_capacity(usize::try_from(reachable).unwrap_or(0));
    for i in 1..=i64::from(past) {
        let Some(offset) = i.checked_mul(-period) else {
            break;
        };
        match window_at(offset)? {
            Some(code) => past_codes.push(code),
            None => break,
        }
    }

    let mut future_codes = Vec::new();
    for i in 1..=i64::from(future) {
        let Some(offset) = i.checked_mul(period) else {
            break;
        };
        match window_at(offset)? {
            Some(code) => future_codes.push(code),
            None => break,
        }
    }

    debug!(
        "Generated {} past and {} future window codes",
        past_codes.len(),
        future_codes.len()
    );

    Ok(ExtendedCodes {
        formatted_time: format_timestamp(current.timestamp),
        current,
        actual_time,
        time_offset: params.time_offset,
        past: past_codes,
        future: future_codes,
    })
}

/// Check `candidate` against the current window and `skew` windows either side
///
/// Windows are tried nearest first. A candidate with the wrong length or
/// non-digit characters is reported as invalid, not as an error.
pub fn verify_totp<C: Clock>(
    secret: &OtpSecret,
    candidate: &str,
    params: &TotpParams,
    skew: u32,
    clock: C,
) -> Result<Verification, OtpError> {
    params.validate()?;
    let key = decode_key(secret)?;
    let period = period_as_i64(params)?;

    let candidate = candidate.trim();
    if !is_well_formed(candidate, params.digits) {
        debug!("Rejected malformed OTP candidate");
        return Ok(Verification {
            valid: false,
            drift: None,
        });
    }

    let now = corrected_time(clock.now()?, params.time_offset)?;

    let skew = i64::from(skew);
    let deltas = std::iter::once(0).chain((1..=skew).flat_map(|i| [-i, i]));

    for delta in deltas {
        let Some(Ok(timestamp)) = delta
            .checked_mul(period)
            .map(|offset| corrected_time(now, offset))
        else {
            continue;
        };
        let code = code_for_key(&key, timestamp, params)?;
        if constant_time_eq(code.code().as_bytes(), candidate.as_bytes()) {
            debug!("OTP candidate matched window {:+}", delta);
            return Ok(Verification {
                valid: true,
                drift: Some(delta),
            });
        }
    }

    Ok(Verification {
        valid: false,
        drift: None,
    })
}

/// Search for a clock offset under which `known_code` is generated
///
/// Offsets are multiples of the period within `±search_range_hours` of the
/// uncorrected clock, tried nearest to zero first; `params.time_offset` is
/// ignored. Returns `None` when no offset in range reproduces the code.
pub fn find_time_offset<C: Clock>(
    secret: &OtpSecret,
    known_code: &str,
    params: &TotpParams,
    search_range_hours: u32,
    clock: C,
) -> Result<Option<OffsetMatch>, OtpError> {
    params.validate()?;
    let key = decode_key(secret)?;
    let period = period_as_i64(params)?;

    let known_code = known_code.trim();
    if !is_well_formed(known_code, params.digits) {
        debug!("Known code has the wrong format, nothing to search for");
        return Ok(None);
    }

    let now = clock.now()?;
    let steps = i64::from(search_range_hours) * 3600 / period;

    let offsets = std::iter::once(0).chain((1..=steps).flat_map(|i| [-i * period, i * period]));

    for offset in offsets {
        let Ok(adjusted_time) = corrected_time(now, offset) else {
            continue;
        };
        let code = code_for_key(&key, adjusted_time, params)?;
        if constant_time_eq(code.code().as_bytes(), known_code.as_bytes()) {
            info!("Found matching time offset of {}s", offset);
            return Ok(Some(OffsetMatch {
                time_offset: offset,
                current_time: now,
                adjusted_time,
                formatted_time: format_timestamp(adjusted_time),
            }));
        }
    }

    info!(
        "No matching time offset within ±{}h",
        search_range_hours
    );
    Ok(None)
}
