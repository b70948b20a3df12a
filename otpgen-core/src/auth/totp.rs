//! TOTP (Time-based One-Time Password) generation
//!
//! Implements RFC 6238 on top of the HOTP computation: the counter is the
//! number of whole periods elapsed since the Unix epoch. Codes are a pure
//! function of the secret and the (optionally offset-corrected) time.

use crate::auth::{base32, hotp};
use crate::clock::{Clock, SystemClock};
use crate::error::OtpError;
use crate::types::{OtpSecret, TotpCode, TotpToken};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// RFC 6238 default code length
pub const DEFAULT_DIGITS: u32 = 6;

/// RFC 6238 default time step in seconds
pub const DEFAULT_PERIOD: u64 = 30;

/// Parameters shared by every code derived from one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotpParams {
    /// Number of decimal digits in a code
    pub digits: u32,

    /// Length of one time step in seconds
    pub period: u64,

    /// Seconds added to the clock before computing the counter
    ///
    /// Compensates for a server clock that disagrees with the
    /// authenticator's; see [`crate::auth::window::find_time_offset`].
    pub time_offset: i64,
}

impl Default for TotpParams {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            period: DEFAULT_PERIOD,
            time_offset: 0,
        }
    }
}

impl TotpParams {
    /// Create parameters with no clock correction
    pub fn new(digits: u32, period: u64) -> Self {
        Self {
            digits,
            period,
            time_offset: 0,
        }
    }

    /// Set the clock correction in seconds
    pub fn with_time_offset(mut self, time_offset: i64) -> Self {
        self.time_offset = time_offset;
        self
    }

    /// Validate the parameters
    pub fn validate(&self) -> Result<(), OtpError> {
        hotp::validate_digits(self.digits)?;

        // Window offsets are signed seconds
        if self.period == 0 || i64::try_from(self.period).is_err() {
            return Err(OtpError::InvalidPeriod);
        }

        Ok(())
    }
}

/// Time step counter for a Unix timestamp
pub fn counter_at(timestamp: u64, period: u64) -> Result<u64, OtpError> {
    timestamp
        .checked_div(period)
        .ok_or(OtpError::InvalidPeriod)
}

/// Seconds left in the time step containing `timestamp`, in `[1, period]`
pub fn remaining_time(timestamp: u64, period: u64) -> Result<u64, OtpError> {
    timestamp
        .checked_rem(period)
        .map(|elapsed| period - elapsed)
        .ok_or(OtpError::InvalidPeriod)
}

/// Apply a signed clock correction to a Unix timestamp
///
/// Fails with `OtpError::TimeError` if the result would precede the epoch.
pub fn corrected_time(now: u64, time_offset: i64) -> Result<u64, OtpError> {
    now.checked_add_signed(time_offset)
        .ok_or(OtpError::TimeError)
}

/// Decode a secret to HMAC key bytes
///
/// Decoding itself never fails; a secret with no usable characters is
/// reported as `OtpError::EmptyKey` rather than keyed with nothing.
pub(crate) fn decode_key(secret: &OtpSecret) -> Result<Vec<u8>, OtpError> {
    let skipped = base32::skipped_characters(secret.expose());
    if skipped > 0 {
        warn!(
            "Ignored {} non-Base32 character(s) in OTP secret; check the secret if codes are rejected",
            skipped
        );
    }

    let key = base32::decode_base32(secret.expose());
    if key.is_empty() {
        warn!("OTP secret decoded to an empty key");
        return Err(OtpError::EmptyKey);
    }

    if key.len() < 10 {
        debug!(
            "OTP secret is {} bits, below the 80 bits suggested by RFC 4226",
            key.len() * 8
        );
    }

    Ok(key)
}

/// Generate the code for already-decoded key bytes at `timestamp`
pub(crate) fn code_for_key(
    key: &[u8],
    timestamp: u64,
    params: &TotpParams,
) -> Result<TotpCode, OtpError> {
    let counter = counter_at(timestamp, params.period)?;
    let token = hotp::hotp(key, counter, params.digits)?;

    Ok(TotpCode {
        token: TotpToken::new(token),
        remaining_time: remaining_time(timestamp, params.period)?,
        counter,
        timestamp,
    })
}

/// Generate the code for an explicit Unix timestamp
///
/// `params.time_offset` is not applied; `timestamp` is used as given.
pub fn generate_totp_at(
    secret: &OtpSecret,
    timestamp: u64,
    params: &TotpParams,
) -> Result<TotpCode, OtpError> {
    params.validate()?;
    let key = decode_key(secret)?;

    debug!(
        "Generating TOTP: counter={}, digits={}, period={}s",
        timestamp / params.period,
        params.digits,
        params.period
    );

    code_for_key(&key, timestamp, params)
}

/// Generate the current code, reading time from `clock`
///
/// The clock reading is corrected by `params.time_offset` first.
pub fn generate_totp<C: Clock>(
    secret: &OtpSecret,
    params: &TotpParams,
    clock: C,
) -> Result<TotpCode, OtpError> {
    let now = clock.now()?;
    let timestamp = corrected_time(now, params.time_offset)?;

    if params.time_offset != 0 {
        debug!(
            "Applied time offset of {}s (clock={}, corrected={})",
            params.time_offset, now, timestamp
        );
    }

    generate_totp_at(secret, timestamp, params)
}

/// Generate the current code with default settings (6 digits, 30 seconds)
pub fn generate_totp_default(secret: &OtpSecret) -> Result<TotpCode, OtpError> {
    generate_totp(secret, &TotpParams::default(), SystemClock)
}
