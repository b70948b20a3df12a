//! HOTP (RFC 4226) code computation
//!
//! HOTP(K, C) = Truncate(HMAC-SHA-1(K, C)) mod 10^Digit

use crate::auth::hmac::{hmac_sha1, DIGEST_LEN};
use crate::error::OtpError;

/// Smallest supported code length
pub const MIN_DIGITS: u32 = 1;

/// Largest supported code length; a 31-bit truncated value has at most 10 digits
pub const MAX_DIGITS: u32 = 10;

/// Check that `digits` is a supported code length
pub fn validate_digits(digits: u32) -> Result<(), OtpError> {
    if (MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
        Ok(())
    } else {
        Err(OtpError::InvalidDigits { digits })
    }
}

/// Dynamic truncation (RFC 4226 section 5.3)
///
/// The low nibble of the last digest byte selects a 4-byte window; the
/// window is read big-endian with its most significant bit cleared.
pub fn truncate(digest: &[u8; DIGEST_LEN]) -> u32 {
    let offset = usize::from(digest[DIGEST_LEN - 1] & 0x0F);

    u32::from_be_bytes([
        digest[offset] & 0x7F,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ])
}

/// Reduce a truncated value to a zero-padded decimal code
fn format_code(binary_code: u32, digits: u32) -> String {
    let modulus = 10u64.pow(digits);
    let code = u64::from(binary_code) % modulus;
    format!("{:0width$}", code, width = digits as usize)
}

/// Compute the HOTP code for `counter`
///
/// # Errors
///
/// Returns `OtpError::EmptyKey` if `key` is empty and
/// `OtpError::InvalidDigits` if `digits` is outside `1..=10`.
pub fn hotp(key: &[u8], counter: u64, digits: u32) -> Result<String, OtpError> {
    validate_digits(digits)?;

    if key.is_empty() {
        return Err(OtpError::EmptyKey);
    }

    let digest = hmac_sha1(key, &counter.to_be_bytes())?;
    Ok(format_code(truncate(&digest), digits))
}
