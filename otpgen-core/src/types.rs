//! Type definitions and wrappers for secure data handling
//!
//! This module provides type-safe wrappers for sensitive data using the
//! secrecy crate to prevent accidental exposure in logs or debug output.

use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, Serializer};

/// Wrapper for Base32-encoded TOTP shared secrets
///
/// This type ensures OTP secrets are never accidentally logged or exposed
/// in debug output. No validation happens here: decoding is lenient
/// and an unusable secret surfaces as an error at generation time.
#[derive(Clone, Debug)]
pub struct OtpSecret(Secret<String>);

impl OtpSecret {
    /// Create a new OtpSecret from a Base32-encoded string
    pub fn new(secret: String) -> Self {
        Self(Secret::new(secret))
    }

    /// Expose the secret value (use with caution!)
    ///
    /// This should only be called when absolutely necessary,
    /// such as when passing to cryptographic functions.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for OtpSecret {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

impl From<&str> for OtpSecret {
    fn from(secret: &str) -> Self {
        Self::new(secret.to_string())
    }
}

/// Wrapper for generated TOTP tokens
///
/// Generated OTP tokens should also be treated as sensitive data
/// and never logged, even though they have a short lifetime.
#[derive(Clone, Debug)]
pub struct TotpToken(Secret<String>);

impl TotpToken {
    /// Create a new TotpToken from a generated token string
    pub fn new(token: String) -> Self {
        Self(Secret::new(token))
    }

    /// Expose the token value (use with caution!)
    ///
    /// This should only be called when sending the token to stdout
    /// or passing to external systems.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for TotpToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

/// Serializes the exposed code (used for `--json` output)
impl Serialize for TotpToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.expose())
    }
}

/// A generated code together with its validity window
#[derive(Clone, Debug, Serialize)]
pub struct TotpCode {
    /// The zero-padded numeric code
    #[serde(rename = "code")]
    pub token: TotpToken,

    /// Seconds until the counter advances, in `[1, period]`
    pub remaining_time: u64,

    /// Time step counter the code was derived from
    pub counter: u64,

    /// Unix time the code was computed for (after any offset correction)
    pub timestamp: u64,
}

impl TotpCode {
    /// Expose the code string
    pub fn code(&self) -> &str {
        self.token.expose()
    }
}
