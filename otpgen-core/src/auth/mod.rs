//! One-time password module
//!
//! Handles Base32 secret decoding, HMAC-SHA1, HOTP truncation, TOTP
//! generation, drift windows and otpauth key URIs.

pub mod base32;
pub mod hmac;
pub mod hotp;
pub mod otpauth;
pub mod totp;
pub mod window;
