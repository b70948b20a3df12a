//! Error types for the otpgen TOTP tool
//!
//! This module defines all error types used throughout the application,
//! providing consistent error handling and user-friendly error messages.

use thiserror::Error;

/// Main error type for the otpgen application
#[derive(Error, Debug)]
pub enum OtpgenError {
    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors related to OTP/TOTP operations
    #[error("OTP error: {0}")]
    Otp(#[from] OtpError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON output errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {path}")]
    LoadFailed { path: String },

    #[error("Failed to save configuration file: {path}")]
    SaveFailed { path: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: String },

    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// OTP/TOTP operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    /// The secret decoded to zero key bytes
    #[error("Secret contains no valid Base32 characters")]
    EmptyKey,

    #[error("Invalid number of digits: {digits} (must be between 1 and 10)")]
    InvalidDigits { digits: u32 },

    #[error("Invalid period: must be at least one second")]
    InvalidPeriod,

    #[error("System time error")]
    TimeError,

    #[error("HMAC computation failed")]
    HmacFailed,

    #[error("Invalid otpauth URI: {reason}")]
    InvalidUri { reason: String },

    #[error("No OTP secret provided")]
    MissingSecret,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, OtpgenError>;
