//! Time sources for TOTP generation
//!
//! Generation reads "now" through the [`Clock`] trait so that callers and
//! tests can pin the time step without touching the system clock.

use crate::error::OtpError;
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of Unix time in whole seconds
pub trait Clock {
    /// Current Unix time in seconds
    fn now(&self) -> Result<u64, OtpError>;
}

/// Wall-clock time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<u64, OtpError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .map_err(|_| OtpError::TimeError)
    }
}

/// A clock frozen at a fixed Unix timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now(&self) -> Result<u64, OtpError> {
        Ok(self.0)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Result<u64, OtpError> {
        (**self).now()
    }
}
