//! Configuration module
//!
//! Handles loading and saving generator settings from TOML files.
//! Shared secrets are never part of the configuration.

use serde::{Deserialize, Serialize};

pub mod toml_config;

/// Default number of earlier windows listed by `otpgen window`
pub const DEFAULT_PAST_WINDOWS: u32 = 10;

/// Default number of later windows listed by `otpgen window`
pub const DEFAULT_FUTURE_WINDOWS: u32 = 10;

/// Default verification tolerance in windows either side of the current one
pub const DEFAULT_SKEW: u32 = 1;

/// Default time-offset search range in hours
pub const DEFAULT_SEARCH_RANGE_HOURS: u32 = 24;

const MAX_WINDOWS: u32 = 100;
const MAX_SKEW: u32 = 10;
const MAX_SEARCH_RANGE_HOURS: u32 = 24 * 7;

/// Settings for drift-window listing, verification and offset search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowPolicy {
    /// Number of earlier windows to list
    pub past_windows: u32,

    /// Number of later windows to list
    pub future_windows: u32,

    /// Windows either side of the current one accepted by verification
    pub skew: u32,

    /// Hours either side of the clock searched for a matching offset
    pub search_range_hours: u32,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            past_windows: DEFAULT_PAST_WINDOWS,
            future_windows: DEFAULT_FUTURE_WINDOWS,
            skew: DEFAULT_SKEW,
            search_range_hours: DEFAULT_SEARCH_RANGE_HOURS,
        }
    }
}

impl WindowPolicy {
    /// Validate the policy
    pub fn validate(&self) -> Result<(), String> {
        if self.past_windows > MAX_WINDOWS || self.future_windows > MAX_WINDOWS {
            return Err(format!("Window counts cannot exceed {}", MAX_WINDOWS));
        }

        if self.skew > MAX_SKEW {
            return Err(format!("Skew cannot exceed {} windows", MAX_SKEW));
        }

        if self.search_range_hours == 0 {
            return Err("Search range cannot be zero".to_string());
        }

        if self.search_range_hours > MAX_SEARCH_RANGE_HOURS {
            return Err(format!(
                "Search range cannot exceed {} hours",
                MAX_SEARCH_RANGE_HOURS
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_valid() {
        assert!(WindowPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_policy_limits() {
        let mut policy = WindowPolicy::default();
        policy.skew = 11;
        assert_eq!(policy.validate().unwrap_err(), "Skew cannot exceed 10 windows");

        let mut policy = WindowPolicy::default();
        policy.past_windows = 101;
        assert!(policy.validate().is_err());

        let mut policy = WindowPolicy::default();
        policy.search_range_hours = 0;
        assert_eq!(policy.validate().unwrap_err(), "Search range cannot be zero");

        let mut policy = WindowPolicy::default();
        policy.search_range_hours = 169;
        assert!(policy.validate().is_err());
    }
}
