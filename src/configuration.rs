//! Process-wide behaviour of the contest binary.
//!
//! Configuration can be created programmatically using [`Configuration::new()`] or by reading
//! environment variables using [`Configuration::from_env()`]. Per-contest parameters live in
//! [`ContestSettings`](crate::settings::ContestSettings) instead.
//!
//! # Environment Variables
//!
//! Values are case-insensitive. Set the value to `"true"` to enable a flag.
//!
//! - `CONTEST_LOG` — Write a trace log file in the current directory (default: `false`)

/// Configuration of the contest binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    pub(crate) log: bool,
}

impl Configuration {
    /// Create a new configuration with default parameters.
    ///
    /// By default logging to file is disabled.
    pub fn new() -> Self {
        Self { log: false }
    }

    /// Create configuration from environment variables.
    ///
    /// - `CONTEST_LOG`: if set to `"true"`, enables logging to file (default: `false`)
    ///
    /// Any other value (including unset) results in the default.
    pub fn from_env() -> Self {
        fn get_env_flag(var: &str, default: bool) -> bool {
            match std::env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        Self {
            log: get_env_flag("CONTEST_LOG", false),
        }
    }

    /// Enable or disable logging to file.
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }

    /// Whether a log file should be written.
    pub fn log(&self) -> bool {
        self.log
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod configuration_tests {
    use super::*;

    #[test]
    fn test_builder() {
        assert!(!Configuration::new().log());
        assert!(Configuration::new().with_log(true).log());
        assert_eq!(Configuration::default(), Configuration::new());
    }
}
