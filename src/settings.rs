//! Run settings supplied by the caller.

use crate::error::{RefineError, Result};

/// Settings shared by every refinement controller.
///
/// # Examples
///
/// ```
/// use tsp_refine::settings::Settings;
///
/// let settings = Settings::default()
///     .with_time_limit_secs(5)
///     .with_seed(7)
///     .with_verbose(true);
/// assert!(settings.validate().is_ok());
/// assert_eq!(settings.time_limit_secs, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// Wall-clock budget in seconds. Must be positive.
    pub time_limit_secs: u64,
    /// Emit a log line for every sampled progress point.
    pub verbose: bool,
    /// Seed for the random number generator used by kicks.
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_limit_secs: 60,
            verbose: false,
            seed: 0,
        }
    }
}

impl Settings {
    pub fn with_time_limit_secs(mut self, secs: u64) -> Self {
        self.time_limit_secs = secs;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the settings.
    pub fn validate(&self) -> Result<()> {
        if self.time_limit_secs == 0 {
            return Err(RefineError::InvalidSettings(
                "time_limit_secs must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.time_limit_secs, 60);
        assert!(!settings.verbose);
        assert_eq!(settings.seed, 0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_zero_time_limit() {
        let settings = Settings::default().with_time_limit_secs(0);
        assert!(matches!(
            settings.validate(),
            Err(RefineError::InvalidSettings(_))
        ));
    }
}
