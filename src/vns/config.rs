//! Variable Neighborhood Search configuration.

use super::kick::MAX_KICKS;
use crate::error::{RefineError, Result};

/// Configuration parameters for Variable Neighborhood Search.
///
/// # Examples
///
/// ```
/// use tsp_refine::vns::VnsConfig;
///
/// let config = VnsConfig::default()
///     .with_max_kicks(3)
///     .with_max_iterations(100);
/// assert_eq!(config.max_kicks, 3);
/// assert_eq!(config.max_iterations, Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VnsConfig {
    /// Upper bound on kicks per perturbation; the count is drawn uniformly
    /// from `1..=max_kicks`.
    pub max_kicks: usize,
    /// Stop after this many descent/kick rounds even if time remains.
    pub max_iterations: Option<usize>,
}

impl Default for VnsConfig {
    fn default() -> Self {
        Self {
            max_kicks: MAX_KICKS,
            max_iterations: None,
        }
    }
}

impl VnsConfig {
    /// Sets the perturbation strength bound.
    pub fn with_max_kicks(mut self, n: usize) -> Self {
        self.max_kicks = n;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_kicks == 0 {
            return Err(RefineError::InvalidSettings(
                "max_kicks must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vns_config_defaults() {
        let config = VnsConfig::default();
        assert_eq!(config.max_kicks, 7);
        assert!(config.max_iterations.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_vns_config_zero_kicks() {
        assert!(VnsConfig::default().with_max_kicks(0).validate().is_err());
    }
}
