//! Tabu Search configuration.

use super::tenure::TenurePolicy;

/// Configuration parameters for Tabu Search.
///
/// The wall-clock limit comes from [`Settings`](crate::settings::Settings);
/// `max_iterations` is an optional extra stop criterion.
///
/// # Examples
///
/// ```
/// use tsp_refine::tabu::{TabuConfig, TenurePolicy};
///
/// let config = TabuConfig::default()
///     .with_policy(TenurePolicy::Sawtooth)
///     .with_max_iterations(1000);
/// assert_eq!(config.policy, TenurePolicy::Sawtooth);
/// assert_eq!(config.max_iterations, Some(1000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Tenure strategy.
    pub policy: TenurePolicy,
    /// Stop after this many iterations even if time remains.
    pub max_iterations: Option<usize>,
}

impl TabuConfig {
    /// Sets the tenure policy.
    pub fn with_policy(mut self, policy: TenurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.policy, TenurePolicy::Constant);
        assert!(config.max_iterations.is_none());
    }
}
