//! Error type shared by every refinement entry point.

use thiserror::Error;

/// Errors reported by instance construction, settings validation and the
/// tour consistency checks.
///
/// Running out of time is not an error: every runner treats the wall-clock
/// deadline as its normal termination condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RefineError {
    /// An instance needs at least three nodes to admit a tour.
    #[error("instance must have at least 3 nodes, got {dimension}")]
    InvalidInstance { dimension: usize },

    /// A settings or config value is out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The tour does not visit as many nodes as the instance has.
    #[error("tour has {actual} nodes, instance has {expected}")]
    TourLength { expected: usize, actual: usize },

    /// The tour references a node outside `[0, n)`.
    #[error("node {node} is out of range for dimension {dimension}")]
    NodeOutOfRange { node: usize, dimension: usize },

    /// The tour visits a node twice.
    #[error("node {node} appears more than once in the tour")]
    DuplicateNode { node: usize },

    /// The cached tour cost disagrees with a from-scratch recomputation.
    #[error("cached tour cost {cached} drifted from recomputed cost {actual}")]
    CostDrift { cached: f64, actual: f64 },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RefineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RefineError::InvalidInstance { dimension: 2 };
        assert_eq!(err.to_string(), "instance must have at least 3 nodes, got 2");

        let err = RefineError::DuplicateNode { node: 4 };
        assert_eq!(err.to_string(), "node 4 appears more than once in the tour");

        let err = RefineError::InvalidSettings("time_limit_secs must be positive".into());
        assert!(err.to_string().contains("time_limit_secs"));
    }
}
