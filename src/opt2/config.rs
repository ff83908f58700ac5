//! 2-opt descent configuration.

/// Configuration for [`TwoOptRunner`](super::TwoOptRunner).
///
/// # Examples
///
/// ```
/// use tsp_refine::opt2::TwoOptConfig;
///
/// let config = TwoOptConfig::default().with_max_moves(100);
/// assert_eq!(config.max_moves, Some(100));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoOptConfig {
    /// Stop after this many applied moves even if not converged.
    pub max_moves: Option<usize>,
}

impl TwoOptConfig {
    /// Caps the number of applied moves.
    pub fn with_max_moves(mut self, n: usize) -> Self {
        self.max_moves = Some(n);
        self
    }
}
