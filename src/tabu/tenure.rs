//! Tenure policies: how long a node stays tabu at a given iteration.
//!
//! Every policy is a pure function of `(iteration, n)` that oscillates
//! between [`MIN_TENURE`] and [`default_tenure`]`(n)`.

/// Lower bound on any tenure.
pub const MIN_TENURE: usize = 10;

/// The baseline tenure is `n / TENURE_DENOMINATOR`, floored at
/// [`MIN_TENURE`].
pub const TENURE_DENOMINATOR: usize = 10;

/// Iterations spent on each level of the sawtooth ramp.
const SAWTOOTH_SUBSTEPS: usize = 3;

/// Baseline tenure for an instance of `n` nodes.
pub fn default_tenure(n: usize) -> usize {
    (n / TENURE_DENOMINATOR).max(MIN_TENURE)
}

/// Tenure strategy selected by the caller.
///
/// # Examples
///
/// ```
/// use tsp_refine::tabu::{TenurePolicy, MIN_TENURE};
///
/// // n = 150 gives a baseline of 15.
/// assert_eq!(TenurePolicy::Constant.tenure(7, 150), 15);
/// assert_eq!(TenurePolicy::Triangular.tenure(0, 150), MIN_TENURE);
/// assert_eq!(TenurePolicy::Triangular.tenure(5, 150), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TenurePolicy {
    /// Always [`default_tenure`].
    #[default]
    Constant,
    /// Linear ramp up to the baseline and back down, period
    /// `2 * (baseline - MIN_TENURE)`.
    Triangular,
    /// Alternates between the baseline and [`MIN_TENURE`] every
    /// `baseline - MIN_TENURE` iterations, starting high.
    Square,
    /// Linear ramp from [`MIN_TENURE`] to the baseline, then reset. Each
    /// level is held for three iterations.
    Sawtooth,
}

impl TenurePolicy {
    /// Every policy, in menu order.
    pub const ALL: [TenurePolicy; 4] = [
        TenurePolicy::Constant,
        TenurePolicy::Triangular,
        TenurePolicy::Square,
        TenurePolicy::Sawtooth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TenurePolicy::Constant => "constant",
            TenurePolicy::Triangular => "triangular",
            TenurePolicy::Square => "square",
            TenurePolicy::Sawtooth => "sawtooth",
        }
    }

    /// Tenure in effect at `iteration` for an instance of `n` nodes.
    pub fn tenure(&self, iteration: usize, n: usize) -> usize {
        let high = default_tenure(n);
        let amplitude = high - MIN_TENURE;
        match self {
            TenurePolicy::Constant => high,
            TenurePolicy::Triangular => {
                if amplitude == 0 {
                    return MIN_TENURE;
                }
                let period = 2 * amplitude;
                let phase = iteration % period;
                if phase <= amplitude {
                    MIN_TENURE + phase
                } else {
                    MIN_TENURE + period - phase
                }
            }
            TenurePolicy::Square => {
                if amplitude == 0 || (iteration / amplitude) % 2 == 0 {
                    high
                } else {
                    MIN_TENURE
                }
            }
            TenurePolicy::Sawtooth => {
                let period = SAWTOOTH_SUBSTEPS * (amplitude + 1);
                MIN_TENURE + (iteration % period) / SAWTOOTH_SUBSTEPS
            }
        }
    }
}

impl std::fmt::Display for TenurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
