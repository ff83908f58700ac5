//! Cooperative wall-clock budget.
//!
//! Controllers poll [`TimeBudget::expired`] between whole algorithmic steps
//! (one 2-opt scan, one tabu iteration, one VNS iteration). Nothing is
//! preempted: a scan that crosses the deadline runs to completion, so the
//! worst-case overrun is one scan.

use std::time::{Duration, Instant};

/// Default interval between two progress samples.
pub const DEFAULT_SAMPLING_INTERVAL: Duration = Duration::from_millis(100);

/// A monotonic start timestamp plus a time limit.
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    start: Instant,
    limit: Duration,
}

impl TimeBudget {
    /// Starts a budget of `secs` seconds now.
    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    /// Starts a budget of `limit` now.
    pub fn new(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    /// Time since the budget started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Whether the limit has been reached.
    pub fn expired(&self) -> bool {
        self.elapsed() >= self.limit
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Time left before expiry, zero once expired.
    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.elapsed())
    }
}

/// Decides when the next progress sample is due.
///
/// The first poll is always due; afterwards a sample is due once at least
/// `interval` has passed since the previous one.
#[derive(Debug, Clone)]
pub struct CostSampler {
    interval: Duration,
    last: Option<Duration>,
}

impl Default for CostSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLING_INTERVAL)
    }
}

impl CostSampler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Returns `true` and arms the next interval if a sample is due at
    /// `elapsed`.
    pub fn due(&mut self, elapsed: Duration) -> bool {
        let due = match self.last {
            None => true,
            Some(last) => elapsed.saturating_sub(last) >= self.interval,
        };
        if due {
            self.last = Some(elapsed);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_expires_immediately() {
        let budget = TimeBudget::new(Duration::ZERO);
        assert!(budget.expired());
        assert_eq!(budget.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_budget_not_expired_early() {
        let budget = TimeBudget::from_secs(60);
        assert!(!budget.expired());
        assert!(budget.remaining() > Duration::from_secs(59));
        assert_eq!(budget.limit(), Duration::from_secs(60));
    }

    #[test]
    fn test_sampler_interval() {
        let mut sampler = CostSampler::new(Duration::from_millis(100));
        assert!(sampler.due(Duration::from_millis(0)));
        assert!(!sampler.due(Duration::from_millis(50)));
        assert!(sampler.due(Duration::from_millis(100)));
        assert!(!sampler.due(Duration::from_millis(199)));
        assert!(sampler.due(Duration::from_millis(250)));
    }
}
