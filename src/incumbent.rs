//! Best valid tour seen during a run.
//!
//! The incumbent is an owned copy, never aliased with a controller's
//! working tour, so worsening tabu moves and kicks cannot touch it.

use log::debug;

use crate::error::Result;
use crate::instance::Instance;
use crate::tour::Tour;

/// Holder for the best tour found so far.
#[derive(Debug, Clone)]
pub struct Incumbent {
    tour: Tour,
    iteration: usize,
    improvements: usize,
}

impl Incumbent {
    /// Seeds the incumbent with a tour, which must be valid.
    pub fn new(instance: &Instance, tour: Tour) -> Result<Self> {
        tour.check(instance)?;
        Ok(Self {
            tour,
            iteration: 0,
            improvements: 0,
        })
    }

    /// Installs `candidate` if it is strictly cheaper and passes the full
    /// validity check. Returns whether it was installed.
    ///
    /// An invalid candidate is an internal consistency failure and is
    /// reported as an error rather than skipped.
    pub fn try_install(
        &mut self,
        instance: &Instance,
        candidate: &Tour,
        iteration: usize,
    ) -> Result<bool> {
        if candidate.cost() >= self.tour.cost() {
            return Ok(false);
        }
        candidate.check(instance)?;
        debug!(
            "new incumbent at iteration {}: {:.6} (was {:.6})",
            iteration,
            candidate.cost(),
            self.tour.cost()
        );
        self.tour.clone_from(candidate);
        self.iteration = iteration;
        self.improvements += 1;
        Ok(true)
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn cost(&self) -> f64 {
        self.tour.cost()
    }

    /// Iteration at which the current incumbent was installed.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Number of successful installs.
    pub fn improvements(&self) -> usize {
        self.improvements
    }

    pub fn into_tour(self) -> Tour {
        self.tour
    }
}
