//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the caller's tour; the incumbent is a separate copy
//! 2. At each iteration:
//!    a. Scan all non-degenerate 2-opt pairs
//!    b. Keep the minimum-delta pair whose four endpoints are all non-tabu,
//!    even if it worsens the tour
//!    c. If every pair is tabu, take the overall minimum-delta pair instead
//!    d. Apply it and stamp its four endpoints with the iteration
//!    e. Install the result as incumbent if strictly better and valid
//! 3. Stop on the time limit (or iteration cap) and return the incumbent
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::time::Duration;

use log::{info, trace, warn};

use super::config::TabuConfig;
use super::list::TabuList;
use super::tenure::TenurePolicy;
use crate::budget::TimeBudget;
use crate::error::Result;
use crate::incumbent::Incumbent;
use crate::instance::Instance;
use crate::opt2::{best_move, best_move_where, endpoints, TwoOptMove};
use crate::progress::{CostSample, ProgressObserver, ProgressTracker};
use crate::settings::Settings;
use crate::tour::Tour;

/// What one tabu iteration did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabuStep {
    /// Iteration the move was applied at.
    pub iteration: usize,
    /// The applied move.
    pub mv: TwoOptMove,
    /// Nodes stamped in the tabu list: `[a, a', b, b']`.
    pub endpoints: [usize; 4],
    /// Tenure in effect at this iteration.
    pub tenure: usize,
    /// Whether every pair was tabu and the move was taken regardless.
    pub fallback: bool,
}

/// The working state of a tabu search: one tour, one tabu list, one
/// iteration counter.
#[derive(Debug, Clone)]
pub struct TabuSearch<'a> {
    instance: &'a Instance,
    current: Tour,
    tabu: TabuList,
    policy: TenurePolicy,
    iteration: usize,
}

impl<'a> TabuSearch<'a> {
    pub fn new(instance: &'a Instance, tour: Tour, policy: TenurePolicy) -> Self {
        Self {
            instance,
            tabu: TabuList::new(instance.dimension()),
            current: tour,
            policy,
            iteration: 0,
        }
    }

    /// Performs one iteration. Returns `None` only when the neighbourhood is
    /// empty (n = 3).
    pub fn step(&mut self) -> Option<TabuStep> {
        let iteration = self.iteration;
        let tenure = self.policy.tenure(iteration, self.instance.dimension());

        let admissible = best_move_where(self.instance, &self.current, |i, j| {
            self.tabu
                .admits(&endpoints(&self.current, i, j), iteration, tenure)
        });
        let (mv, fallback) = match admissible {
            Some(mv) => (mv, false),
            None => {
                let mv = best_move(self.instance, &self.current)?;
                warn!(
                    "tabu: every move is tabu at iteration {} (tenure {}); ignoring tabu status",
                    iteration, tenure
                );
                (mv, true)
            }
        };

        let touched = endpoints(&self.current, mv.i, mv.j);
        mv.apply(&mut self.current);
        self.tabu.touch(&touched, iteration);
        self.iteration += 1;
        trace!(
            "tabu iter {}: move ({}, {}) delta {:.6} cost {:.6}",
            iteration,
            mv.i,
            mv.j,
            mv.delta,
            self.current.cost()
        );

        Some(TabuStep {
            iteration,
            mv,
            endpoints: touched,
            tenure,
            fallback,
        })
    }

    /// The working tour, which may be worse than the best seen.
    pub fn current(&self) -> &Tour {
        &self.current
    }

    /// Recomputes the working tour's cost from scratch.
    pub fn sync_cost(&mut self) -> bool {
        self.current.sync_cost(self.instance)
    }

    /// Iterations performed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn tabu_list(&self) -> &TabuList {
        &self.tabu
    }
}

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best valid tour found.
    pub best: Tour,
    /// Cost of the input tour.
    pub initial_cost: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best tour was found.
    pub best_iteration: usize,
    /// Iterations where every move was tabu.
    pub fallback_moves: usize,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// Sampled `(iteration, cost)` history.
    pub cost_history: Vec<CostSample>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Runs Tabu Search from `initial` until the time limit in `settings`
    /// (or the iteration cap in `config`) is reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_refine::construct::nearest_neighbor;
    /// use tsp_refine::instance::Instance;
    /// use tsp_refine::settings::Settings;
    /// use tsp_refine::tabu::{TabuConfig, TabuRunner, TenurePolicy};
    ///
    /// let coords: Vec<(f64, f64)> = (0..20).map(|i| ((i * 7 % 20) as f64, (i * 3 % 11) as f64)).collect();
    /// let inst = Instance::from_coords(&coords).unwrap();
    /// let start = nearest_neighbor(&inst, 0).unwrap();
    /// let start_cost = start.cost();
    /// let config = TabuConfig::default()
    ///     .with_policy(TenurePolicy::Triangular)
    ///     .with_max_iterations(50);
    /// let result = TabuRunner::run(&inst, start, &Settings::default(), &config).unwrap();
    /// assert!(result.best.cost() <= start_cost);
    /// ```
    pub fn run(
        instance: &Instance,
        initial: Tour,
        settings: &Settings,
        config: &TabuConfig,
    ) -> Result<TabuResult> {
        Self::run_with_observer(instance, initial, settings, config, &mut ())
    }

    /// Same as [`TabuRunner::run`], forwarding progress samples to
    /// `observer`.
    pub fn run_with_observer<O: ProgressObserver + ?Sized>(
        instance: &Instance,
        initial: Tour,
        settings: &Settings,
        config: &TabuConfig,
        observer: &mut O,
    ) -> Result<TabuResult> {
        settings.validate()?;
        initial.check(instance)?;

        let budget = TimeBudget::from_secs(settings.time_limit_secs);
        let initial_cost = initial.cost();
        info!(
            "tabu ({} tenure): n = {}, initial cost {:.4}",
            config.policy,
            instance.dimension(),
            initial_cost
        );

        let mut incumbent = Incumbent::new(instance, initial.clone())?;
        let mut search = TabuSearch::new(instance, initial, config.policy);
        let mut tracker = ProgressTracker::new(observer, settings.verbose, "tabu");
        tracker.record(&budget, 0, initial_cost, initial_cost);

        let mut fallback_moves = 0;
        loop {
            if config
                .max_iterations
                .is_some_and(|cap| search.iteration() >= cap)
            {
                break;
            }
            let Some(step) = search.step() else {
                break;
            };
            if step.fallback {
                fallback_moves += 1;
            }

            if search.current().cost() < incumbent.cost() {
                search.sync_cost();
                incumbent.try_install(instance, search.current(), step.iteration)?;
            }
            tracker.record(
                &budget,
                search.iteration(),
                search.current().cost(),
                incumbent.cost(),
            );

            if budget.expired() {
                info!("tabu: time limit reached; returning the best solution found so far");
                break;
            }
        }

        info!(
            "tabu: {} iterations, best cost {:.4} at iteration {} ({:.2}s)",
            search.iteration(),
            incumbent.cost(),
            incumbent.iteration(),
            budget.elapsed().as_secs_f64()
        );

        Ok(TabuResult {
            best_iteration: incumbent.iteration(),
            best: incumbent.into_tour(),
            initial_cost,
            iterations: search.iteration(),
            fallback_moves,
            elapsed: budget.elapsed(),
            cost_history: tracker.finish(),
        })
    }
}
