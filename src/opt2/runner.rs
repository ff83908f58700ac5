//! 2-opt steepest-descent engine.
//!
//! # Algorithm
//!
//! 1. Scan every non-degenerate pair `(i, j)` and keep the minimum delta
//! 2. If that delta is negative, apply the reversal and scan again
//! 3. Otherwise the tour is a 2-opt local optimum: stop
//!
//! Each scan is `O(n^2)`; the number of improving moves is empirically
//! `O(n)`.

use std::time::Duration;

use log::{info, trace};

use super::config::TwoOptConfig;
use super::moves::{best_move, TwoOptMove};
use crate::budget::TimeBudget;
use crate::error::Result;
use crate::instance::Instance;
use crate::progress::{CostSample, ProgressObserver, ProgressTracker};
use crate::settings::Settings;
use crate::tour::Tour;

/// A move counts as improving only below this delta. Keeps rounding noise
/// from flipping between equivalent tours forever.
pub const IMPROVEMENT_EPSILON: f64 = 1e-10;

/// State of a descent after one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescentState {
    /// An improving move was applied; keep scanning.
    Scanning,
    /// No improving move exists.
    Converged,
}

/// Runs one full scan and applies the best move if it improves the tour.
pub fn scan(instance: &Instance, tour: &mut Tour) -> DescentState {
    match best_move(instance, tour) {
        Some(mv) if mv.delta < -IMPROVEMENT_EPSILON => {
            apply_logged(tour, &mv);
            DescentState::Scanning
        }
        _ => DescentState::Converged,
    }
}

fn apply_logged(tour: &mut Tour, mv: &TwoOptMove) {
    trace!("2-opt move ({}, {}) delta {:.6}", mv.i, mv.j, mv.delta);
    mv.apply(tour);
}

/// Outcome of [`descend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descent {
    /// Improving moves applied.
    pub moves: usize,
    /// Whether a local optimum was reached (as opposed to stopping on the
    /// budget or the move cap).
    pub converged: bool,
}

/// Scans until convergence, budget expiry, or `max_moves` applied moves.
///
/// The budget is polled between scans only. The cached cost is
/// resynchronised from scratch before returning.
pub fn descend(
    instance: &Instance,
    tour: &mut Tour,
    budget: Option<&TimeBudget>,
    max_moves: Option<usize>,
) -> Descent {
    let mut moves = 0;
    let mut converged = false;
    loop {
        if max_moves.is_some_and(|cap| moves >= cap) {
            break;
        }
        match scan(instance, tour) {
            DescentState::Converged => {
                converged = true;
                break;
            }
            DescentState::Scanning => moves += 1,
        }
        if budget.is_some_and(TimeBudget::expired) {
            break;
        }
    }
    tour.sync_cost(instance);
    Descent { moves, converged }
}

/// Result of a 2-opt run.
#[derive(Debug, Clone)]
pub struct TwoOptResult {
    /// The refined tour.
    pub tour: Tour,
    /// Cost of the input tour.
    pub initial_cost: f64,
    /// Improving moves applied.
    pub moves: usize,
    /// Whether the run reached a 2-opt local optimum.
    pub converged: bool,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// Sampled `(iteration, cost)` history, one iteration per scan.
    pub cost_history: Vec<CostSample>,
}

/// 2-opt steepest-descent runner.
pub struct TwoOptRunner;

impl TwoOptRunner {
    /// Descends from `initial` to a 2-opt local optimum or until the time
    /// limit in `settings` expires.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_refine::instance::Instance;
    /// use tsp_refine::opt2::{TwoOptConfig, TwoOptRunner};
    /// use tsp_refine::settings::Settings;
    /// use tsp_refine::tour::Tour;
    ///
    /// let inst = Instance::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
    /// let crossed = Tour::new(&inst, vec![0, 2, 1, 3]).unwrap();
    /// let result = TwoOptRunner::run(&inst, crossed, &Settings::default(), &TwoOptConfig::default()).unwrap();
    /// assert!((result.tour.cost() - 4.0).abs() < 1e-9);
    /// ```
    pub fn run(
        instance: &Instance,
        initial: Tour,
        settings: &Settings,
        config: &TwoOptConfig,
    ) -> Result<TwoOptResult> {
        Self::run_with_observer(instance, initial, settings, config, &mut ())
    }

    /// Same as [`TwoOptRunner::run`], forwarding progress samples to
    /// `observer`.
    pub fn run_with_observer<O: ProgressObserver + ?Sized>(
        instance: &Instance,
        initial: Tour,
        settings: &Settings,
        config: &TwoOptConfig,
        observer: &mut O,
    ) -> Result<TwoOptResult> {
        settings.validate()?;
        initial.check(instance)?;

        let budget = TimeBudget::from_secs(settings.time_limit_secs);
        let initial_cost = initial.cost();
        info!(
            "2-opt: n = {}, initial cost {:.4}",
            instance.dimension(),
            initial_cost
        );

        let mut tour = initial;
        let mut tracker = ProgressTracker::new(observer, settings.verbose, "2-opt");
        tracker.record(&budget, 0, initial_cost, initial_cost);

        let mut moves = 0;
        let mut converged = false;
        loop {
            if config.max_moves.is_some_and(|cap| moves >= cap) {
                break;
            }
            match scan(instance, &mut tour) {
                DescentState::Converged => {
                    converged = true;
                    break;
                }
                DescentState::Scanning => moves += 1,
            }
            tracker.record(&budget, moves, tour.cost(), tour.cost());
            if budget.expired() {
                info!("2-opt: time limit reached before convergence");
                break;
            }
        }

        tour.sync_cost(instance);
        tour.check(instance)?;
        info!(
            "2-opt: {} moves, final cost {:.4} ({:.2}s)",
            moves,
            tour.cost(),
            budget.elapsed().as_secs_f64()
        );

        Ok(TwoOptResult {
            tour,
            initial_cost,
            moves,
            converged,
            elapsed: budget.elapsed(),
            cost_history: tracker.finish(),
        })
    }
}
