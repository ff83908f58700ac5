//! Variable Neighborhood Search execution engine.
//!
//! # Algorithm
//!
//! 1. Copy the caller's tour into a working tour; the incumbent is a
//!    separate copy
//! 2. Repeat:
//!    a. **Intensify**: 2-opt descent on the working tour
//!    b. Install the working tour as incumbent if strictly better and valid
//!    c. Stop if the time limit is reached
//!    d. **Diversify**: apply 1..=`max_kicks` random kicks to the working
//!    tour
//! 3. Return the incumbent
//!
//! # Reference
//!
//! Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//! *Computers & Operations Research* 24(11), 1097-1100.

use std::time::Duration;

use log::info;
use rand::Rng;

use super::config::VnsConfig;
use super::kick::kick_sol;
use crate::budget::TimeBudget;
use crate::error::Result;
use crate::incumbent::Incumbent;
use crate::instance::Instance;
use crate::opt2::descend;
use crate::progress::{CostSample, ProgressObserver, ProgressTracker};
use crate::settings::Settings;
use crate::tour::Tour;

/// What one intensification phase did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VnsStep {
    pub iteration: usize,
    /// 2-opt moves applied during the descent.
    pub moves: usize,
    /// Working-tour cost after the descent.
    pub cost: f64,
    /// Incumbent cost after the install attempt.
    pub best_cost: f64,
    /// Whether the incumbent was replaced.
    pub improved: bool,
}

/// Working state of a VNS run: working tour, incumbent and RNG.
#[derive(Debug)]
pub struct VnsSearch<'a, R: Rng> {
    instance: &'a Instance,
    working: Tour,
    incumbent: Incumbent,
    rng: R,
    max_kicks: usize,
    iteration: usize,
}

impl<'a, R: Rng> VnsSearch<'a, R> {
    /// Starts a search from `tour`, which must be valid.
    pub fn new(instance: &'a Instance, tour: Tour, max_kicks: usize, rng: R) -> Result<Self> {
        let incumbent = Incumbent::new(instance, tour.clone())?;
        Ok(Self {
            instance,
            working: tour,
            incumbent,
            rng,
            max_kicks,
            iteration: 0,
        })
    }

    /// Descends the working tour to a local optimum (or until `budget`
    /// expires) and offers it to the incumbent.
    pub fn intensify(&mut self, budget: Option<&TimeBudget>) -> Result<VnsStep> {
        let iteration = self.iteration;
        let descent = descend(self.instance, &mut self.working, budget, None);
        let improved = self
            .incumbent
            .try_install(self.instance, &self.working, iteration)?;
        self.iteration += 1;
        Ok(VnsStep {
            iteration,
            moves: descent.moves,
            cost: self.working.cost(),
            best_cost: self.incumbent.cost(),
            improved,
        })
    }

    /// Kicks the working tour. Returns the number of kicks applied.
    pub fn diversify(&mut self) -> usize {
        kick_sol(
            self.instance,
            &mut self.working,
            self.max_kicks,
            &mut self.rng,
        )
    }

    pub fn working(&self) -> &Tour {
        &self.working
    }

    pub fn incumbent(&self) -> &Incumbent {
        &self.incumbent
    }

    /// Completed intensification phases.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn into_incumbent(self) -> Incumbent {
        self.incumbent
    }
}

/// Result of a VNS run.
#[derive(Debug, Clone)]
pub struct VnsResult {
    /// Best valid tour found.
    pub best: Tour,
    /// Cost of the input tour.
    pub initial_cost: f64,
    /// Descent/kick rounds executed.
    pub iterations: usize,
    /// Iteration at which the best tour was found.
    pub best_iteration: usize,
    /// Total kicks applied.
    pub kicks: usize,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// Sampled `(iteration, cost)` history; `cost` is the working tour
    /// after descent.
    pub cost_history: Vec<CostSample>,
}

/// Variable Neighborhood Search runner.
pub struct VnsRunner;

impl VnsRunner {
    /// Runs VNS from `initial` until the time limit in `settings` (or the
    /// iteration cap in `config`) is reached. Kicks draw from an RNG seeded
    /// with `settings.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_refine::construct::identity_tour;
    /// use tsp_refine::instance::Instance;
    /// use tsp_refine::settings::Settings;
    /// use tsp_refine::vns::{VnsConfig, VnsRunner};
    ///
    /// let coords: Vec<(f64, f64)> = (0..15).map(|i| ((i * 4 % 15) as f64, (i * 2 % 7) as f64)).collect();
    /// let inst = Instance::from_coords(&coords).unwrap();
    /// let start = identity_tour(&inst);
    /// let start_cost = start.cost();
    /// let config = VnsConfig::default().with_max_iterations(20);
    /// let result = VnsRunner::run(&inst, start, &Settings::default().with_seed(1), &config).unwrap();
    /// assert!(result.best.cost() <= start_cost);
    /// ```
    pub fn run(
        instance: &Instance,
        initial: Tour,
        settings: &Settings,
        config: &VnsConfig,
    ) -> Result<VnsResult> {
        Self::run_with_observer(instance, initial, settings, config, &mut ())
    }

    /// Same as [`VnsRunner::run`], forwarding progress samples to
    /// `observer`.
    pub fn run_with_observer<O: ProgressObserver + ?Sized>(
        instance: &Instance,
        initial: Tour,
        settings: &Settings,
        config: &VnsConfig,
        observer: &mut O,
    ) -> Result<VnsResult> {
        settings.validate()?;
        config.validate()?;
        initial.check(instance)?;

        let budget = TimeBudget::from_secs(settings.time_limit_secs);
        let initial_cost = initial.cost();
        info!(
            "vns: n = {}, initial cost {:.4}, seed {}",
            instance.dimension(),
            initial_cost,
            settings.seed
        );

        let rng = u_numflow::random::create_rng(settings.seed);
        let mut search = VnsSearch::new(instance, initial, config.max_kicks, rng)?;
        let mut tracker = ProgressTracker::new(observer, settings.verbose, "vns");
        let mut kicks = 0;

        loop {
            let step = search.intensify(Some(&budget))?;
            tracker.record(&budget, step.iteration, step.cost, step.best_cost);

            if budget.expired() {
                info!("vns: time limit reached; returning the best solution found so far");
                break;
            }
            if config
                .max_iterations
                .is_some_and(|cap| search.iteration() >= cap)
            {
                break;
            }
            kicks += search.diversify();
        }

        let iterations = search.iteration();
        let incumbent = search.into_incumbent();
        info!(
            "vns: {} iterations, {} kicks, best cost {:.4} at iteration {} ({:.2}s)",
            iterations,
            kicks,
            incumbent.cost(),
            incumbent.iteration(),
            budget.elapsed().as_secs_f64()
        );

        Ok(VnsResult {
            best_iteration: incumbent.iteration(),
            best: incumbent.into_tour(),
            initial_cost,
            iterations,
            kicks,
            elapsed: budget.elapsed(),
            cost_history: tracker.finish(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::{identity_tour, random_tour};
    use crate::opt2::{candidate_pairs, delta_cost, IMPROVEMENT_EPSILON};

    fn random_instance(n: usize, seed: u64) -> Instance {
        let mut rng = u_numflow::random::create_rng(seed);
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();
        Instance::from_coords(&coords).unwrap()
    }

    #[test]
    fn test_vns_incumbent_non_increasing() {
        let inst = random_instance(40, 21);
        let start = identity_tour(&inst);
        let rng = u_numflow::random::create_rng(21);
        let mut search = VnsSearch::new(&inst, start, 7, rng).unwrap();

        let mut last_best = f64::INFINITY;
        for _ in 0..30 {
            let step = search.intensify(None).unwrap();
            assert!(step.best_cost <= last_best);
            assert!(step.best_cost <= step.cost + 1e-9);
            last_best = step.best_cost;
            search.diversify();
            assert!(search.working().check(&inst).is_ok());
        }
        assert!(search.incumbent().tour().check(&inst).is_ok());
    }

    #[test]
    fn test_vns_intensify_reaches_local_optimum() {
        let inst = random_instance(30, 5);
        let mut rng = u_numflow::random::create_rng(5);
        let start = random_tour(&inst, &mut rng);
        let mut search = VnsSearch::new(&inst, start, 7, rng).unwrap();
        let step = search.intensify(None).unwrap();
        assert!(step.improved);
        assert!(step.moves > 0);
        for (i, j) in candidate_pairs(inst.dimension()) {
            assert!(delta_cost(&inst, search.working(), i, j) >= -IMPROVEMENT_EPSILON);
        }
    }

    #[test]
    fn test_vns_run_improves() {
        let inst = random_instance(50, 8);
        let start = identity_tour(&inst);
        let start_cost = start.cost();
        let config = VnsConfig::default().with_max_iterations(25);
        let settings = Settings::default().with_seed(8);

        let result = VnsRunner::run(&inst, start, &settings, &config).unwrap();
        assert_eq!(result.iterations, 25);
        assert!(result.kicks >= 24);
        assert!(result.best.cost() < start_cost);
        assert!(result.best.check(&inst).is_ok());
        assert!(!result.cost_history.is_empty());
    }

    #[test]
    fn test_vns_same_seed_same_result() {
        let inst = random_instance(30, 13);
        let config = VnsConfig::default().with_max_iterations(15);
        let settings = Settings::default().with_seed(99);

        let a = VnsRunner::run(&inst, identity_tour(&inst), &settings, &config).unwrap();
        let b = VnsRunner::run(&inst, identity_tour(&inst), &settings, &config).unwrap();
        assert_eq!(a.best.nodes(), b.best.nodes());
        assert_eq!(a.kicks, b.kicks);
    }

    #[test]
    fn test_vns_small_instance_without_kicks() {
        let inst =
            Instance::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
        let start = Tour::new(&inst, vec![0, 2, 1, 3]).unwrap();
        let config = VnsConfig::default().with_max_iterations(3);
        let result = VnsRunner::run(&inst, start, &Settings::default(), &config).unwrap();
        assert_eq!(result.kicks, 0);
        assert!((result.best.cost() - 4.0).abs() < 1e-9);
    }
}
