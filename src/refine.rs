//! Single entry point selecting one refinement controller.

use log::info;

use crate::error::Result;
use crate::instance::Instance;
use crate::opt2::{TwoOptConfig, TwoOptRunner};
use crate::progress::ProgressObserver;
use crate::settings::Settings;
use crate::tabu::{TabuConfig, TabuRunner, TenurePolicy};
use crate::tour::Tour;
use crate::vns::{VnsConfig, VnsRunner};

/// Which controller refines the initial tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefinementAlgorithm {
    /// Return the initial tour unchanged.
    Skip,
    /// 2-opt steepest descent to a local optimum.
    TwoOpt,
    /// Tabu Search with the given tenure policy, until the time limit.
    Tabu(TenurePolicy),
    /// VNS (2-opt descent plus random kicks), until the time limit.
    Vns,
}

impl RefinementAlgorithm {
    /// Every selectable algorithm, in menu order.
    pub const ALL: [RefinementAlgorithm; 7] = [
        RefinementAlgorithm::Skip,
        RefinementAlgorithm::TwoOpt,
        RefinementAlgorithm::Tabu(TenurePolicy::Constant),
        RefinementAlgorithm::Tabu(TenurePolicy::Triangular),
        RefinementAlgorithm::Tabu(TenurePolicy::Square),
        RefinementAlgorithm::Tabu(TenurePolicy::Sawtooth),
        RefinementAlgorithm::Vns,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RefinementAlgorithm::Skip => "skip",
            RefinementAlgorithm::TwoOpt => "2opt",
            RefinementAlgorithm::Tabu(TenurePolicy::Constant) => "tabu-constant",
            RefinementAlgorithm::Tabu(TenurePolicy::Triangular) => "tabu-triangular",
            RefinementAlgorithm::Tabu(TenurePolicy::Square) => "tabu-square",
            RefinementAlgorithm::Tabu(TenurePolicy::Sawtooth) => "tabu-sawtooth",
            RefinementAlgorithm::Vns => "vns",
        }
    }
}

impl std::fmt::Display for RefinementAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Refines `tour` with `algorithm` using default per-algorithm configs and
/// returns the best valid tour found.
///
/// # Examples
///
/// ```
/// use tsp_refine::instance::Instance;
/// use tsp_refine::refine::{refine, RefinementAlgorithm};
/// use tsp_refine::settings::Settings;
/// use tsp_refine::tour::Tour;
///
/// let inst = Instance::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
/// let crossed = Tour::new(&inst, vec![0, 2, 1, 3]).unwrap();
/// let tour = refine(RefinementAlgorithm::TwoOpt, &inst, crossed, &Settings::default()).unwrap();
/// assert!((tour.cost() - 4.0).abs() < 1e-9);
/// ```
pub fn refine(
    algorithm: RefinementAlgorithm,
    instance: &Instance,
    tour: Tour,
    settings: &Settings,
) -> Result<Tour> {
    refine_with_observer(algorithm, instance, tour, settings, &mut ())
}

/// Same as [`refine`], forwarding progress samples to `observer`.
pub fn refine_with_observer<O: ProgressObserver + ?Sized>(
    algorithm: RefinementAlgorithm,
    instance: &Instance,
    tour: Tour,
    settings: &Settings,
    observer: &mut O,
) -> Result<Tour> {
    info!("refinement: {}", algorithm);
    match algorithm {
        RefinementAlgorithm::Skip => {
            tour.check(instance)?;
            Ok(tour)
        }
        RefinementAlgorithm::TwoOpt => TwoOptRunner::run_with_observer(
            instance,
            tour,
            settings,
            &TwoOptConfig::default(),
            observer,
        )
        .map(|result| result.tour),
        RefinementAlgorithm::Tabu(policy) => TabuRunner::run_with_observer(
            instance,
            tour,
            settings,
            &TabuConfig::default().with_policy(policy),
            observer,
        )
        .map(|result| result.best),
        RefinementAlgorithm::Vns => VnsRunner::run_with_observer(
            instance,
            tour,
            settings,
            &VnsConfig::default(),
            observer,
        )
        .map(|result| result.best),
    }
}
