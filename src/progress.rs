//! Progress samples emitted while a controller runs.
//!
//! Sampling is rate-limited by a [`CostSampler`], so the only cost on the
//! hot path is one clock read per step. Observers must not block.

use std::sync::mpsc::Sender;

use log::info;

use crate::budget::{CostSampler, TimeBudget};

/// One `(iteration, cost)` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostSample {
    /// Controller iteration at which the sample was taken.
    pub iteration: usize,
    /// Cost of the working tour.
    pub cost: f64,
    /// Cost of the incumbent.
    pub best_cost: f64,
}

/// Receives progress samples, e.g. for a live plot.
pub trait ProgressObserver {
    fn on_sample(&mut self, sample: CostSample);
}

/// Discards every sample.
impl ProgressObserver for () {
    fn on_sample(&mut self, _sample: CostSample) {}
}

impl ProgressObserver for Vec<CostSample> {
    fn on_sample(&mut self, sample: CostSample) {
        self.push(sample);
    }
}

/// Forwards samples over a channel. A dropped receiver is ignored so that a
/// closed plot window never stops the search.
impl ProgressObserver for Sender<CostSample> {
    fn on_sample(&mut self, sample: CostSample) {
        let _ = self.send(sample);
    }
}

/// Couples a sampler, the observer and the history kept on the result.
pub(crate) struct ProgressTracker<'a, O: ProgressObserver + ?Sized> {
    sampler: CostSampler,
    history: Vec<CostSample>,
    observer: &'a mut O,
    verbose: bool,
    label: &'static str,
}

impl<'a, O: ProgressObserver + ?Sized> ProgressTracker<'a, O> {
    pub(crate) fn new(observer: &'a mut O, verbose: bool, label: &'static str) -> Self {
        Self {
            sampler: CostSampler::default(),
            history: Vec::new(),
            observer,
            verbose,
            label,
        }
    }

    /// Records a sample if one is due.
    pub(crate) fn record(
        &mut self,
        budget: &TimeBudget,
        iteration: usize,
        cost: f64,
        best_cost: f64,
    ) {
        let elapsed = budget.elapsed();
        if !self.sampler.due(elapsed) {
            return;
        }
        let sample = CostSample {
            iteration,
            cost,
            best_cost,
        };
        if self.verbose {
            info!(
                "{} [{:>7.2}s] iter {:>8}  cost {:.4}  best {:.4}",
                self.label,
                elapsed.as_secs_f64(),
                iteration,
                cost,
                best_cost
            );
        }
        self.history.push(sample);
        self.observer.on_sample(sample);
    }

    pub(crate) fn finish(self) -> Vec<CostSample> {
        self.history
    }
}
