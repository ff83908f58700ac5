//! Random double-bridge style perturbation ("kicks").
//!
//! A kick picks three pairwise non-adjacent positions `i < j < k` and
//! reverses the segments `i + 1 ..= j` and `j + 1 ..= k`. Several kicks in a
//! row give a stronger perturbation.

use log::trace;
use rand::Rng;

use crate::instance::Instance;
use crate::tour::Tour;

/// Default upper bound on kicks per perturbation.
pub const MAX_KICKS: usize = 7;

/// Smallest tour admitting three pairwise non-adjacent positions.
pub const MIN_KICK_DIMENSION: usize = 5;

/// Draws sorted positions `i < j < k` in `[0, n)` with every pair at least
/// two apart, resampling until that holds. `None` when `n` is too small.
pub fn kick_positions<R: Rng>(n: usize, rng: &mut R) -> Option<(usize, usize, usize)> {
    if n < MIN_KICK_DIMENSION {
        return None;
    }
    loop {
        let mut picks = [
            rng.random_range(0..n),
            rng.random_range(0..n),
            rng.random_range(0..n),
        ];
        if picks[0].abs_diff(picks[1]) > 1
            && picks[0].abs_diff(picks[2]) > 1
            && picks[1].abs_diff(picks[2]) > 1
        {
            picks.sort_unstable();
            return Some((picks[0], picks[1], picks[2]));
        }
    }
}

/// Reverses the two segments of one kick. The cached cost is stale until
/// the caller recomputes it.
fn reverse_segments<R: Rng>(tour: &mut Tour, rng: &mut R) -> bool {
    let Some((i, j, k)) = kick_positions(tour.len(), rng) else {
        return false;
    };
    trace!("kick at positions ({}, {}, {})", i, j, k);
    tour.reverse_positions(i + 1, j);
    tour.reverse_positions(j + 1, k);
    true
}

/// Applies one kick and recomputes the cost. Returns `false` (and leaves
/// the tour alone) for tours shorter than [`MIN_KICK_DIMENSION`].
pub fn kick<R: Rng>(instance: &Instance, tour: &mut Tour, rng: &mut R) -> bool {
    let kicked = reverse_segments(tour, rng);
    if kicked {
        tour.recompute_cost(instance);
    }
    kicked
}

/// Applies between 1 and `max_kicks` kicks, the count drawn uniformly, then
/// recomputes the cost from scratch. Returns the number of kicks applied.
pub fn kick_sol<R: Rng>(instance: &Instance, tour: &mut Tour, max_kicks: usize, rng: &mut R) -> usize {
    if tour.len() < MIN_KICK_DIMENSION || max_kicks == 0 {
        return 0;
    }
    let count = rng.random_range(1..=max_kicks);
    for _ in 0..count {
        reverse_segments(tour, rng);
    }
    tour.recompute_cost(instance);
    count
}
