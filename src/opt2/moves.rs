//! 2-opt move evaluation.
//!
//! A move `(i, j)` with `i < j` removes the edges `(a, a')` and `(b, b')`,
//! where `a = tour[i]`, `a' = tour[i + 1]`, `b = tour[j]` and
//! `b' = tour[(j + 1) % n]`, then reconnects `a-b` and `a'-b'` by reversing
//! positions `i + 1 ..= j`.

use crate::instance::Instance;
use crate::tour::Tour;

/// A candidate 2-opt move and its cost delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoOptMove {
    pub i: usize,
    pub j: usize,
    pub delta: f64,
}

impl TwoOptMove {
    /// Applies the reversal and the cached-cost update in one step.
    pub fn apply(&self, tour: &mut Tour) {
        tour.apply_reversal(self.i, self.j, self.delta);
    }
}

/// Whether `(i, j)` is a non-degenerate move on a tour of `n` nodes.
///
/// Adjacent pairs (`j = i + 1`) change nothing and `(0, n - 1)` would only
/// reverse the whole cycle.
#[inline]
pub fn is_candidate(n: usize, i: usize, j: usize) -> bool {
    i + 2 <= j && j < n && !(i == 0 && j == n - 1)
}

/// Every non-degenerate `(i, j)` pair, in scan order.
pub fn candidate_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| {
        (i + 2..n)
            .filter(move |&j| !(i == 0 && j == n - 1))
            .map(move |j| (i, j))
    })
}

/// The four nodes touched by move `(i, j)`: `[a, a', b, b']`.
#[inline]
pub fn endpoints(tour: &Tour, i: usize, j: usize) -> [usize; 4] {
    [tour.node(i), tour.next_node(i), tour.node(j), tour.next_node(j)]
}

/// Cost change of reversing positions `i + 1 ..= j`, without touching the
/// tour.
#[inline]
pub fn delta_cost(instance: &Instance, tour: &Tour, i: usize, j: usize) -> f64 {
    let [a, a1, b, b1] = endpoints(tour, i, j);
    (instance.dist(a, b) + instance.dist(a1, b1)) - (instance.dist(a, a1) + instance.dist(b, b1))
}

/// Minimum-delta move among the pairs accepted by `admissible`.
///
/// The delta may be non-negative; callers decide whether to take it. Ties
/// keep the first pair in scan order. Returns `None` when no pair qualifies.
pub fn best_move_where<F>(instance: &Instance, tour: &Tour, mut admissible: F) -> Option<TwoOptMove>
where
    F: FnMut(usize, usize) -> bool,
{
    let mut best: Option<TwoOptMove> = None;
    for (i, j) in candidate_pairs(tour.len()) {
        let delta = delta_cost(instance, tour, i, j);
        if best.is_some_and(|mv| delta >= mv.delta) {
            continue;
        }
        if admissible(i, j) {
            best = Some(TwoOptMove { i, j, delta });
        }
    }
    best
}

/// Minimum-delta move over the full neighbourhood.
pub fn best_move(instance: &Instance, tour: &Tour) -> Option<TwoOptMove> {
    best_move_where(instance, tour, |_, _| true)
}
