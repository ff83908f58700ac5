//! Tour representation: an ordered node sequence plus its cached length.

use log::warn;

use crate::error::{RefineError, Result};
use crate::instance::Instance;

/// Relative tolerance between a cached cost and a from-scratch recomputation.
pub const COST_TOLERANCE: f64 = 1e-6;

/// Returns `true` if `cached` matches `actual` within [`COST_TOLERANCE`].
///
/// The tolerance is relative to `actual`, floored at an absolute `1e-6` so
/// that near-zero tours (coincident points) compare sensibly.
pub fn costs_agree(cached: f64, actual: f64) -> bool {
    (cached - actual).abs() <= COST_TOLERANCE * actual.abs().max(1.0)
}

/// Length of the closed cycle visiting `nodes` in order.
pub fn cycle_cost(instance: &Instance, nodes: &[usize]) -> f64 {
    let Some(&last) = nodes.last() else {
        return 0.0;
    };
    let mut prev = last;
    let mut total = 0.0;
    for &node in nodes {
        total += instance.dist(prev, node);
        prev = node;
    }
    total
}

/// Checks that `nodes` is a permutation of `0..dimension`.
pub fn check_permutation(nodes: &[usize], dimension: usize) -> Result<()> {
    if nodes.len() != dimension {
        return Err(RefineError::TourLength {
            expected: dimension,
            actual: nodes.len(),
        });
    }
    let mut seen = vec![false; dimension];
    for &node in nodes {
        if node >= dimension {
            return Err(RefineError::NodeOutOfRange { node, dimension });
        }
        if std::mem::replace(&mut seen[node], true) {
            return Err(RefineError::DuplicateNode { node });
        }
    }
    Ok(())
}

/// A Hamiltonian cycle over an [`Instance`].
///
/// The sequence is the only live representation; [`Tour::successors`] derives
/// a successor-array view on demand. All mutation goes through whole
/// operations (one reversal, one kick) so no caller ever sees a half-applied
/// move.
///
/// # Examples
///
/// ```
/// use tsp_refine::instance::Instance;
/// use tsp_refine::tour::Tour;
///
/// let inst = Instance::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
/// let tour = Tour::new(&inst, vec![0, 1, 2, 3]).unwrap();
/// assert!((tour.cost() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    nodes: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Validates `nodes` against `instance` and computes its cost.
    pub fn new(instance: &Instance, nodes: Vec<usize>) -> Result<Self> {
        check_permutation(&nodes, instance.dimension())?;
        let cost = cycle_cost(instance, &nodes);
        Ok(Self { nodes, cost })
    }

    /// Builds a tour from a sequence the caller constructed as a permutation.
    pub(crate) fn from_permutation(instance: &Instance, nodes: Vec<usize>) -> Self {
        debug_assert!(check_permutation(&nodes, instance.dimension()).is_ok());
        let cost = cycle_cost(instance, &nodes);
        Self { nodes, cost }
    }

    /// Rebuilds a tour from a successor array (`succ[node]` is the node
    /// visited after `node`), starting at node 0.
    pub fn from_successors(instance: &Instance, succ: &[usize]) -> Result<Self> {
        let n = instance.dimension();
        if succ.len() != n {
            return Err(RefineError::TourLength {
                expected: n,
                actual: succ.len(),
            });
        }
        let mut nodes = Vec::with_capacity(n);
        let mut current = 0;
        for _ in 0..n {
            nodes.push(current);
            current = succ[current];
            if current >= n {
                return Err(RefineError::NodeOutOfRange {
                    node: current,
                    dimension: n,
                });
            }
        }
        // A subtour shows up as a repeated node in the walk.
        Self::new(instance, nodes)
    }

    /// Number of nodes in the tour.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The visiting order.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Node at tour position `pos`.
    #[inline]
    pub fn node(&self, pos: usize) -> usize {
        self.nodes[pos]
    }

    /// Node following position `pos`, wrapping around the end.
    #[inline]
    pub fn next_node(&self, pos: usize) -> usize {
        let next = pos + 1;
        if next == self.nodes.len() {
            self.nodes[0]
        } else {
            self.nodes[next]
        }
    }

    /// Cached total cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Successor-array view: `succ[node]` is the node visited after `node`.
    pub fn successors(&self) -> Vec<usize> {
        let mut succ = vec![0; self.nodes.len()];
        for pos in 0..self.nodes.len() {
            succ[self.nodes[pos]] = self.next_node(pos);
        }
        succ
    }

    /// Reverses positions `i + 1 ..= j` and adds `delta` to the cached cost.
    ///
    /// `delta` must be the value [`crate::opt2::delta_cost`] reports for
    /// `(i, j)`; applying the same pair twice restores the original order.
    pub fn apply_reversal(&mut self, i: usize, j: usize, delta: f64) {
        debug_assert!(i < j && j < self.nodes.len());
        self.nodes[i + 1..=j].reverse();
        self.cost += delta;
    }

    /// Reverses positions `from ..= to` without touching the cached cost.
    ///
    /// Callers must follow up with [`Tour::recompute_cost`].
    pub(crate) fn reverse_positions(&mut self, from: usize, to: usize) {
        if from < to {
            self.nodes[from..=to].reverse();
        }
    }

    /// Overwrites the cached cost with a from-scratch recomputation.
    pub fn recompute_cost(&mut self, instance: &Instance) {
        self.cost = cycle_cost(instance, &self.nodes);
    }

    /// Recomputes the cost and reports whether the cached value had drifted
    /// beyond [`COST_TOLERANCE`]. The cache is overwritten either way.
    pub fn sync_cost(&mut self, instance: &Instance) -> bool {
        let actual = cycle_cost(instance, &self.nodes);
        let drifted = !costs_agree(self.cost, actual);
        if drifted {
            warn!(
                "tour cost drifted: cached {:.9}, recomputed {:.9}; overwriting",
                self.cost, actual
            );
        }
        self.cost = actual;
        drifted
    }

    /// Full validity check: permutation of `0..n` and a cached cost that
    /// matches a recomputation.
    pub fn check(&self, instance: &Instance) -> Result<()> {
        check_permutation(&self.nodes, instance.dimension())?;
        let actual = cycle_cost(instance, &self.nodes);
        if !costs_agree(self.cost, actual) {
            return Err(RefineError::CostDrift {
                cached: self.cost,
                actual,
            });
        }
        Ok(())
    }

    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }
}
