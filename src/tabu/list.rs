//! Per-node tabu memory.

/// Records, for every node, the iteration at which it was last an endpoint
/// of an applied move.
///
/// A node is tabu at iteration `t` under tenure `k` iff it was touched at
/// some `t0` with `t - t0 <= k`. Untouched nodes are never tabu.
#[derive(Debug, Clone)]
pub struct TabuList {
    last_touched: Vec<Option<usize>>,
}

impl TabuList {
    /// Creates an empty list for `n` nodes.
    pub fn new(n: usize) -> Self {
        Self {
            last_touched: vec![None; n],
        }
    }

    /// Whether `node` is forbidden at `iteration` under `tenure`.
    #[inline]
    pub fn is_tabu(&self, node: usize, iteration: usize, tenure: usize) -> bool {
        self.last_touched[node].is_some_and(|t0| iteration.saturating_sub(t0) <= tenure)
    }

    /// Whether none of `nodes` is tabu.
    #[inline]
    pub fn admits(&self, nodes: &[usize], iteration: usize, tenure: usize) -> bool {
        nodes.iter().all(|&node| !self.is_tabu(node, iteration, tenure))
    }

    /// Marks `nodes` as touched at `iteration`.
    pub fn touch(&mut self, nodes: &[usize], iteration: usize) {
        for &node in nodes {
            self.last_touched[node] = Some(iteration);
        }
    }

    /// Iteration at which `node` was last touched.
    pub fn last_touched(&self, node: usize) -> Option<usize> {
        self.last_touched[node]
    }
}
