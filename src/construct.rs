//! Initial tours for the refinement controllers.

use rand::Rng;

use crate::error::{RefineError, Result};
use crate::instance::Instance;
use crate::tour::Tour;

/// Visits nodes in index order.
pub fn identity_tour(instance: &Instance) -> Tour {
    Tour::from_permutation(instance, (0..instance.dimension()).collect())
}

/// Uniformly random permutation.
pub fn random_tour<R: Rng>(instance: &Instance, rng: &mut R) -> Tour {
    let mut nodes: Vec<usize> = (0..instance.dimension()).collect();
    u_numflow::random::shuffle(&mut nodes, rng);
    Tour::from_permutation(instance, nodes)
}

/// Greedy nearest-neighbour construction starting from `start`.
///
/// At each step the closest unvisited node is appended; ties keep the
/// lowest index. Runs in `O(n^2)`.
///
/// # Examples
///
/// ```
/// use tsp_refine::construct::nearest_neighbor;
/// use tsp_refine::instance::Instance;
///
/// let inst = Instance::from_coords(&[(0.0, 0.0), (5.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).unwrap();
/// let tour = nearest_neighbor(&inst, 0).unwrap();
/// assert_eq!(tour.nodes(), &[0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor(instance: &Instance, start: usize) -> Result<Tour> {
    let n = instance.dimension();
    if start >= n {
        return Err(RefineError::NodeOutOfRange {
            node: start,
            dimension: n,
        });
    }

    // Positions `len..` of `nodes` hold the unvisited nodes.
    let mut nodes: Vec<usize> = (0..n).collect();
    nodes.swap(0, start);
    for len in 1..n {
        let last = nodes[len - 1];
        let mut next = len;
        let mut min_dist = instance.dist(last, nodes[len]);
        for pos in len + 1..n {
            let d = instance.dist(last, nodes[pos]);
            if d < min_dist {
                min_dist = d;
                next = pos;
            }
        }
        nodes.swap(len, next);
    }
    Ok(Tour::from_permutation(instance, nodes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Instance {
        Instance::from_coords(&[(0.0, 0.0), (3.0, 0.0), (1.0, 0.0), (2.0, 0.0), (10.0, 0.0)])
            .unwrap()
    }

    #[test]
    fn test_nearest_neighbor_on_line() {
        let inst = line();
        let tour = nearest_neighbor(&inst, 0).unwrap();
        assert_eq!(tour.nodes(), &[0, 2, 3, 1, 4]);
        assert!((tour.cost() - 20.0).abs() < 1e-12);
        assert!(tour.check(&inst).is_ok());
    }

    #[test]
    fn test_nearest_neighbor_start_out_of_range() {
        let inst = line();
        assert!(matches!(
            nearest_neighbor(&inst, 5),
            Err(RefineError::NodeOutOfRange { node: 5, .. })
        ));
    }

    #[test]
    fn test_nearest_neighbor_any_start_is_valid() {
        let inst = line();
        for start in 0..inst.dimension() {
            let tour = nearest_neighbor(&inst, start).unwrap();
            assert_eq!(tour.node(0), start);
            assert!(tour.check(&inst).is_ok());
        }
    }

    #[test]
    fn test_random_tour_is_permutation() {
        let inst = line();
        let mut rng = u_numflow::random::create_rng(42);
        for _ in 0..20 {
            let tour = random_tour(&inst, &mut rng);
            assert!(tour.check(&inst).is_ok());
        }
    }

    #[test]
    fn test_identity_tour() {
        let inst = line();
        let tour = identity_tour(&inst);
        assert_eq!(tour.nodes(), &[0, 1, 2, 3, 4]);
    }
}
