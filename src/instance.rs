//! Problem instance: planar points and their precomputed distances.

use crate::error::{RefineError, Result};

/// A point in the Euclidean plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Symmetric pairwise distances stored as a strict lower triangle.
///
/// Entry `(i, j)` with `i > j` lives at offset `i * (i - 1) / 2 + j`; the
/// diagonal is implicitly zero, so `n * (n - 1) / 2` values are stored.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    dimension: usize,
    values: Vec<f64>,
}

impl DistanceTable {
    /// Precomputes every pairwise Euclidean distance.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut values = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 1..n {
            for j in 0..i {
                values.push(points[i].distance(&points[j]));
            }
        }
        Self {
            dimension: n,
            values,
        }
    }

    /// Number of nodes covered by the table.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Distance between nodes `a` and `b`, in either order.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> f64 {
        debug_assert!(a < self.dimension && b < self.dimension);
        match a.cmp(&b) {
            std::cmp::Ordering::Equal => 0.0,
            std::cmp::Ordering::Greater => self.values[a * (a - 1) / 2 + b],
            std::cmp::Ordering::Less => self.values[b * (b - 1) / 2 + a],
        }
    }
}

/// An immutable Euclidean TSP instance.
///
/// # Examples
///
/// ```
/// use tsp_refine::instance::{Instance, Point};
///
/// let inst = Instance::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(3.0, 4.0),
/// ]).unwrap();
/// assert_eq!(inst.dimension(), 3);
/// assert!((inst.dist(0, 2) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    points: Vec<Point>,
    distances: DistanceTable,
}

impl Instance {
    /// Builds an instance and its distance table. Needs at least 3 points.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            return Err(RefineError::InvalidInstance {
                dimension: points.len(),
            });
        }
        let distances = DistanceTable::from_points(&points);
        Ok(Self { points, distances })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    /// Number of nodes.
    pub fn dimension(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Distance between nodes `a` and `b`.
    #[inline]
    pub fn dist(&self, a: usize, b: usize) -> f64 {
        self.distances.get(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_table_symmetric() {
        let inst = Instance::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 2.0)])
            .unwrap();
        for a in 0..4 {
            assert_eq!(inst.dist(a, a), 0.0);
            for b in 0..4 {
                assert_eq!(inst.dist(a, b), inst.dist(b, a));
                let direct = inst.points()[a].distance(&inst.points()[b]);
                assert!((inst.dist(a, b) - direct).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_distance_table_size() {
        let inst = Instance::from_coords(&[(0.0, 0.0); 6]).unwrap();
        assert_eq!(inst.distances().values.len(), 15);
        assert_eq!(inst.distances().dimension(), 6);
    }

    #[test]
    fn test_instance_rejects_small_dimension() {
        let err = Instance::from_coords(&[(0.0, 0.0), (1.0, 1.0)]).unwrap_err();
        assert_eq!(err, RefineError::InvalidInstance { dimension: 2 });
    }

    #[test]
    fn test_pythagorean_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }
}
